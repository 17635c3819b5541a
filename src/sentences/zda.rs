use crate::format::{seconds_fraction, utc_time};
use crate::sentence::{Result, SentenceBuffer};
use crate::state::{FixMode, GnssFix};

// $GPZDA,hhmmss.ss,dd,mm,yyyy,00,00*hh

/// Time and date sentence, pinned to UTC. Receivers in the field never
/// report local zone offsets, so the zone fields stay `00,00`.
pub fn zda(fix: &GnssFix, out: &mut SentenceBuffer) -> Result<usize> {
    if fix.mode <= FixMode::NoFix {
        return Ok(0);
    }
    let Some(tm) = utc_time(fix.time) else {
        return Ok(0);
    };
    let seconds = tm.second as f64 + seconds_fraction(fix.time);
    let mut w = out.sentence("$GPZDA");
    w.field(&format!("{:02}{:02}{:05.2}", tm.hour, tm.minute, seconds));
    w.int_padded(tm.day as i64, 2);
    w.int_padded(tm.month as i64, 2);
    w.int_padded(tm.year as i64, 4);
    w.field("00");
    w.field("00");
    w.finish()
}
