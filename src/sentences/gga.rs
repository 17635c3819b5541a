use crate::format::{degrees_to_minutes, utc_time};
use crate::sentence::{Result, SentenceBuffer};
use crate::state::{FixMode, GnssFix};

// $GPGGA,hhmmss,llll.llll,a,yyyyy.yyyy,a,q,ss,h.h,a.a,M,g.g,M,v.v,a*hh

/// Position fix sentence. Emitted only while a fix is held.
pub fn gga(fix: &GnssFix, out: &mut SentenceBuffer) -> Result<usize> {
    if fix.mode <= FixMode::NoFix {
        return Ok(0);
    }
    let mut w = out.sentence("$GPGGA");
    match utc_time(fix.time) {
        Some(tm) => w.field(&format!("{:02}{:02}{:02}", tm.hour, tm.minute, tm.second)),
        None => w.blank(),
    }
    w.num_padded(degrees_to_minutes(fix.latitude), 9, 4);
    w.hemisphere(fix.latitude, 'N', 'S');
    w.num_padded(degrees_to_minutes(fix.longitude), 10, 4);
    w.hemisphere(fix.longitude, 'E', 'W');
    w.int(fix.status as i64);
    w.int_padded(fix.satellites_used as i64, 2);
    w.num(fix.hdop, 2);
    w.num(fix.altitude, 2);
    w.unit(fix.altitude, 'M');
    w.num(fix.separation, 3);
    w.unit(fix.separation, 'M');
    w.num(fix.mag_var.abs(), 2);
    w.hemisphere(fix.mag_var, 'E', 'W');
    w.finish()
}
