use crate::format::utc_time;
use crate::sentence::{Result, SentenceBuffer};
use crate::state::GnssFix;

// $GPGBS,hhmmss,x.x,M,y.y,M,v.v,M*hh

/// Satellite fault detection / expected-error sentence. Emitted only when
/// the receiver supplied the full set of error estimates.
pub fn gbs(fix: &GnssFix, out: &mut SentenceBuffer) -> Result<usize> {
    if !(fix.epx.is_finite()
        && fix.epy.is_finite()
        && fix.epv.is_finite()
        && fix.epe.is_finite())
    {
        return Ok(0);
    }
    let mut w = out.sentence("$GPGBS");
    match utc_time(fix.time) {
        Some(tm) => w.field(&format!("{:02}{:02}{:02}", tm.hour, tm.minute, tm.second)),
        None => w.blank(),
    }
    w.num(fix.epx, 2);
    w.unit(fix.epx, 'M');
    w.num(fix.epy, 2);
    w.unit(fix.epy, 'M');
    w.num(fix.epv, 2);
    w.unit(fix.epv, 'M');
    w.finish()
}
