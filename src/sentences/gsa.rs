use crate::sentence::{Result, SentenceBuffer};
use crate::state::{FixMode, GnssFix, SkyView};

// $GPGSA,A,m,s1,s2,...,p.p,h.h,v.v*hh

/// Active-satellite and DOP sentence. The satellite-id list is padded with
/// blanks to the receiver channel count so the field count never moves.
pub fn gsa(
    fix: &GnssFix,
    sky: &SkyView,
    channels: usize,
    out: &mut SentenceBuffer,
) -> Result<usize> {
    let mut w = out.sentence("$GPGSA");
    w.letter('A'); // selection is always automatic
    w.int(fix.mode as i64);
    let mut listed = 0;
    for prn in sky.used_prns().take(channels) {
        w.int_padded(prn as i64, 2);
        listed += 1;
    }
    for _ in listed..channels {
        w.blank();
    }
    if fix.mode == FixMode::NoFix {
        w.blank();
        w.blank();
        w.blank();
    } else {
        w.num(fix.pdop, 1);
        w.num(fix.hdop, 1);
        w.num(fix.vdop, 1);
    }
    w.finish()
}
