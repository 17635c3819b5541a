use crate::format::METERS_TO_NM;
use crate::sentence::{Result, SentenceBuffer};
use crate::state::NavigationData;

// $IIXTE,A,A,x.x,a,N,*hh

/// Cross-track error. The stored error is meters, negative right of track;
/// on the wire it becomes an unsigned nautical-mile magnitude plus a
/// steer-direction letter, R to steer right, L to steer left.
pub fn xte(nav: &NavigationData, out: &mut SentenceBuffer) -> Result<usize> {
    if !nav.xte.is_finite() {
        return Ok(0);
    }
    let mut w = out.sentence("$IIXTE");
    w.letter('A');
    w.letter('A');
    w.num((nav.xte * METERS_TO_NM).abs(), 2);
    w.letter(if nav.xte < 0.0 { 'R' } else { 'L' });
    w.letter('N');
    w.blank();
    w.finish()
}
