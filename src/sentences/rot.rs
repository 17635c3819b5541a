use crate::sentence::{Result, SentenceBuffer};
use crate::state::NavigationData;

// $IIROT,r.r,A*hh

/// Rate of turn, starboard positive.
pub fn rot(nav: &NavigationData, out: &mut SentenceBuffer) -> Result<usize> {
    if !nav.rate_of_turn.is_finite() {
        return Ok(0);
    }
    let mut w = out.sentence("$IIROT");
    // degrees per second to degrees per minute
    w.num(nav.rate_of_turn * 60.0, 2);
    w.letter('A');
    w.finish()
}
