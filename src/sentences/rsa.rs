use crate::sentence::{Result, SentenceBuffer};
use crate::state::NavigationData;

// $IIRSA,a.a,A,,,*hh

/// Rudder angle, starboard positive. The port-rudder fields stay blank;
/// single-rudder installation.
pub fn rsa(nav: &NavigationData, out: &mut SentenceBuffer) -> Result<usize> {
    if !nav.rudder_angle.is_finite() {
        return Ok(0);
    }
    let mut w = out.sentence("$IIRSA");
    w.num(nav.rudder_angle, 2);
    w.letter('A');
    w.blank();
    w.blank();
    w.blank();
    w.finish()
}
