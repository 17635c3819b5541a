use crate::sentence::{Result, SentenceBuffer};
use crate::state::{EnvironmentData, NavigationData};

// $IIHDG,h.h,d.d,a,v.v,a*hh

/// Magnetic heading with compass deviation and variation. Deviation and
/// variation each carry an E/W letter from their sign and stay blank when
/// unknown.
pub fn hdg(
    nav: &NavigationData,
    env: &EnvironmentData,
    out: &mut SentenceBuffer,
) -> Result<usize> {
    if !nav.heading_magnetic.is_finite() {
        return Ok(0);
    }
    let mut w = out.sentence("$IIHDG");
    w.num(nav.heading_magnetic, 2);
    w.num(env.deviation.abs(), 2);
    w.hemisphere(env.deviation, 'E', 'W');
    w.num(env.variation.abs(), 2);
    w.hemisphere(env.variation, 'E', 'W');
    w.finish()
}
