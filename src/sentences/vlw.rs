use crate::sentence::{Result, SentenceBuffer};
use crate::state::NavigationData;

// $IIVLW,t.t,N,p.p,N,*hh

/// Distance traveled through water: total log, then trip log, both in
/// nautical miles.
pub fn vlw(nav: &NavigationData, out: &mut SentenceBuffer) -> Result<usize> {
    if !nav.distance_total.is_finite() && !nav.distance_trip.is_finite() {
        return Ok(0);
    }
    let mut w = out.sentence("$IIVLW");
    w.num(nav.distance_total, 2);
    w.unit(nav.distance_total, 'N');
    w.num(nav.distance_trip, 2);
    w.unit(nav.distance_trip, 'N');
    w.blank();
    w.finish()
}
