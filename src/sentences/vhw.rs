use crate::format::KNOTS_TO_KPH;
use crate::sentence::{Result, SentenceBuffer};
use crate::state::NavigationData;

// $IIVHW,h.h,T,h.h,M,s.s,N,k.k,K*hh

/// Water speed and heading.
pub fn vhw(nav: &NavigationData, out: &mut SentenceBuffer) -> Result<usize> {
    if !nav.heading_true.is_finite() && !nav.speed_thru_water.is_finite() {
        return Ok(0);
    }
    let mut w = out.sentence("$IIVHW");
    w.num(nav.heading_true, 2);
    w.unit(nav.heading_true, 'T');
    w.num(nav.heading_magnetic, 2);
    w.unit(nav.heading_magnetic, 'M');
    w.num(nav.speed_thru_water, 2);
    w.unit(nav.speed_thru_water, 'N');
    w.num(nav.speed_thru_water * KNOTS_TO_KPH, 2);
    w.unit(nav.speed_thru_water, 'K');
    w.finish()
}
