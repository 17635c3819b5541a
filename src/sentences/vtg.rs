use crate::format::KNOTS_TO_KPH;
use crate::sentence::{Result, SentenceBuffer};
use crate::state::NavigationData;

// $IIVTG,c.c,T,,,s.s,N,k.k,K*hh

/// Course and speed over ground. The magnetic-course pair stays blank; no
/// instrument on the bus supplies it.
pub fn vtg(nav: &NavigationData, out: &mut SentenceBuffer) -> Result<usize> {
    if !nav.course_over_ground.is_finite() && !nav.speed_over_ground.is_finite() {
        return Ok(0);
    }
    let mut w = out.sentence("$IIVTG");
    w.num(nav.course_over_ground, 2);
    w.unit(nav.course_over_ground, 'T');
    w.blank();
    w.blank();
    w.num(nav.speed_over_ground, 2);
    w.unit(nav.speed_over_ground, 'N');
    w.num(nav.speed_over_ground * KNOTS_TO_KPH, 2);
    w.unit(nav.speed_over_ground, 'K');
    w.finish()
}
