use crate::format::METERS_TO_FEET;
use crate::sentence::{Result, SentenceBuffer};
use crate::state::NavigationData;

// $IIDPT,d.d,o.o*hh
// $IIDBT,f.f,f,d.d,M,,*hh

/// Depth below the transducer. With a known transducer offset the depth
/// goes out as DPT; without one it goes out as DBT in feet and meters.
/// An offset with no depth reading emits nothing.
pub fn dpt(nav: &NavigationData, out: &mut SentenceBuffer) -> Result<usize> {
    if !nav.depth.is_finite() {
        return Ok(0);
    }
    if nav.depth_offset.is_finite() {
        let mut w = out.sentence("$IIDPT");
        w.num(nav.depth, 2);
        w.num(nav.depth_offset, 2);
        w.finish()
    } else {
        let mut w = out.sentence("$IIDBT");
        w.num(nav.depth * METERS_TO_FEET, 2);
        w.letter('f');
        w.num(nav.depth, 2);
        w.letter('M');
        w.blank();
        w.blank();
        w.finish()
    }
}
