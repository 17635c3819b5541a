use crate::sentence::{Result, SentenceBuffer};
use crate::state::EnvironmentData;

// $IIVWR,a.a,a,s.s,N,,,,*hh

/// Relative wind for legacy instruments. The apparent angle is folded to
/// at most 180 degrees with an R or L side letter; only the knots pair is
/// filled, the m/s and km/h pairs stay blank.
pub fn vwr(env: &EnvironmentData, out: &mut SentenceBuffer) -> Result<usize> {
    if !env.wind_apparent.any() {
        return Ok(0);
    }
    let mut w = out.sentence("$IIVWR");
    let angle = env.wind_apparent.angle;
    if angle.is_finite() {
        if angle <= 180.0 {
            w.num(angle, 2);
            w.letter('R');
        } else {
            w.num(360.0 - angle, 2);
            w.letter('L');
        }
    } else {
        w.blank();
        w.blank();
    }
    w.num(env.wind_apparent.speed, 2);
    w.unit(env.wind_apparent.speed, 'N');
    w.blank();
    w.blank();
    w.blank();
    w.blank();
    w.finish()
}
