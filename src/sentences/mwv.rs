use crate::sentence::{Result, SentenceBuffer};
use crate::state::EnvironmentData;

// $IIMWV,a.a,a,s.s,N,A*hh

/// Wind speed and angle. Apparent readings win over true ones,
/// independently for the angle (reference letter R or T) and the speed.
pub fn mwv(env: &EnvironmentData, out: &mut SentenceBuffer) -> Result<usize> {
    if !env.wind_apparent.any() && !env.wind_true_north.any() && !env.wind_true_water.any() {
        return Ok(0);
    }
    let mut w = out.sentence("$IIMWV");
    if env.wind_apparent.angle.is_finite() {
        w.num(env.wind_apparent.angle, 2);
        w.letter('R');
    } else if env.wind_true_north.angle.is_finite() {
        w.num(env.wind_true_north.angle, 2);
        w.letter('T');
    } else if env.wind_true_water.angle.is_finite() {
        w.num(env.wind_true_water.angle, 2);
        w.letter('T');
    } else {
        w.blank();
        w.blank();
    }
    let speed = if env.wind_apparent.speed.is_finite() {
        env.wind_apparent.speed
    } else if env.wind_true_north.speed.is_finite() {
        env.wind_true_north.speed
    } else {
        env.wind_true_water.speed
    };
    w.num(speed, 2);
    w.unit(speed, 'N');
    w.letter('A');
    w.finish()
}
