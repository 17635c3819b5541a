use crate::sentence::{Result, SentenceBuffer};
use crate::state::EnvironmentData;

// $IIMTW,t.t,C*hh

/// Water temperature in Celsius.
pub fn mtw(env: &EnvironmentData, out: &mut SentenceBuffer) -> Result<usize> {
    if !env.temp_water.is_finite() {
        return Ok(0);
    }
    let mut w = out.sentence("$IIMTW");
    w.num(env.temp_water, 2);
    w.letter('C');
    w.finish()
}
