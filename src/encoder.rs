//! Report dispatch: which sentences go out for which state changes.
//!
//! Each `encode_*` entry point inspects the dirty mask, runs the builders
//! for the changed report group in a fixed order and appends their output
//! to the caller's buffer. The encoder itself is almost stateless; the one
//! exception is the rotating AIS group id.

use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "ais")]
use crate::ais::vdm;
use crate::mask::{DirtyMask, EnvironmentReport};
use crate::sentence::{Result, SentenceBuffer};
use crate::sentences::{
    alm, dpt, gbs, gga, gsa, gsv, hdg, mtw, mwv, rmc, rot, rsa, vhw, vlw, vtg, vwr, xte, zda,
};
use crate::state::SessionState;

/// Encoder tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// Receiver channel count; the GSA satellite-id list is padded to
    /// this many fields.
    pub channels: usize,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self { channels: 12 }
    }
}

/// Sentence composer for one output stream.
///
/// Encoding reads the session snapshot and never writes it back; the only
/// state an encoder keeps between calls is the group id counter that ties
/// multi-fragment AIS trains together. Separate streams get separate
/// encoders.
#[derive(Debug, Default)]
pub struct Encoder {
    config: EncoderConfig,
    #[cfg(feature = "ais")]
    ais_sequence: u8,
}

impl Encoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self {
            config,
            #[cfg(feature = "ais")]
            ais_sequence: 0,
        }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Position, time and quality report: ZDA for a time change, GGA and
    /// RMC for a position change, GSA when the solution (mode, DOPs, used
    /// set) changed, GBS for any quality change. Returns the bytes appended.
    pub fn encode_fix(
        &self,
        state: &SessionState,
        mask: &DirtyMask,
        out: &mut SentenceBuffer,
    ) -> Result<usize> {
        if !mask.time && !mask.position && !mask.quality_changed() {
            return Ok(0);
        }
        debug!("Fix report: mode {:?}, status {:?}", state.fix.mode, state.fix.status);
        let mut written = 0;
        if mask.time {
            written += zda(&state.fix, out)?;
        }
        if mask.position {
            written += gga(&state.fix, out)?;
            written += rmc(&state.fix, &state.navigation, out)?;
        }
        if mask.mode || mask.dop || mask.used {
            written += gsa(&state.fix, &state.sky, self.config.channels, out)?;
        }
        if mask.quality_changed() {
            written += gbs(&state.fix, out)?;
        }
        Ok(written)
    }

    /// Satellites-in-view report: the GSV sentence group.
    pub fn encode_sky(
        &self,
        state: &SessionState,
        mask: &DirtyMask,
        out: &mut SentenceBuffer,
    ) -> Result<usize> {
        if !mask.satellites {
            return Ok(0);
        }
        debug!("Sky report: {} satellites in view", state.sky.visible());
        gsv(&state.sky, out)
    }

    /// Almanac report: one ALM sentence when a decoded almanac is present.
    pub fn encode_almanac(
        &self,
        state: &SessionState,
        mask: &DirtyMask,
        out: &mut SentenceBuffer,
    ) -> Result<usize> {
        match &state.almanac {
            Some(almanac) if mask.almanac => {
                debug!("Almanac report for sv {}", almanac.sv);
                alm(almanac, out)
            }
            _ => Ok(0),
        }
    }

    /// AIS report: the VDM fragment train(s) for the pending message.
    /// The only entry point needing `&mut self`; it advances the group id
    /// when a message fragments.
    #[cfg(feature = "ais")]
    pub fn encode_ais(
        &mut self,
        state: &SessionState,
        mask: &DirtyMask,
        out: &mut SentenceBuffer,
    ) -> Result<usize> {
        match &state.ais {
            Some(report) if mask.ais => {
                debug!(
                    "AIS report: type {} on channel {:?}",
                    report.message_type, report.channel
                );
                vdm(report, &mut self.ais_sequence, out)
            }
            _ => Ok(0),
        }
    }

    /// Instrument navigation report. Builders run in a fixed priority
    /// order; each consults only its own mask flags, so one cycle can
    /// carry several sentences.
    pub fn encode_navigation(
        &self,
        state: &SessionState,
        mask: &DirtyMask,
        out: &mut SentenceBuffer,
    ) -> Result<usize> {
        let dirty = &mask.navigation;
        if !dirty.any() {
            return Ok(0);
        }
        debug!("Navigation report");
        let nav = &state.navigation;
        let mut written = 0;
        if dirty.speed_thru_water {
            written += vhw(nav, out)?;
        }
        if dirty.speed_over_ground || dirty.course_over_ground {
            written += vtg(nav, out)?;
        }
        if dirty.distance_total || dirty.distance_trip {
            written += vlw(nav, out)?;
        }
        if dirty.depth {
            written += dpt(nav, out)?;
        }
        if dirty.heading_magnetic {
            written += hdg(nav, &state.environment, out)?;
        }
        if dirty.heading_true {
            written += vhw(nav, out)?;
        }
        if dirty.rate_of_turn {
            written += rot(nav, out)?;
        }
        if dirty.xte {
            written += xte(nav, out)?;
        }
        if dirty.rudder_angle {
            written += rsa(nav, out)?;
        }
        Ok(written)
    }

    /// Environment report for call index `num`.
    ///
    /// Unlike the other entry points this returns the number of calls the
    /// change cycle expects, not bytes: apparent wind takes two calls (VWR
    /// on index 0, MWV after), everything else one. Callers invoke it once
    /// per index in `0..count`.
    pub fn encode_environment(
        &self,
        state: &SessionState,
        mask: &DirtyMask,
        num: usize,
        out: &mut SentenceBuffer,
    ) -> Result<usize> {
        let report = mask.environment.report();
        if report != EnvironmentReport::NoReport {
            debug!("Environment report {:?}, call {}", report, num);
        }
        match report {
            EnvironmentReport::ApparentWind => {
                if num == 0 {
                    vwr(&state.environment, out)?;
                } else {
                    mwv(&state.environment, out)?;
                }
                Ok(2)
            }
            EnvironmentReport::TrueWind => {
                mwv(&state.environment, out)?;
                Ok(1)
            }
            EnvironmentReport::WaterTemperature => {
                mtw(&state.environment, out)?;
                Ok(1)
            }
            EnvironmentReport::NoReport => Ok(1),
        }
    }
}
