//! Dirty-field masks driving report dispatch.
//!
//! Decoders mark which parts of the session state changed in a cycle; the
//! encoder emits only the sentences those parts feed. All flags are named
//! booleans rather than bit positions, so dispatch sites can match on them
//! exhaustively.

/// Top-level mask over one session-state snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirtyMask {
    pub time: bool,
    pub position: bool,
    pub mode: bool,
    pub dop: bool,
    pub used: bool,
    pub error_estimates: bool,
    pub satellites: bool,
    pub almanac: bool,
    #[cfg(feature = "ais")]
    pub ais: bool,
    pub navigation: NavigationMask,
    pub environment: EnvironmentMask,
}

impl DirtyMask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every flag, ready for the next cycle.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when any of the quality inputs (mode, DOPs, used set, error
    /// estimates) changed.
    pub fn quality_changed(&self) -> bool {
        self.mode || self.dop || self.used || self.error_estimates
    }
}

/// Per-field mask over [`NavigationData`](crate::state::NavigationData).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationMask {
    pub speed_thru_water: bool,
    pub speed_over_ground: bool,
    pub course_over_ground: bool,
    pub distance_total: bool,
    pub distance_trip: bool,
    pub depth: bool,
    pub heading_magnetic: bool,
    pub heading_true: bool,
    pub rate_of_turn: bool,
    pub xte: bool,
    pub rudder_angle: bool,
}

impl NavigationMask {
    pub fn any(&self) -> bool {
        self.speed_thru_water
            || self.speed_over_ground
            || self.course_over_ground
            || self.distance_total
            || self.distance_trip
            || self.depth
            || self.heading_magnetic
            || self.heading_true
            || self.rate_of_turn
            || self.xte
            || self.rudder_angle
    }
}

/// Per-field mask over [`EnvironmentData`](crate::state::EnvironmentData).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvironmentMask {
    pub wind_apparent_angle: bool,
    pub wind_apparent_speed: bool,
    pub wind_true_north_angle: bool,
    pub wind_true_north_speed: bool,
    pub wind_true_water_angle: bool,
    pub wind_true_water_speed: bool,
    pub temp_water: bool,
    pub temp_air: bool,
    pub variation: bool,
    pub deviation: bool,
}

/// What an environment change cycle reports. Derived from the mask; the
/// dispatcher matches on this instead of on flag combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentReport {
    /// Apparent wind changed: a VWR plus an MWV sentence.
    ApparentWind,
    /// True wind changed: one MWV sentence.
    TrueWind,
    /// Water temperature changed: one MTW sentence.
    WaterTemperature,
    /// Nothing changed that has a sentence of its own.
    NoReport,
}

impl EnvironmentMask {
    pub fn any(&self) -> bool {
        self.wind_apparent_angle
            || self.wind_apparent_speed
            || self.wind_true_north_angle
            || self.wind_true_north_speed
            || self.wind_true_water_angle
            || self.wind_true_water_speed
            || self.temp_water
            || self.temp_air
            || self.variation
            || self.deviation
    }

    /// Classify the change set. Apparent wind wins over true wind, which
    /// wins over water temperature; air temperature, variation and
    /// deviation have no sentence of their own.
    pub fn report(&self) -> EnvironmentReport {
        if self.wind_apparent_angle || self.wind_apparent_speed {
            EnvironmentReport::ApparentWind
        } else if self.wind_true_north_angle
            || self.wind_true_north_speed
            || self.wind_true_water_angle
            || self.wind_true_water_speed
        {
            EnvironmentReport::TrueWind
        } else if self.temp_water {
            EnvironmentReport::WaterTemperature
        } else {
            EnvironmentReport::NoReport
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mask_is_clean() {
        let mask = DirtyMask::default();
        assert!(!mask.time);
        assert!(!mask.position);
        assert!(!mask.quality_changed());
        assert!(!mask.navigation.any());
        assert!(!mask.environment.any());
    }

    #[test]
    fn test_quality_changed() {
        let mut mask = DirtyMask::default();
        mask.dop = true;
        assert!(mask.quality_changed());
        mask.clear();
        assert!(!mask.quality_changed());
        mask.error_estimates = true;
        assert!(mask.quality_changed());
    }

    #[test]
    fn test_environment_report_apparent_wins() {
        let mut env = EnvironmentMask::default();
        env.wind_apparent_speed = true;
        env.wind_true_water_angle = true;
        env.temp_water = true;
        assert_eq!(env.report(), EnvironmentReport::ApparentWind);
    }

    #[test]
    fn test_environment_report_true_wind() {
        let mut env = EnvironmentMask::default();
        env.wind_true_north_speed = true;
        assert_eq!(env.report(), EnvironmentReport::TrueWind);

        let mut env = EnvironmentMask::default();
        env.wind_true_water_angle = true;
        assert_eq!(env.report(), EnvironmentReport::TrueWind);
    }

    #[test]
    fn test_environment_report_water_temperature() {
        let mut env = EnvironmentMask::default();
        env.temp_water = true;
        assert_eq!(env.report(), EnvironmentReport::WaterTemperature);
    }

    #[test]
    fn test_environment_report_silent_fields() {
        let mut env = EnvironmentMask::default();
        env.temp_air = true;
        env.variation = true;
        env.deviation = true;
        assert_eq!(env.report(), EnvironmentReport::NoReport);
        assert!(env.any());
    }
}
