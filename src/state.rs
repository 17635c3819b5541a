//! Decoded sensor state consumed by the encoder.
//!
//! Numeric fields use `f64::NAN` as the one and only "value not known"
//! sentinel; the sentence builders render such fields as empty. `Default`
//! therefore produces an all-unknown snapshot.

#[cfg(feature = "ais")]
use crate::ais::AisVdmReport;

/// Fix dimensionality, as carried in GSA.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum FixMode {
    #[default]
    NotSeen = 0,
    NoFix = 1,
    TwoD = 2,
    ThreeD = 3,
}

/// Fix quality, as carried in GGA (numeric) and RMC (A/V letter).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FixStatus {
    #[default]
    NoFix = 0,
    Fix = 1,
    DgpsFix = 2,
}

/// One GNSS position/time solution.
#[derive(Debug, Clone)]
pub struct GnssFix {
    pub time: f64, // seconds since the Unix epoch, UTC
    pub mode: FixMode,
    pub status: FixStatus,
    pub latitude: f64,  // signed degrees, north positive
    pub longitude: f64, // signed degrees, east positive
    pub altitude: f64,  // meters above mean sea level
    pub separation: f64, // WGS84 geoidal separation, meters
    pub mag_var: f64,   // magnetic variation, degrees, east positive
    pub satellites_used: u8,
    pub pdop: f64,
    pub hdop: f64,
    pub vdop: f64,
    pub epx: f64, // expected longitude error, meters
    pub epy: f64, // expected latitude error, meters
    pub epv: f64, // expected vertical error, meters
    pub epe: f64, // expected spherical position error, meters
}

impl Default for GnssFix {
    fn default() -> Self {
        Self {
            time: f64::NAN,
            mode: FixMode::NotSeen,
            status: FixStatus::NoFix,
            latitude: f64::NAN,
            longitude: f64::NAN,
            altitude: f64::NAN,
            separation: f64::NAN,
            mag_var: f64::NAN,
            satellites_used: 0,
            pdop: f64::NAN,
            hdop: f64::NAN,
            vdop: f64::NAN,
            epx: f64::NAN,
            epy: f64::NAN,
            epv: f64::NAN,
            epe: f64::NAN,
        }
    }
}

impl GnssFix {
    pub fn new() -> Self {
        Self::default()
    }
}

/// One satellite of the sky view.
#[derive(Debug, Clone, Copy)]
pub struct Satellite {
    pub prn: u16,
    pub elevation: i16, // degrees above the horizon
    pub azimuth: u16,   // degrees true
    pub ss: f64,        // signal strength, dB-Hz
    pub used: bool,     // participates in the current solution
}

/// The satellites currently tracked by the receiver.
#[derive(Debug, Clone, Default)]
pub struct SkyView {
    pub satellites: Vec<Satellite>,
}

impl SkyView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of satellites in view.
    pub fn visible(&self) -> usize {
        self.satellites.len()
    }

    /// PRNs of the satellites used in the solution, in view order.
    pub fn used_prns(&self) -> impl Iterator<Item = u16> + '_ {
        self.satellites.iter().filter(|s| s.used).map(|s| s.prn)
    }
}

/// Raw almanac orbital parameters for one satellite, as decoded from
/// subframe 5. Fields keep their unscaled bit patterns; ALM transmits them
/// as fixed-width hex.
#[derive(Debug, Clone, Copy)]
pub struct Almanac {
    pub sv: u8,      // satellite the almanac describes
    pub week: u16,   // GPS week, reduced mod 1024 on the wire
    pub svh: u8,     // satellite health
    pub e: u16,      // eccentricity
    pub toa: u8,     // time of applicability
    pub deltai: u16, // inclination offset
    pub omegad: u16, // rate of right ascension
    pub sqrt_a: u32, // square root of semi-major axis
    pub omega: u32,  // argument of perigee
    pub omega0: u32, // right ascension at week epoch
    pub m0: u32,     // mean anomaly
    pub af0: u16,    // clock bias
    pub af1: u16,    // clock drift
}

/// Vessel navigation state from the instrument bus.
#[derive(Debug, Clone)]
pub struct NavigationData {
    pub depth: f64,        // meters below the transducer
    pub depth_offset: f64, // transducer offset from the waterline, meters
    pub speed_thru_water: f64,  // knots
    pub speed_over_ground: f64, // knots
    pub course_over_ground: f64, // degrees true
    pub heading_true: f64,     // degrees
    pub heading_magnetic: f64, // degrees
    pub rate_of_turn: f64,     // degrees per second, starboard positive
    pub rudder_angle: f64,     // degrees, starboard positive
    pub xte: f64,              // cross-track error, meters, negative right of track
    pub distance_total: f64,   // log distance, nautical miles
    pub distance_trip: f64,    // trip distance, nautical miles
}

impl Default for NavigationData {
    fn default() -> Self {
        Self {
            depth: f64::NAN,
            depth_offset: f64::NAN,
            speed_thru_water: f64::NAN,
            speed_over_ground: f64::NAN,
            course_over_ground: f64::NAN,
            heading_true: f64::NAN,
            heading_magnetic: f64::NAN,
            rate_of_turn: f64::NAN,
            rudder_angle: f64::NAN,
            xte: f64::NAN,
            distance_total: f64::NAN,
            distance_trip: f64::NAN,
        }
    }
}

impl NavigationData {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A wind observation.
#[derive(Debug, Clone, Copy)]
pub struct Wind {
    pub angle: f64, // degrees off the bow, clockwise
    pub speed: f64, // knots
}

impl Default for Wind {
    fn default() -> Self {
        Self {
            angle: f64::NAN,
            speed: f64::NAN,
        }
    }
}

impl Wind {
    /// True when either component carries a reading.
    pub fn any(&self) -> bool {
        self.angle.is_finite() || self.speed.is_finite()
    }
}

/// Environment readings from the instrument bus.
#[derive(Debug, Clone)]
pub struct EnvironmentData {
    pub wind_apparent: Wind,
    pub wind_true_north: Wind, // true wind referenced to ground, angle vs true north
    pub wind_true_water: Wind, // true wind referenced to water
    pub deviation: f64, // compass deviation, degrees, east positive
    pub variation: f64, // magnetic variation, degrees, east positive
    pub temp_water: f64, // Celsius
    pub temp_air: f64,   // Celsius
}

impl Default for EnvironmentData {
    fn default() -> Self {
        Self {
            wind_apparent: Wind::default(),
            wind_true_north: Wind::default(),
            wind_true_water: Wind::default(),
            deviation: f64::NAN,
            variation: f64::NAN,
            temp_water: f64::NAN,
            temp_air: f64::NAN,
        }
    }
}

impl EnvironmentData {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Everything the encoder can be asked to report in one cycle.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub fix: GnssFix,
    pub sky: SkyView,
    pub almanac: Option<Almanac>,
    pub navigation: NavigationData,
    pub environment: EnvironmentData,
    #[cfg(feature = "ais")]
    pub ais: Option<AisVdmReport>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }
}
