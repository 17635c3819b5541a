//! Field formatting rules shared by the sentence builders.

use chrono::{DateTime, Datelike, Timelike};

/// Knots to kilometers per hour.
pub const KNOTS_TO_KPH: f64 = 1.852;
/// Meters to feet.
pub const METERS_TO_FEET: f64 = 3.2808399;
/// Meters to nautical miles.
pub const METERS_TO_NM: f64 = 1.0 / 1852.0;

/// Decimal degrees to GPS-style degrees-and-minutes (ddmm.mmmm).
///
/// The sign is dropped; hemisphere letters are chosen from the original
/// signed value by the caller. NaN propagates so an unknown angle still
/// renders as a blank field.
pub fn degrees_to_minutes(angle: f64) -> f64 {
    let angle = angle.abs();
    let fraction = angle.fract();
    angle.floor() * 100.0 + fraction * 60.0
}

/// Broken-down UTC time for a fix timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtcTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

/// Break seconds-since-epoch into UTC clock and calendar fields.
///
/// Returns `None` for NaN or out-of-range timestamps; callers render blank
/// time fields in that case. The fractional second is truncated here, the
/// way the wire formats want it; ZDA recovers it with [`seconds_fraction`].
pub fn utc_time(seconds: f64) -> Option<UtcTime> {
    if !seconds.is_finite() {
        return None;
    }
    let dt = DateTime::from_timestamp(seconds as i64, 0)?;
    Some(UtcTime {
        hour: dt.hour(),
        minute: dt.minute(),
        second: dt.second(),
        day: dt.day(),
        month: dt.month(),
        year: dt.year(),
    })
}

/// Fractional part of a timestamp, for sentences that carry sub-second time.
pub fn seconds_fraction(seconds: f64) -> f64 {
    seconds.fract()
}
