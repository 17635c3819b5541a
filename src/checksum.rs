//! NMEA0183 checksum arithmetic.
//!
//! The checksum of a sentence is the running XOR of every byte between the
//! leading `$` or `!` and the `*` delimiter, transmitted as two uppercase
//! hex digits.

/// Compute the checksum over a sentence body (leader and `*` excluded).
pub fn nmea_checksum(body: &[u8]) -> u8 {
    body.iter().fold(0, |sum, b| sum ^ b)
}
