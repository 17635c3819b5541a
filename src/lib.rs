//! NMEA0183 Sentence Encoder
//!
//! This library encodes decoded marine sensor state into standards-compliant
//! NMEA0183 ASCII sentences and multi-fragment AIS VDM messages:
//! - Sentence builders for position, time, satellite and instrument data
//! - Change-driven dispatch through per-field dirty masks
//! - Capacity-checked output with sentence-atomic commits
//! - AIS payload fragmentation with rotating group ids
//!
//! # Features
//!
//! - **Byte-Exact Output**: Fixed field counts and checksums per the NMEA0183 grammar
//! - **Unknown-Value Handling**: NaN fields render blank, never as `0` or `nan` text
//! - **AIS Fragmentation**: Armored payloads split across numbered VDM fragments
//! - **Bounded Buffers**: Optional byte limits with whole-sentence rollback
//!
//! # Example
//!
//! ```no_run
//! use nmea0183::{DirtyMask, Encoder, EncoderConfig, FixMode, FixStatus, SentenceBuffer, SessionState};
//!
//! let encoder = Encoder::new(EncoderConfig::default());
//!
//! // Decoders fill the snapshot and flag what changed
//! let mut state = SessionState::new();
//! state.fix.mode = FixMode::ThreeD;
//! state.fix.status = FixStatus::Fix;
//! state.fix.latitude = 44.123;
//! state.fix.longitude = 9.543;
//! let mut mask = DirtyMask::new();
//! mask.position = true;
//!
//! // Encode the changed reports into one buffer
//! let mut out = SentenceBuffer::new();
//! encoder.encode_fix(&state, &mask, &mut out).unwrap();
//! for sentence in out.as_str().lines() {
//!     println!("{}", sentence);
//! }
//! ```

pub mod checksum;
pub mod format;
pub mod sentence;
pub mod state;
pub mod mask;
pub mod sentences;
#[cfg(feature = "ais")]
pub mod ais;
pub mod encoder;

// Re-export commonly used types
pub use encoder::{Encoder, EncoderConfig};
pub use mask::{DirtyMask, EnvironmentMask, EnvironmentReport, NavigationMask};
pub use sentence::{EncodeError, SentenceBuffer};
pub use state::{
    Almanac, EnvironmentData, FixMode, FixStatus, GnssFix, NavigationData, Satellite,
    SessionState, SkyView, Wind,
};
#[cfg(feature = "ais")]
pub use ais::{AisChannel, AisVdmReport};
