//! One builder per NMEA0183 sentence type.
//!
//! Builders guard their own data preconditions and return `Ok(0)` without
//! touching the buffer when the governing values are absent. Choosing which
//! builders run for a change cycle is the encoder's job.

pub mod alm;
pub mod dpt;
pub mod gbs;
pub mod gga;
pub mod gsa;
pub mod gsv;
pub mod hdg;
pub mod mtw;
pub mod mwv;
pub mod rmc;
pub mod rot;
pub mod rsa;
pub mod vhw;
pub mod vlw;
pub mod vtg;
pub mod vwr;
pub mod xte;
pub mod zda;

// Re-export the builder functions
pub use alm::alm;
pub use dpt::dpt;
pub use gbs::gbs;
pub use gga::gga;
pub use gsa::gsa;
pub use gsv::gsv;
pub use hdg::hdg;
pub use mtw::mtw;
pub use mwv::mwv;
pub use rmc::rmc;
pub use rot::rot;
pub use rsa::rsa;
pub use vhw::vhw;
pub use vlw::vlw;
pub use vtg::vtg;
pub use vwr::vwr;
pub use xte::xte;
pub use zda::zda;
