use crate::sentence::{Result, SentenceBuffer};
use crate::state::Almanac;

// $GPALM,1,1,ss,wwww,hh,eeee,tt,iiii,oooo,aaaaa,oooooo,oooooo,mmmmmm,fff,fff*hh

/// Almanac data for one satellite. Orbital parameters travel as fixed-width
/// lowercase hex, straight from the subframe bit fields; the week number is
/// reduced mod 1024 as it is on the GPS wire.
pub fn alm(almanac: &Almanac, out: &mut SentenceBuffer) -> Result<usize> {
    let mut w = out.sentence("$GPALM");
    w.int(1);
    w.int(1);
    w.int_padded(almanac.sv as i64, 2);
    w.int_padded((almanac.week % 1024) as i64, 4);
    w.hex_padded(almanac.svh as u32, 2);
    w.hex_padded(almanac.e as u32, 4);
    w.hex_padded(almanac.toa as u32, 2);
    w.hex_padded(almanac.deltai as u32, 4);
    w.hex_padded(almanac.omegad as u32, 4);
    w.hex_padded(almanac.sqrt_a, 5);
    w.hex_padded(almanac.omega, 6);
    w.hex_padded(almanac.omega0, 6);
    w.hex_padded(almanac.m0, 6);
    w.hex_padded(almanac.af0 as u32, 3);
    w.hex_padded(almanac.af1 as u32, 3);
    w.finish()
}
