//! AIS re-emission as `!AIVDM` sentences.
//!
//! An armored payload that fits one sentence goes out alone with an empty
//! group id. Longer payloads are split into a numbered fragment train tied
//! together by a single-digit group id drawn from a rotating counter, so
//! receivers can reassemble interleaved trains from different messages.

use tracing::warn;

use crate::sentence::{Result, SentenceBuffer};

/// Longest armored payload carried by a single VDM sentence.
const MAX_FRAGMENT_CHARS: usize = 60;

/// AIS radio channel a message was received on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AisChannel {
    A,
    B,
}

impl AisChannel {
    fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
        }
    }
}

/// A decoded AIS message ready for re-emission.
///
/// Payloads are ASCII six-bit armored text. Message type 24 is transmitted
/// in two parts and carries the armored encoding of its second part in
/// `second_payload`.
#[derive(Debug, Clone)]
pub struct AisVdmReport {
    pub message_type: u8,
    pub payload: String,
    pub second_payload: Option<String>,
    pub channel: AisChannel,
}

/// Unused bits in the last six-bit group of an armored payload.
fn fill_bits(chars: usize) -> u8 {
    ((6 - chars % 6) % 6) as u8
}

/// Emit one armored payload as a single sentence or a fragment train.
///
/// `sequence` advances, modulo 10, only when the payload actually
/// fragments; single-fragment sentences leave it alone and carry an empty
/// group id.
fn emit_payload(
    payload: &str,
    channel: AisChannel,
    sequence: &mut u8,
    out: &mut SentenceBuffer,
) -> Result<usize> {
    // Armored text is six-bit ASCII; anything else cannot be put on the
    // wire, so a corrupt payload is dropped rather than emitted.
    if !payload.is_ascii() {
        warn!("Discarding non-ASCII armored payload ({} bytes)", payload.len());
        return Ok(0);
    }
    let total = payload.len();
    if total <= MAX_FRAGMENT_CHARS {
        let mut w = out.sentence("!AIVDM");
        w.int(1);
        w.int(1);
        w.blank();
        w.letter(channel.letter());
        w.field(payload);
        w.int(i64::from(fill_bits(total)));
        return w.finish();
    }

    let fragments = total.div_ceil(MAX_FRAGMENT_CHARS);
    let group = *sequence;
    *sequence = (*sequence + 1) % 10;

    let mut written = 0;
    let mut index = 1;
    let mut start = 0;
    while start < total {
        let end = (start + MAX_FRAGMENT_CHARS).min(total);
        let chunk = &payload[start..end];
        let mut w = out.sentence("!AIVDM");
        w.int(fragments as i64);
        w.int(index);
        w.int(i64::from(group));
        w.letter(channel.letter());
        w.field(chunk);
        if end == total {
            w.int(i64::from(fill_bits(end - start)));
        } else {
            w.int(0);
        }
        written += w.finish()?;
        index += 1;
        start = end;
    }
    Ok(written)
}

/// Emit an AIS report as one or more VDM sentences, returning the bytes
/// appended. A second payload follows as its own train with fragment
/// numbering restarting at 1.
pub fn vdm(report: &AisVdmReport, sequence: &mut u8, out: &mut SentenceBuffer) -> Result<usize> {
    let mut written = emit_payload(&report.payload, report.channel, sequence, out)?;
    if let Some(second) = &report.second_payload {
        written += emit_payload(second, report.channel, sequence, out)?;
    }
    Ok(written)
}
