//! Sentence assembly on top of a capacity-checked output buffer.
//!
//! Builders start a sentence with [`SentenceBuffer::sentence`], append fields
//! through the [`SentenceWriter`] helpers and seal it with
//! [`SentenceWriter::finish`], which appends the checksum trailer. A sentence
//! is committed to the buffer as a whole: if it would push the buffer past
//! its byte limit, nothing of it is kept and [`EncodeError::BufferFull`] is
//! returned.
//!
//! Every field helper emits exactly one comma separator, so the field count
//! of a sentence is the same whether its values are known or not. Unknown
//! values (NaN) render as empty fields, never as `0` or `nan` text.

use thiserror::Error;
use tracing::trace;

use crate::checksum::nmea_checksum;

/// Errors produced while encoding sentences.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A finished sentence would grow the output past its byte limit. The
    /// buffer still holds exactly what it held before the sentence started.
    #[error("sentence needs the buffer to grow to {needed} bytes but it is limited to {limit}")]
    BufferFull { limit: usize, needed: usize },
}

pub type Result<T> = std::result::Result<T, EncodeError>;

/// Growable output buffer for encoded sentences, with an optional byte limit.
#[derive(Debug, Default)]
pub struct SentenceBuffer {
    text: String,
    limit: Option<usize>,
}

impl SentenceBuffer {
    /// An unlimited buffer. Encoding into it cannot fail.
    pub fn new() -> Self {
        Self::default()
    }

    /// A buffer that refuses to grow past `limit` bytes.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            text: String::new(),
            limit: Some(limit),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Drop the accumulated text, keeping the limit.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Start a sentence with its leader, e.g. `$GPGGA` or `!AIVDM`.
    pub fn sentence(&mut self, leader: &str) -> SentenceWriter<'_> {
        SentenceWriter {
            sentence: String::from(leader),
            out: self,
        }
    }
}

/// Writer for one in-flight sentence.
///
/// Dropping a writer without calling [`finish`](Self::finish) discards the
/// sentence and leaves the buffer untouched.
#[derive(Debug)]
pub struct SentenceWriter<'a> {
    out: &'a mut SentenceBuffer,
    sentence: String,
}

impl SentenceWriter<'_> {
    /// Append a raw text field.
    pub fn field(&mut self, value: &str) {
        self.sentence.push(',');
        self.sentence.push_str(value);
    }

    /// Append an empty field.
    pub fn blank(&mut self) {
        self.sentence.push(',');
    }

    /// Append a single-letter field.
    pub fn letter(&mut self, letter: char) {
        self.sentence.push(',');
        self.sentence.push(letter);
    }

    /// Append a numeric field with fixed decimal precision, blank if the
    /// value is not finite.
    pub fn num(&mut self, value: f64, precision: usize) {
        if value.is_finite() {
            let text = format!("{:.*}", precision, value);
            self.field(&text);
        } else {
            self.blank();
        }
    }

    /// Like [`num`](Self::num) but zero-padded to a minimum width, as in
    /// `ddmm.mmmm` coordinate fields.
    pub fn num_padded(&mut self, value: f64, width: usize, precision: usize) {
        if value.is_finite() {
            let text = format!("{:0w$.p$}", value, w = width, p = precision);
            self.field(&text);
        } else {
            self.blank();
        }
    }

    /// Append an integer field.
    pub fn int(&mut self, value: i64) {
        self.field(&value.to_string());
    }

    /// Append a zero-padded integer field.
    pub fn int_padded(&mut self, value: i64, width: usize) {
        let text = format!("{:0w$}", value, w = width);
        self.field(&text);
    }

    /// Append a zero-padded lowercase hex field.
    pub fn hex_padded(&mut self, value: u32, width: usize) {
        let text = format!("{:0w$x}", value, w = width);
        self.field(&text);
    }

    /// Append the unit letter belonging to a value field: present exactly
    /// when the value was.
    pub fn unit(&mut self, value: f64, unit: char) {
        if value.is_finite() {
            self.letter(unit);
        } else {
            self.blank();
        }
    }

    /// Append a hemisphere or direction letter chosen from the sign of
    /// `value`, blank when the value is unknown.
    pub fn hemisphere(&mut self, value: f64, positive: char, negative: char) {
        if value.is_finite() {
            self.letter(if value > 0.0 { positive } else { negative });
        } else {
            self.blank();
        }
    }

    /// Seal the sentence with `*XX\r\n` and commit it to the buffer.
    ///
    /// Returns the number of bytes appended, or [`EncodeError::BufferFull`]
    /// with the buffer unchanged.
    pub fn finish(self) -> Result<usize> {
        let mut sentence = self.sentence;
        let body = sentence.as_bytes().get(1..).unwrap_or_default();
        let sum = nmea_checksum(body);
        sentence.push_str(&format!("*{:02X}\r\n", sum));
        if let Some(limit) = self.out.limit {
            let needed = self.out.text.len() + sentence.len();
            if needed > limit {
                return Err(EncodeError::BufferFull { limit, needed });
            }
        }
        trace!("Emitted: {}", sentence.trim_end());
        self.out.text.push_str(&sentence);
        Ok(sentence.len())
    }
}
