//! Hidden stream decoding.
//!
//! This module recovers the payload from a text:
//! 1. Find the first occurrence of the encoded sentinel
//! 2. Skip the separator right after it
//! 3. Split the rest on the separator glyph
//! 4. Decode every group as one payload byte
//!
//! The first sentinel found is authoritative. A carrier that happens to
//! contain the encoded sentinel will move the boundary and break decoding.

use log::debug;
use thiserror::Error;

use crate::glyph::{Alphabet, CodewordError};
use crate::SENTINEL;

/// Errors that can occur during decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecoderError {
    #[error("No sentinel sequence found, input holds no hidden data")]
    MissingSentinel,

    #[error("Malformed codeword for payload byte {index}: {source}")]
    MalformedCodeword {
        index: usize,
        #[source]
        source: CodewordError,
    },
}

/// Configuration for the decoder.
#[derive(Debug, Clone, Default)]
pub struct DecoderConfig {
    /// Glyphs the hidden region was written with.
    pub alphabet: Alphabet,
}

/// Location of the hidden region inside a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HiddenRegion {
    /// Byte offset where the encoded sentinel starts.
    pub sentinel_start: usize,
    /// Byte offset right after the encoded sentinel.
    pub sentinel_end: usize,
}

impl HiddenRegion {
    /// Returns the visible text in front of the hidden region.
    ///
    /// The newline the encoder places after the carrier is not part of it.
    pub fn carrier<'a>(&self, text: &'a str) -> &'a str {
        let before = &text[..self.sentinel_start];
        before.strip_suffix('\n').unwrap_or(before)
    }
}

/// Returns the sentinel codewords joined by the separator.
pub fn encoded_sentinel(alphabet: &Alphabet) -> String {
    let mut encoded = String::new();
    for (i, byte) in SENTINEL.iter().enumerate() {
        if i > 0 {
            encoded.push(alphabet.sep());
        }
        alphabet.push_codeword(*byte, &mut encoded);
    }
    encoded
}

/// Finds the hidden region written with the default alphabet.
pub fn locate(text: &str) -> Option<HiddenRegion> {
    locate_with_config(text, &DecoderConfig::default())
}

/// Finds the first occurrence of the encoded sentinel in `text`.
pub fn locate_with_config(text: &str, config: &DecoderConfig) -> Option<HiddenRegion> {
    let sentinel = encoded_sentinel(&config.alphabet);

    text.find(&sentinel).map(|start| HiddenRegion {
        sentinel_start: start,
        sentinel_end: start + sentinel.len(),
    })
}

/// Decodes a payload written with the default alphabet.
///
/// # Errors
///
/// Returns [`DecoderError::MissingSentinel`] if the text holds no hidden
/// region, and [`DecoderError::MalformedCodeword`] if any group after the
/// sentinel is not a valid codeword.
pub fn decode(text: &str) -> Result<Vec<u8>, DecoderError> {
    decode_with_config(text, &DecoderConfig::default())
}

/// Decodes a payload with a custom configuration.
pub fn decode_with_config(text: &str, config: &DecoderConfig) -> Result<Vec<u8>, DecoderError> {
    let alphabet = &config.alphabet;
    let region = locate_with_config(text, config).ok_or(DecoderError::MissingSentinel)?;

    let rest = &text[region.sentinel_end..];
    let tail = rest.strip_prefix(alphabet.sep()).unwrap_or(rest);

    debug!(
        "Sentinel found at byte {}, {} bytes of hidden data follow",
        region.sentinel_start,
        tail.len()
    );

    if tail.is_empty() {
        return Ok(Vec::new());
    }

    tail.split(alphabet.sep())
        .enumerate()
        .map(|(index, group)| {
            alphabet
                .decode_byte(group)
                .map_err(|source| DecoderError::MalformedCodeword { index, source })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::{encode, encode_with_config, EncoderConfig};
    use crate::glyph::encode_byte;

    const SEP: char = '\u{200D}';

    #[test]
    fn test_decode_hi() {
        let text = format!(
            "{}{SEP}{}{SEP}{}{SEP}{}",
            encode_byte(0xAA),
            encode_byte(0x55),
            encode_byte(0x48),
            encode_byte(0x69)
        );

        assert_eq!(decode(&text).unwrap(), vec![0x48, 0x69]);
    }

    #[test]
    fn test_missing_sentinel() {
        assert_eq!(decode(""), Err(DecoderError::MissingSentinel));
        assert_eq!(
            decode("just an ordinary text file\n"),
            Err(DecoderError::MissingSentinel)
        );
    }

    #[test]
    fn test_sentinel_order_matters() {
        let reversed = format!("{}{SEP}{}", encode_byte(0x55), encode_byte(0xAA));

        assert_eq!(decode(&reversed), Err(DecoderError::MissingSentinel));
    }

    #[test]
    fn test_sentinel_at_end_is_empty_payload() {
        assert_eq!(decode(&encode(&[], None)).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_sentinel_with_trailing_separator_is_empty_payload() {
        let text = format!("{}{SEP}", encode(&[], None));

        assert_eq!(decode(&text).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_text_before_sentinel_is_ignored() {
        let text = format!("header without newline{}", encode(b"ok", None));

        assert_eq!(decode(&text).unwrap(), b"ok");
    }

    #[test]
    fn test_malformed_codeword_reports_index() {
        let mut text = encode(b"abc", None);
        // Drop the last glyph of the final codeword
        text.pop();

        assert_eq!(
            decode(&text),
            Err(DecoderError::MalformedCodeword {
                index: 2,
                source: CodewordError::InvalidLength(7),
            })
        );
    }

    #[test]
    fn test_trailing_text_is_malformed() {
        let text = format!("{}\n", encode(b"a", None));

        assert!(matches!(
            decode(&text),
            Err(DecoderError::MalformedCodeword {
                index: 0,
                source: CodewordError::InvalidGlyph { glyph: '\n', .. }
            })
        ));
    }

    #[test]
    fn test_first_sentinel_wins() {
        // A carrier that already holds a hidden region shadows the second one
        let inner = encode(b"first", None);
        let outer = encode(b"second", Some(&inner));

        assert!(matches!(
            decode(&outer),
            Err(DecoderError::MalformedCodeword { .. })
        ));
    }

    #[test]
    fn test_locate_returns_carrier() {
        let text = encode(b"payload", Some("Visible text"));
        let region = locate(&text).unwrap();

        assert_eq!(region.sentinel_start, "Visible text\n".len());
        assert_eq!(region.carrier(&text), "Visible text");
        assert_eq!(
            region.sentinel_end - region.sentinel_start,
            encoded_sentinel(&Alphabet::ZERO_WIDTH).len()
        );
    }

    #[test]
    fn test_locate_without_sentinel() {
        assert_eq!(locate("nothing here"), None);
    }

    #[test]
    fn test_alphabet_mismatch_is_missing_sentinel() {
        let config = EncoderConfig {
            alphabet: Alphabet::new('a', 'b', 'c').unwrap(),
        };
        let text = encode_with_config(b"secret", None, &config);

        assert_eq!(decode(&text), Err(DecoderError::MissingSentinel));

        let decoder = DecoderConfig {
            alphabet: config.alphabet,
        };
        assert_eq!(decode_with_config(&text, &decoder).unwrap(), b"secret");
    }
}
