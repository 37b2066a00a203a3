//! Byte <-> codeword conversion.
//!
//! A codeword is exactly 8 glyphs, most significant bit first.

use thiserror::Error;

use super::alphabet::Alphabet;
use crate::CODEWORD_LEN;

/// Errors that can occur while decoding a codeword.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodewordError {
    #[error("Unexpected character {glyph:?} at position {position} of codeword")]
    InvalidGlyph { glyph: char, position: usize },

    #[error("Codeword has {0} glyphs, expected 8")]
    InvalidLength(usize),
}

impl Alphabet {
    /// Appends the codeword for `byte` to `out`.
    pub fn push_codeword(&self, byte: u8, out: &mut String) {
        for shift in (0..CODEWORD_LEN).rev() {
            out.push(self.bit_glyph((byte >> shift) & 1 == 1));
        }
    }

    /// Encodes a byte into its 8-glyph codeword.
    pub fn encode_byte(&self, byte: u8) -> String {
        let mut codeword = String::with_capacity(CODEWORD_LEN * self.one().len_utf8());
        self.push_codeword(byte, &mut codeword);
        codeword
    }

    /// Decodes an 8-glyph codeword back into a byte.
    pub fn decode_byte(&self, codeword: &str) -> Result<u8, CodewordError> {
        let mut value = 0u8;
        let mut len = 0usize;

        for (position, glyph) in codeword.chars().enumerate() {
            let bit = self
                .glyph_bit(glyph)
                .ok_or(CodewordError::InvalidGlyph { glyph, position })?;
            value = (value << 1) | u8::from(bit);
            len += 1;
        }

        if len != CODEWORD_LEN {
            return Err(CodewordError::InvalidLength(len));
        }

        Ok(value)
    }
}

/// Encodes a byte with the default alphabet.
pub fn encode_byte(byte: u8) -> String {
    Alphabet::ZERO_WIDTH.encode_byte(byte)
}

/// Decodes a codeword written with the default alphabet.
pub fn decode_byte(codeword: &str) -> Result<u8, CodewordError> {
    Alphabet::ZERO_WIDTH.decode_byte(codeword)
}
