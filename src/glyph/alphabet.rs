//! Glyph alphabet shared by the encoder and the decoder.
//!
//! The alphabet is the only place the glyph code points are defined. Data
//! encoded with one alphabet cannot be decoded with another: the decoder will
//! not find the sentinel and reports it as missing.

use thiserror::Error;

/// Zero width space, binary one.
pub const ZWSP: char = '\u{200B}';

/// Zero width non-joiner, binary zero.
pub const ZWNJ: char = '\u{200C}';

/// Zero width joiner, codeword separator.
pub const ZWJ: char = '\u{200D}';

/// Alphabet errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    #[error("Glyph {0:?} is used for more than one symbol")]
    DuplicateGlyph(char),
}

/// The three glyphs used to write hidden data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet {
    one: char,
    zero: char,
    sep: char,
}

impl Alphabet {
    /// The default alphabet (format version 1): ZWSP, ZWNJ and ZWJ.
    pub const ZERO_WIDTH: Alphabet = Alphabet {
        one: ZWSP,
        zero: ZWNJ,
        sep: ZWJ,
    };

    /// Creates a custom alphabet.
    ///
    /// The three glyphs must be distinct, otherwise codewords and separators
    /// could not be told apart.
    pub fn new(one: char, zero: char, sep: char) -> Result<Self, AlphabetError> {
        if one == zero || one == sep {
            return Err(AlphabetError::DuplicateGlyph(one));
        }
        if zero == sep {
            return Err(AlphabetError::DuplicateGlyph(zero));
        }

        Ok(Self { one, zero, sep })
    }

    /// Glyph for a binary one.
    pub fn one(&self) -> char {
        self.one
    }

    /// Glyph for a binary zero.
    pub fn zero(&self) -> char {
        self.zero
    }

    /// Glyph separating codewords.
    pub fn sep(&self) -> char {
        self.sep
    }

    /// Returns the glyph for a single bit.
    pub fn bit_glyph(&self, bit: bool) -> char {
        if bit {
            self.one
        } else {
            self.zero
        }
    }

    /// Returns the bit a glyph stands for, or `None` for any other character.
    pub fn glyph_bit(&self, glyph: char) -> Option<bool> {
        if glyph == self.one {
            Some(true)
        } else if glyph == self.zero {
            Some(false)
        } else {
            None
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::ZERO_WIDTH
    }
}
