//! Glyph processing for zero-width steganography.
//!
//! This module provides:
//! - The three-glyph alphabet (one, zero, separator)
//! - Byte to codeword conversion and back

pub mod alphabet;
pub mod codeword;

pub use alphabet::{Alphabet, AlphabetError};
pub use codeword::{decode_byte, encode_byte, CodewordError};
