//! # zwhide - Hide bytes in plain sight
//!
//! zwhide hides an arbitrary byte payload inside a text file using invisible
//! zero-width unicode characters.
//!
//! ## Overview
//!
//! - Every payload byte becomes an 8-glyph **codeword**, most significant bit first
//! - Bit 1 is `U+200B` (zero width space), bit 0 is `U+200C` (zero width non-joiner)
//! - Codewords are joined by `U+200D` (zero width joiner)
//! - A fixed **sentinel** (`0xAA 0x55`) marks the start of the hidden region
//! - The hidden region is appended after an optional **carrier** text and one newline
//!
//! This is NOT encryption. Anyone who looks at the bytes of the file can see
//! that something is there, and the scheme is trivial to reverse.
//!
//! ## Example Usage
//!
//! ```rust
//! use zwhide::{decode, encode};
//!
//! let carrier = "Nothing to see here.";
//! let stream = encode(b"meet at noon", Some(carrier));
//!
//! // Looks like the carrier when printed
//! assert!(stream.starts_with("Nothing to see here.\n"));
//!
//! let payload = decode(&stream).unwrap();
//! assert_eq!(payload, b"meet at noon");
//! ```
//!
//! ## Modules
//!
//! - [`glyph`]: Glyph alphabet and the byte <-> codeword codec
//! - [`encoder`]: Builds the hidden stream (carrier, sentinel, codewords)
//! - [`decoder`]: Locates the sentinel and recovers the payload

/// Sentinel bytes marking the start of the hidden region.
pub const SENTINEL: [u8; 2] = [0xAA, 0x55];

/// Number of glyphs in one codeword (one per bit).
pub const CODEWORD_LEN: usize = 8;

pub mod decoder;
pub mod encoder;
pub mod glyph;

// Re-export commonly used types at the crate root
pub use decoder::{
    decode, decode_with_config, encoded_sentinel, locate, locate_with_config, DecoderConfig,
    DecoderError, HiddenRegion,
};
pub use encoder::{encode, encode_to_writer, encode_with_config, encoded_len, EncoderConfig};
pub use glyph::{decode_byte, encode_byte, Alphabet, AlphabetError, CodewordError};
