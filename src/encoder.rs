//! Hidden stream encoding.
//!
//! This module builds the encoded stream:
//! 1. Optional carrier text, followed by exactly one newline
//! 2. Codewords of the sentinel bytes (`0xAA`, `0x55`)
//! 3. Codewords of every payload byte, in order
//!
//! All codewords are joined by the separator glyph. There is no trailing
//! separator or terminator.

use std::io::{self, Write};

use log::debug;

use crate::glyph::Alphabet;
use crate::{CODEWORD_LEN, SENTINEL};

/// Configuration for the encoder.
#[derive(Debug, Clone, Default)]
pub struct EncoderConfig {
    /// Glyphs used to write the hidden region.
    pub alphabet: Alphabet,
}

/// Sentinel bytes followed by the payload, in stream order.
fn stream_bytes(payload: &[u8]) -> impl Iterator<Item = u8> + '_ {
    SENTINEL.iter().chain(payload).copied()
}

/// Returns the exact size in bytes of the UTF-8 stream `encode` produces.
///
/// Each payload byte costs 8 glyphs plus one separator, so the hidden region
/// is roughly 27 bytes per payload byte with the default alphabet.
pub fn encoded_len(payload: &[u8], carrier: Option<&str>, alphabet: &Alphabet) -> usize {
    let one = alphabet.one().len_utf8();
    let zero = alphabet.zero().len_utf8();
    let sep = alphabet.sep().len_utf8();

    let glyphs: usize = stream_bytes(payload)
        .map(|byte| {
            let ones = byte.count_ones() as usize;
            ones * one + (CODEWORD_LEN - ones) * zero
        })
        .sum();
    let separators = (SENTINEL.len() + payload.len() - 1) * sep;
    let prefix = carrier.map_or(0, |text| text.len() + 1);

    prefix + glyphs + separators
}

/// Encodes a payload with the default alphabet.
///
/// # Arguments
/// * `payload` - The bytes to hide
/// * `carrier` - Optional visible text placed before the hidden region
///
/// # Returns
/// The full encoded stream.
pub fn encode(payload: &[u8], carrier: Option<&str>) -> String {
    encode_with_config(payload, carrier, &EncoderConfig::default())
}

/// Encodes a payload with a custom configuration.
pub fn encode_with_config(payload: &[u8], carrier: Option<&str>, config: &EncoderConfig) -> String {
    let alphabet = &config.alphabet;
    let mut stream = String::with_capacity(encoded_len(payload, carrier, alphabet));

    if let Some(text) = carrier {
        stream.push_str(text);
        stream.push('\n');
    }

    for (i, byte) in stream_bytes(payload).enumerate() {
        if i > 0 {
            stream.push(alphabet.sep());
        }
        alphabet.push_codeword(byte, &mut stream);
    }

    debug!(
        "Encoded {} payload bytes into {} stream bytes (carrier: {})",
        payload.len(),
        stream.len(),
        carrier.is_some()
    );

    stream
}

/// Writes the encoded stream to `writer` one codeword at a time.
///
/// Returns the number of bytes written. If an error is returned, part of the
/// stream may already have been written.
pub fn encode_to_writer<W: Write>(
    payload: &[u8],
    carrier: Option<&str>,
    config: &EncoderConfig,
    mut writer: W,
) -> io::Result<usize> {
    let alphabet = &config.alphabet;
    let mut written = 0usize;

    if let Some(text) = carrier {
        writer.write_all(text.as_bytes())?;
        writer.write_all(b"\n")?;
        written += text.len() + 1;
    }

    let mut sep_buf = [0u8; 4];
    let sep: &str = alphabet.sep().encode_utf8(&mut sep_buf);
    let mut codeword = String::with_capacity(CODEWORD_LEN * 4);

    for (i, byte) in stream_bytes(payload).enumerate() {
        if i > 0 {
            writer.write_all(sep.as_bytes())?;
            written += sep.len();
        }

        codeword.clear();
        alphabet.push_codeword(byte, &mut codeword);
        writer.write_all(codeword.as_bytes())?;
        written += codeword.len();
    }

    writer.flush()?;
    Ok(written)
}
