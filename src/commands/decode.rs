//! Decode command - reveal data hidden by the encode command.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use zwhide::{decode_with_config, DecoderConfig};

use super::CommandExecutor;

/// Recover the hidden bytes of `input` and write them to `output`.
///
/// The output file is only created once the whole payload has been decoded,
/// so a failed decode leaves nothing behind.
#[derive(Debug)]
pub struct DecodeCommand {
    /// Text file containing hidden data
    pub input: PathBuf,

    /// File the recovered bytes are written to
    pub output: PathBuf,
}

impl CommandExecutor for DecodeCommand {
    fn execute(&self) -> Result<()> {
        let text = fs::read_to_string(&self.input)
            .with_context(|| format!("Failed to read input file {}", self.input.display()))?;

        let payload = decode_with_config(&text, &DecoderConfig::default())
            .with_context(|| format!("Failed to decode {}", self.input.display()))?;

        fs::write(&self.output, &payload)
            .with_context(|| format!("Failed to write output file {}", self.output.display()))?;

        info!(
            "Decoded {} bytes to {}",
            payload.len(),
            self.output.display()
        );

        Ok(())
    }
}
