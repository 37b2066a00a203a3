//! Encode command - hide a file in zero-width characters.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{debug, info};

use zwhide::{encode_to_writer, encoded_len, EncoderConfig};

use super::CommandExecutor;

/// Hide the bytes of `input` in `output`, optionally after a plain-text carrier.
#[derive(Debug)]
pub struct EncodeCommand {
    /// File whose bytes are hidden
    pub input: PathBuf,

    /// File the encoded text is written to
    pub output: PathBuf,

    /// Plain-text file placed in front of the hidden data
    pub plain: Option<PathBuf>,
}

impl CommandExecutor for EncodeCommand {
    fn execute(&self) -> Result<()> {
        let payload = fs::read(&self.input)
            .with_context(|| format!("Failed to read input file {}", self.input.display()))?;

        let carrier = self
            .plain
            .as_ref()
            .map(|path| {
                fs::read_to_string(path)
                    .with_context(|| format!("Failed to read plain-text file {}", path.display()))
            })
            .transpose()?;

        let config = EncoderConfig::default();
        debug!(
            "Expecting {} bytes of output",
            encoded_len(&payload, carrier.as_deref(), &config.alphabet)
        );

        let file = File::create(&self.output)
            .with_context(|| format!("Failed to create output file {}", self.output.display()))?;
        let written = encode_to_writer(&payload, carrier.as_deref(), &config, BufWriter::new(file))
            .with_context(|| format!("Failed to write output file {}", self.output.display()))?;

        info!(
            "Hid {} bytes in {} ({} bytes written)",
            payload.len(),
            self.output.display(),
            written
        );

        Ok(())
    }
}
