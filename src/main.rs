//! zwhide - Hide bytes in plain sight
//!
//! A CLI tool that hides files in text using zero-width unicode characters.
//! This is NOT encryption: anyone looking at the raw bytes can spot and
//! decode the hidden data.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use env_logger::Builder;
use log::LevelFilter;

mod commands;

use commands::{CommandExecutor, DecodeCommand, EncodeCommand};

/// Encode or decode files with hidden whitespace data
#[derive(Parser, Debug)]
#[command(name = "zwhide")]
#[command(version, about, long_about = None)]
struct Cli {
    /// The mode to operate in. 'encode' takes data and hides it while 'decode' reveals it
    #[arg(value_enum)]
    mode: Mode,

    /// The file to take the input data from
    input_file: PathBuf,

    /// The file to write the result to
    output_file: PathBuf,

    /// The plain-text file to hide the data in. Only valid if encoding
    #[arg(long)]
    plain: Option<PathBuf>,

    /// Verbose output (debug logging)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Encode,
    Decode,
}

impl Cli {
    /// Validates the argument combination and builds the command to run.
    ///
    /// Runs before any file is touched.
    fn into_command(self) -> Result<Box<dyn CommandExecutor>, clap::Error> {
        match self.mode {
            Mode::Encode => Ok(Box::new(EncodeCommand {
                input: self.input_file,
                output: self.output_file,
                plain: self.plain,
            })),
            Mode::Decode if self.plain.is_some() => Err(Cli::command().error(
                ErrorKind::ArgumentConflict,
                "Must only specify plaintext in encode mode",
            )),
            Mode::Decode => Ok(Box::new(DecodeCommand {
                input: self.input_file,
                output: self.output_file,
            })),
        }
    }
}

/// Initialize the logging system with timestamp, level, and message formatting.
///
/// Warnings and errors only by default, `--verbose` enables debug output.
/// `RUST_LOG` overrides both.
fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let command = cli.into_command().unwrap_or_else(|e| e.exit());
    command.execute()
}
