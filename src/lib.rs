//! Time-ordered 128-bit identifiers and the `epochid` CLI.
//!
//! [`generate`] produces identifiers whose high 48 bits are a millisecond
//! timestamp; [`compare`] orders them as unsigned big-endian integers so
//! later identifiers always sort after earlier ones.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod context;
pub mod error;
pub mod id;
pub mod ports;
pub mod store;

pub use error::IdError;
pub use id::{compare, generate, Identifier};

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// `--help` and `--version` print to stdout and succeed.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli.command)
}
