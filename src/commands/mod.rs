//! Command dispatch and handlers.

pub mod compare;
pub mod generate;
pub mod inspect;
pub mod sort;

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::cassette::config::CassetteConfig;
use crate::cassette::session::RecordingSession;
use crate::cli::Command;
use crate::context::ServiceContext;

/// Environment variable naming a directory to record clock and entropy reads into.
pub const RECORD_ENV: &str = "EPOCHID_RECORD";

/// Dispatch a parsed command to its handler.
///
/// `generate --replay` serves clock and entropy from a cassette. Otherwise,
/// when `EPOCHID_RECORD` is set to a directory path, `generate` records its
/// port reads to per-port cassette files in that directory. Commands that
/// never read a port run live and leave an existing recording untouched.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let (ctx, session) = if let Command::Generate { replay: Some(path), .. } = command {
        (replaying_context(path)?, None)
    } else if let (Command::Generate { .. }, Ok(path)) = (command, env::var(RECORD_ENV)) {
        let (ctx, session) = ServiceContext::recording_at(PathBuf::from(path))?;
        (ctx, Some(session))
    } else {
        (ServiceContext::live(), None)
    };

    let result = dispatch_with_context(command, &ctx);

    // Finish recording after command completes (even on error)
    if let Some(session) = session {
        // Drop context first to release Arc references
        drop(ctx);
        finish_recording(session)?;
    }

    result
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    let mut out = io::stdout().lock();
    match command {
        Command::Generate { count, format, .. } => generate::run(ctx, *count, *format, &mut out),
        Command::Compare { a, b } => compare::run(a, b, &mut out),
        Command::Inspect { id } => inspect::run(id, &mut out),
        Command::Sort { reverse } => sort::run(io::stdin().lock(), *reverse, &mut out),
    }
}

/// A directory is read as a recording session's per-port files, a file as
/// one monolithic cassette. Ports missing from the directory run live, but
/// at least one cassette must be present.
fn replaying_context(path: &Path) -> Result<ServiceContext, String> {
    if path.is_dir() {
        let config = CassetteConfig::from_dir(path);
        if config.clock.is_none() && config.entropy.is_none() {
            return Err(format!("No cassette files found in {}", path.display()));
        }
        ServiceContext::replaying_from(&config)
    } else {
        ServiceContext::replaying(path)
    }
}

/// Finish a recording session and log the output directory.
fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let output_dir = session.finish()?;
    info!(dir = %output_dir.display(), "recording saved");
    Ok(())
}
