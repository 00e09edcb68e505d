//! `epochid generate` command.

use std::io::Write;

use crate::cli::OutputFormat;
use crate::context::ServiceContext;

/// Generate `count` identifiers and write them to `out` in `format`.
///
/// Stops at the first generation failure; identifiers already written stay
/// written.
///
/// # Errors
///
/// Returns an error string if generation or writing fails.
pub fn run(
    ctx: &ServiceContext,
    count: usize,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<(), String> {
    for _ in 0..count {
        let id = ctx.id_gen.generate().map_err(|e| e.to_string())?;
        match format {
            OutputFormat::Text => writeln!(out, "{id}"),
            OutputFormat::Hex => writeln!(out, "{:032x}", id.as_u128()),
            OutputFormat::Binary => out.write_all(id.as_bytes()),
        }
        .map_err(|e| format!("Failed to write identifier: {e}"))?;
    }
    out.flush().map_err(|e| format!("Failed to flush output: {e}"))
}
