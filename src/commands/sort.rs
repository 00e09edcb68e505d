//! `epochid sort` command.

use std::io::{BufRead, Write};

use crate::id::{sort_identifiers, Identifier};

/// Read identifiers one per line from `input` and write them in order.
///
/// Blank lines are skipped and surrounding whitespace is trimmed. Nothing
/// is written if any line is malformed.
///
/// # Errors
///
/// Returns an error string naming the first malformed line, or on I/O failure.
pub fn run(input: impl BufRead, reverse: bool, out: &mut impl Write) -> Result<(), String> {
    let mut ids = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let line = line.map_err(|e| format!("Failed to read input: {e}"))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let id = Identifier::parse_str(trimmed).map_err(|e| format!("line {}: {e}", index + 1))?;
        ids.push(id);
    }

    sort_identifiers(&mut ids);
    if reverse {
        ids.reverse();
    }

    for id in &ids {
        writeln!(out, "{id}").map_err(|e| format!("Failed to write identifier: {e}"))?;
    }
    Ok(())
}
