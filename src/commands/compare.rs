//! `epochid compare` command.

use std::cmp::Ordering;
use std::io::Write;

use crate::id::{compare_encoded, Encoded};

/// Compare two textual identifiers and write `less`, `equal`, or `greater`.
///
/// # Errors
///
/// Returns an error string if either identifier is malformed or writing fails.
pub fn run(a: &str, b: &str, out: &mut impl Write) -> Result<(), String> {
    let ordering =
        compare_encoded(Encoded::Text(a), Encoded::Text(b)).map_err(|e| e.to_string())?;
    let word = match ordering {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    };
    writeln!(out, "{word}").map_err(|e| format!("Failed to write result: {e}"))
}
