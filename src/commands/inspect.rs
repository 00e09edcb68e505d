//! `epochid inspect` command.

use std::io::{self, Write};

use chrono::SecondsFormat;

use crate::id::identifier::{VARIANT, VERSION};
use crate::id::Identifier;

/// Write the fields embedded in `text` to `out`.
///
/// Identifiers from other schemes are still decoded; the version and
/// variant lines say when they differ from the expected markers.
///
/// # Errors
///
/// Returns an error string if the identifier is malformed or writing fails.
pub fn run(text: &str, out: &mut impl Write) -> Result<(), String> {
    let id = Identifier::parse_str(text).map_err(|e| e.to_string())?;
    write_fields(&id, out).map_err(|e| format!("Failed to write fields: {e}"))
}

fn write_fields(id: &Identifier, out: &mut impl Write) -> io::Result<()> {
    let version_note = if id.version() == VERSION { "" } else { " (not time-ordered)" };
    let variant_note = if id.variant_bits() == VARIANT { "" } else { " (unexpected)" };
    let created_at = id.created_at().to_rfc3339_opts(SecondsFormat::Millis, true);

    writeln!(out, "id:           {id}")?;
    writeln!(out, "timestamp_ms: {}", id.timestamp_ms())?;
    writeln!(out, "created_at:   {created_at}")?;
    writeln!(out, "version:      {}{version_note}", id.version())?;
    writeln!(out, "variant:      {:#04b}{variant_note}", id.variant_bits())
}

#[cfg(test)]
mod tests {
    use super::run;

    fn inspect(text: &str) -> String {
        let mut out = Vec::new();
        run(text, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn shows_timestamp_and_markers() {
        let out = inspect("018bcfe5-6800-7abc-8def-0123456789ab");
        assert!(out.contains("timestamp_ms: 1700000000000"));
        assert!(out.contains("created_at:   2023-11-14T22:13:20.000Z"));
        assert!(out.contains("version:      7\n"));
        assert!(out.contains("variant:      0b10\n"));
    }

    #[test]
    fn flags_other_schemes() {
        let out = inspect("018bcfe5-6800-4abc-cdef-0123456789ab");
        assert!(out.contains("version:      4 (not time-ordered)"));
        assert!(out.contains("(unexpected)"));
    }

    #[test]
    fn rejects_malformed() {
        let mut out = Vec::new();
        assert!(run("018bcfe5", &mut out).is_err());
    }
}
