//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Top-level CLI parser for `epochid`.
#[derive(Debug, Parser)]
#[command(name = "epochid", version, about = "Generate and order time-sortable identifiers")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate new identifiers.
    Generate {
        /// Number of identifiers to generate.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        /// Output encoding.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Serve clock and entropy reads from a cassette file or recording directory.
        #[arg(long, value_name = "PATH")]
        replay: Option<PathBuf>,
    },
    /// Compare two identifiers by unsigned magnitude.
    Compare {
        /// Left-hand identifier.
        a: String,
        /// Right-hand identifier.
        b: String,
    },
    /// Show the fields embedded in an identifier.
    Inspect {
        /// Identifier in canonical text form.
        id: String,
    },
    /// Sort identifiers read one per line from stdin.
    Sort {
        /// Print newest first.
        #[arg(long)]
        reverse: bool,
    },
}

/// Output encodings for `generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Canonical 8-4-4-4-12 text, one per line.
    Text,
    /// The 16-byte binary form as 32 hex digits, one per line.
    Hex,
    /// Raw 16-byte records with no separator.
    Binary,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command, OutputFormat};
    use clap::Parser;

    #[test]
    fn parses_generate_defaults() {
        let cli = Cli::parse_from(["epochid", "generate"]);
        assert!(matches!(
            cli.command,
            Command::Generate { count: 1, format: OutputFormat::Text, replay: None }
        ));
    }

    #[test]
    fn parses_generate_options() {
        let cli = Cli::parse_from(["epochid", "generate", "-n", "5", "--format", "hex"]);
        assert!(matches!(cli.command, Command::Generate { count: 5, format: OutputFormat::Hex, .. }));
    }

    #[test]
    fn parses_compare_subcommand() {
        let cli = Cli::parse_from(["epochid", "compare", "a", "b"]);
        assert!(matches!(cli.command, Command::Compare { ref a, ref b } if a == "a" && b == "b"));
    }

    #[test]
    fn parses_sort_reverse() {
        let cli = Cli::parse_from(["epochid", "sort", "--reverse"]);
        assert!(matches!(cli.command, Command::Sort { reverse: true }));
    }

    #[test]
    fn compare_requires_two_ids() {
        assert!(Cli::try_parse_from(["epochid", "compare", "a"]).is_err());
    }
}
