//! Cassette configuration for composable per-port replay.

use std::path::{Path, PathBuf};

use super::format::Cassette;
use super::replayer::CassetteReplayer;

/// File name of the clock cassette inside a recording directory.
pub const CLOCK_FILE: &str = "clock.cassette.yaml";
/// File name of the entropy cassette inside a recording directory.
pub const ENTROPY_FILE: &str = "entropy.cassette.yaml";

/// Per-port cassette file paths. Ports without a cassette path fall back
/// to their live adapter during replay.
#[derive(Debug, Clone, Default)]
pub struct CassetteConfig {
    /// Path to the clock port cassette file.
    pub clock: Option<PathBuf>,
    /// Path to the entropy port cassette file.
    pub entropy: Option<PathBuf>,
}

/// Per-port replayers, each with its own interaction stream.
pub struct PortReplayers {
    /// Replayer for the clock port.
    pub clock: Option<CassetteReplayer>,
    /// Replayer for the entropy port.
    pub entropy: Option<CassetteReplayer>,
}

impl CassetteConfig {
    /// Config pointing at the per-port files a recording session writes into `dir`.
    ///
    /// Only files that exist are configured, so a port whose cassette is
    /// absent falls back to its live adapter.
    #[must_use]
    pub fn from_dir(dir: &Path) -> Self {
        let existing = |name: &str| Some(dir.join(name)).filter(|p| p.is_file());
        Self { clock: existing(CLOCK_FILE), entropy: existing(ENTROPY_FILE) }
    }

    /// Load a cassette file and create a replayer over all of its interactions.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<CassetteReplayer, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        let cassette = Cassette::from_yaml(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))?;
        Ok(CassetteReplayer::new(&cassette))
    }

    /// Load all configured per-port cassette files and create replayers.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn load_all(&self) -> Result<PortReplayers, String> {
        Ok(PortReplayers {
            clock: self.clock.as_deref().map(Self::load).transpose()?,
            entropy: self.entropy.as_deref().map(Self::load).transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::Interaction;
    use chrono::Utc;
    use serde_json::json;

    fn write_cassette(path: &Path, interactions: Vec<Interaction>) {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            version: "0.1.0".into(),
            interactions,
        };
        let yaml = serde_yaml::to_string(&cassette).unwrap();
        std::fs::write(path, yaml).unwrap();
    }

    #[test]
    fn default_config_has_no_paths() {
        let config = CassetteConfig::default();
        assert!(config.clock.is_none());
        assert!(config.entropy.is_none());
    }

    #[test]
    fn from_dir_uses_session_file_names() {
        let dir = std::env::temp_dir().join("epochid_config_test_from_dir");
        std::fs::create_dir_all(&dir).unwrap();
        write_cassette(&dir.join(CLOCK_FILE), vec![]);
        write_cassette(&dir.join(ENTROPY_FILE), vec![]);

        let config = CassetteConfig::from_dir(&dir);
        assert_eq!(config.clock.unwrap(), dir.join("clock.cassette.yaml"));
        assert_eq!(config.entropy.unwrap(), dir.join("entropy.cassette.yaml"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn from_dir_skips_missing_cassettes() {
        let dir = std::env::temp_dir().join("epochid_config_test_partial_dir");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        write_cassette(&dir.join(CLOCK_FILE), vec![]);

        let config = CassetteConfig::from_dir(&dir);
        assert_eq!(config.clock.unwrap(), dir.join(CLOCK_FILE));
        assert!(config.entropy.is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_per_port_cassettes() {
        let dir = std::env::temp_dir().join("epochid_config_test_ports");
        std::fs::create_dir_all(&dir).unwrap();

        let clock_path = dir.join("clock.cassette.yaml");
        write_cassette(
            &clock_path,
            vec![Interaction {
                seq: 0,
                port: "clock".into(),
                method: "now".into(),
                input: json!(null),
                output: json!({"Ok": "2024-01-01T00:00:00Z"}),
            }],
        );

        let config = CassetteConfig { clock: Some(clock_path), ..CassetteConfig::default() };
        let mut replayers = config.load_all().unwrap();

        let clock = replayers.clock.as_mut().unwrap();
        let i1 = clock.next_interaction("clock", "now").unwrap();
        assert_eq!(i1.output, json!({"Ok": "2024-01-01T00:00:00Z"}));
        assert!(replayers.entropy.is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = CassetteConfig::load(Path::new("/nonexistent/clock.cassette.yaml"))
            .err()
            .unwrap();
        assert!(err.contains("Failed to read cassette file"));
    }
}
