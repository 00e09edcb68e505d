//! Recording session managing per-port cassette recorders.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing::info;

use super::recorder::CassetteRecorder;

/// Manages per-port `CassetteRecorder` instances for a recording session.
///
/// Each port gets its own recorder writing to a separate cassette file
/// inside the session's output directory.
pub struct RecordingSession {
    /// Recorder for clock interactions.
    pub clock: Arc<Mutex<CassetteRecorder>>,
    /// Recorder for entropy interactions.
    pub entropy: Arc<Mutex<CassetteRecorder>>,
    /// Output directory containing all cassette files.
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Create a new recording session writing into `output_dir`.
    ///
    /// The directory is created if missing. Existing cassette files in it
    /// are overwritten when the session finishes.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn at(output_dir: PathBuf) -> Result<Self, String> {
        std::fs::create_dir_all(&output_dir).map_err(|e| {
            format!("Failed to create cassette directory {}: {e}", output_dir.display())
        })?;

        let make_recorder = |port: &str| -> Arc<Mutex<CassetteRecorder>> {
            let path = output_dir.join(format!("{port}.cassette.yaml"));
            Arc::new(Mutex::new(CassetteRecorder::new(path, port)))
        };

        info!(dir = %output_dir.display(), "recording clock and entropy reads");
        Ok(Self { clock: make_recorder("clock"), entropy: make_recorder("entropy"), output_dir })
    }

    /// Finish all recorders and write cassette files to disk.
    ///
    /// Consumes the session and writes each port's cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if a recorder is still shared or a file cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        fn finish_one(arc: Arc<Mutex<CassetteRecorder>>, port: &str) -> Result<(), String> {
            let recorder = Arc::try_unwrap(arc)
                .map_err(|_| format!("Recording adapter for {port} still has references"))?
                .into_inner()
                .map_err(|e| format!("Recorder lock for {port} poisoned: {e}"))?;
            recorder.finish().map_err(|e| format!("Failed to write {port} cassette: {e}"))?;
            Ok(())
        }

        finish_one(self.clock, "clock")?;
        finish_one(self.entropy, "entropy")?;

        Ok(self.output_dir)
    }
}
