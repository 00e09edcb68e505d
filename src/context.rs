//! Service context wiring the clock and entropy ports into a generator.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::adapters::live::clock::LiveClock;
use crate::adapters::live::entropy::OsEntropy;
use crate::adapters::live::id_gen::LiveIdGenerator;
use crate::adapters::recording::{RecordingClock, RecordingEntropy};
use crate::adapters::replaying::{ReplayingClock, ReplayingEntropy};
use crate::cassette::config::CassetteConfig;
use crate::cassette::session::RecordingSession;
use crate::id::TimeOrderedGenerator;
use crate::ports::clock::Clock;
use crate::ports::entropy::EntropySource;
use crate::ports::id_gen::IdGenerator;

/// Bundles the identifier generator used by commands and stores.
///
/// Constructors wire different adapter implementations (live, recording,
/// replaying) behind the same `IdGenerator` port.
pub struct ServiceContext {
    /// ID generator for new record keys.
    pub id_gen: Box<dyn IdGenerator>,
}

impl ServiceContext {
    /// Creates a live context over the system clock and OS entropy.
    #[must_use]
    pub fn live() -> Self {
        Self { id_gen: Box::new(LiveIdGenerator::new()) }
    }

    /// Creates a recording context writing per-port cassettes into `dir`.
    ///
    /// Drop the context before calling [`RecordingSession::finish`] so the
    /// recorders are no longer shared.
    ///
    /// # Errors
    ///
    /// Returns an error if the recording directory cannot be created.
    pub fn recording_at(dir: PathBuf) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::at(dir)?;
        let clock = RecordingClock::new(Box::new(LiveClock), Arc::clone(&session.clock));
        let entropy = RecordingEntropy::new(Box::new(OsEntropy), Arc::clone(&session.entropy));
        let ctx = Self::from_ports(Box::new(clock), Box::new(entropy));
        Ok((ctx, session))
    }

    /// Creates a replaying context from a monolithic cassette file.
    ///
    /// Clock and entropy each get their own replayer over the same cassette
    /// so their cursors are independent.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let clock = ReplayingClock::new(CassetteConfig::load(path)?);
        let entropy = ReplayingEntropy::new(CassetteConfig::load(path)?);
        Ok(Self::from_ports(Box::new(clock), Box::new(entropy)))
    }

    /// Creates a replaying context from per-port cassette files.
    ///
    /// Ports without a configured cassette use their live adapter, so a
    /// clock-only cassette pins timestamps while payloads stay random.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;

        let clock: Box<dyn Clock> = match replayers.clock {
            Some(r) => Box::new(ReplayingClock::new(r)),
            None => Box::new(LiveClock),
        };
        let entropy: Box<dyn EntropySource> = match replayers.entropy {
            Some(r) => Box::new(ReplayingEntropy::new(r)),
            None => Box::new(OsEntropy),
        };
        Ok(Self::from_ports(clock, entropy))
    }

    /// Creates a context over explicit clock and entropy ports.
    #[must_use]
    pub fn from_ports(clock: Box<dyn Clock>, entropy: Box<dyn EntropySource>) -> Self {
        Self { id_gen: Box::new(TimeOrderedGenerator::new(clock, entropy)) }
    }
}
