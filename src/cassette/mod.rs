//! Cassette format for recording and replaying clock and entropy reads.

pub mod config;
pub mod format;
pub mod recorder;
pub mod replayer;
pub mod session;
