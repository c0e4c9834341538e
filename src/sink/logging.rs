//! Logging bootstrap for the relay binary.

use std::str::FromStr;
use tracing::Level;

/// Installs a plain `fmt` subscriber capped at `default_level`.
///
/// Unrecognized level names fall back to `info`. Safe to call more than
/// once; later calls keep the subscriber that is already installed.
pub fn init(default_level: &str) {
    let level = Level::from_str(default_level).unwrap_or(Level::INFO);

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
}
