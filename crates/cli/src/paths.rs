//! Path resolution helpers for the CLI.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Returns the user's home directory, honoring `HOME` on Unix first.
pub fn home_dir() -> Result<PathBuf> {
    #[cfg(unix)]
    if let Ok(home) = std::env::var("HOME") {
        return Ok(PathBuf::from(home));
    }
    dirs::home_dir().context("home directory not found")
}

/// Returns the repository root the orchestrator operates on: the
/// `SKILLBRIDGE_REPO_ROOT` override, or the current working directory.
pub fn repo_root() -> Result<PathBuf> {
    if let Ok(custom) = std::env::var("SKILLBRIDGE_REPO_ROOT") {
        return Ok(PathBuf::from(custom));
    }
    std::env::current_dir().context("cannot determine current directory")
}
