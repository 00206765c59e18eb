//! Command handlers for the gear CLI.

pub mod bootstrap;
pub mod inspect;
pub mod validate;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Resolve the user-supplied project directory to an absolute path.
///
/// Resolution is lexical and does not require the directory to exist: the
/// validation engine must still get to report on a missing project rather
/// than being cut off at the CLI.
pub fn resolve_dir(dir: &Path) -> Result<PathBuf> {
    std::path::absolute(dir)
        .with_context(|| format!("resolve project directory {}", dir.display()))
}
