//! Vendoring via the external Go toolchain.
//!
//! `go mod vendor` does the actual work; gear only records whether the
//! vendor directory existed beforehand so the caller can report "created"
//! versus "updated".

use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;
use std::process::Command;

use crate::paths::VENDOR_DIR;
use crate::probe;

/// How a bootstrap run left the vendor directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorStatus {
    /// `--no-vendor` was passed; nothing was run.
    Skipped,
    /// `vendor/` did not exist before and does now.
    Created,
    /// `vendor/` existed before and was refreshed.
    Updated,
}

impl std::fmt::Display for VendorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VendorStatus::Skipped => write!(f, "skipped"),
            VendorStatus::Created => write!(f, "created"),
            VendorStatus::Updated => write!(f, "updated"),
        }
    }
}

/// Vendoring outcome as reported in bootstrap output.
#[derive(Debug, Clone, Serialize)]
pub struct VendorInfo {
    pub enabled: bool,
    pub status: VendorStatus,
}

impl VendorInfo {
    pub fn skipped() -> Self {
        VendorInfo {
            enabled: false,
            status: VendorStatus::Skipped,
        }
    }
}

/// Run `go mod vendor` in `dir` and report the resulting [`VendorStatus`].
///
/// The child's output goes to our stderr so the JSON/text report on stdout
/// stays clean. Succeeding without a `vendor/` directory afterwards is an
/// error: the tool ran but produced nothing usable.
pub fn vendor(dir: &Path) -> Result<VendorStatus> {
    let had_vendor_before = probe::has_dir(dir, VENDOR_DIR).context("vendor check")?;

    let output = Command::new("go")
        .args(["mod", "vendor"])
        .current_dir(dir)
        .output()
        .context("run go mod vendor")?;

    // The report owns stdout; everything the toolchain printed, on either
    // stream, is forwarded to stderr.
    let mut stderr = io::stderr();
    stderr
        .write_all(&output.stdout)
        .context("forward go mod vendor output")?;
    stderr
        .write_all(&output.stderr)
        .context("forward go mod vendor output")?;

    if !output.status.success() {
        bail!("go mod vendor exited with {}", output.status);
    }

    if !probe::has_dir(dir, VENDOR_DIR)? {
        bail!("vendor directory not found in {} after vendoring", dir.display());
    }

    if had_vendor_before {
        Ok(VendorStatus::Updated)
    } else {
        Ok(VendorStatus::Created)
    }
}
