//! `gear bootstrap` — vendor dependencies, then report the project facts.

use anyhow::{Context, Result};
use std::path::Path;

use gear::render::{self, OutputFormat};
use gear::vendor::{self, VendorInfo};

pub fn run(dir: &Path, no_vendor: bool, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let dir = super::resolve_dir(dir)?;

    let vendor_info = if no_vendor {
        VendorInfo::skipped()
    } else {
        let status = vendor::vendor(&dir).context("vendor")?;
        VendorInfo {
            enabled: true,
            status,
        }
    };

    // Inspect after vendoring so has_vendor reflects the fresh state.
    let facts = gear::inspect::inspect(&dir).context("inspect")?;

    render::with_output_writer(output, |w| {
        render::write_bootstrap(w, format, &facts, &vendor_info)
    })
}
