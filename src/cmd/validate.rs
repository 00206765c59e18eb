//! `gear validate` — run a validation stage and print the report.

use anyhow::{bail, Result};
use std::path::Path;

use gear::render::{self, OutputFormat};

pub fn run(stage: &str, dir: &Path, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let dir = super::resolve_dir(dir)?;

    let report = match stage {
        "pre" => gear::validate::pre(&dir),
        other => bail!("stage {:?} not supported", other),
    };

    render::with_output_writer(output, |w| render::write_report(w, format, &report))
}
