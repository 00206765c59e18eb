//! `gear inspect` — print a project's derived facts.

use anyhow::{Context, Result};
use std::path::Path;

use gear::render::{self, OutputFormat};

pub fn run(dir: &Path, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let dir = super::resolve_dir(dir)?;

    let facts = gear::inspect::inspect(&dir).context("inspect")?;

    render::with_output_writer(output, |w| render::write_facts(w, format, &facts))
}
