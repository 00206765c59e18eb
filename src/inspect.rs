//! Fail-fast aggregation of project facts.
//!
//! [`inspect`] produces a complete [`Facts`] snapshot or nothing: any stage
//! failure (unreadable manifest, malformed directive, underivable name, probe
//! error) aborts the whole aggregation with a context chain naming the stage.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::paths::{GEAR_DIR, GEAR_RULES, GO_MOD, VENDOR_DIR};
use crate::{modfile, naming, probe};

/// Read-only snapshot of derived project metadata.
///
/// Field names are stable; external formatters consume this as-is.
#[derive(Debug, Clone, Serialize)]
pub struct Facts {
    pub dir: String,
    pub module_path: String,
    pub import_path: String,
    pub name: String,
    pub go_version: String,
    pub has_vendor: bool,
    pub has_gear_dir: bool,
    pub has_gear_rules: bool,
    pub has_gear_spec: bool,
}

/// Inspect the project rooted at `dir` and assemble its [`Facts`].
///
/// Probe absence is a normal `false`; every other failure short-circuits.
pub fn inspect(dir: &Path) -> Result<Facts> {
    let go_mod_path = dir.join(GO_MOD);
    let manifest = fs::read_to_string(&go_mod_path)
        .with_context(|| format!("read {}", go_mod_path.display()))?;

    let module_path = modfile::parse_module_path(&manifest).context("parse module path")?;
    let import_path = module_path.clone();

    let name = naming::project_name(&module_path).context("derive project name")?;

    let go_version = modfile::parse_go_version(&manifest).context("parse go version")?;

    let has_vendor = probe::has_dir(dir, VENDOR_DIR)?;
    let has_gear_dir = probe::has_dir(dir, GEAR_DIR)?;
    let has_gear_rules = probe::has_file(dir, GEAR_RULES)?;
    let has_gear_spec = probe::has_file(dir, &format!("{}/{}.spec", GEAR_DIR, name))?;

    Ok(Facts {
        dir: dir.display().to_string(),
        module_path,
        import_path,
        name,
        go_version,
        has_vendor,
        has_gear_dir,
        has_gear_rules,
        has_gear_spec,
    })
}
