//! Pre-packaging validation: accumulate-and-report.
//!
//! Unlike [`crate::inspect`], validation never fails as a whole. Each check
//! in the fixed battery either passes (possibly handing its output to the
//! next check) or degrades into a single [`Issue`]; the engine always returns
//! a complete [`Report`] whose verdict is the worst severity found.

use serde::Serialize;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::paths::{GEAR_DIR, GO_MOD};
use crate::probe;
use crate::{modfile, naming};

/// Severity of a validation finding.
///
/// WARN is part of the taxonomy for future checks; the current battery only
/// emits ERROR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "WARN")]
    Warn,
    #[serde(rename = "ERROR")]
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Ok => write!(f, "OK"),
            Severity::Warn => write!(f, "WARN"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// One validation finding: severity, stable code, message, implicated path.
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    pub severity: Severity,
    pub code: String,
    pub message: String,
    pub path: String,
}

impl Issue {
    fn error(code: &str, message: &str, path: &Path) -> Self {
        Issue {
            severity: Severity::Error,
            code: code.to_string(),
            message: message.to_string(),
            path: path.display().to_string(),
        }
    }
}

/// Validation stage. Only the pre-packaging stage exists today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Stage {
    #[serde(rename = "pre")]
    Pre,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Pre => write!(f, "pre"),
        }
    }
}

/// Outcome of a validation run.
///
/// `module_path` and `name` are best-effort: populated with whatever the
/// corresponding checks managed to produce, empty when an upstream check
/// failed. Callers must inspect `verdict`, not rely on a call-level error.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub stage: Stage,
    pub verdict: Severity,
    pub issues: Vec<Issue>,
    pub module_path: String,
    pub name: String,
}

/// Run the pre-packaging check battery against the project rooted at `dir`.
pub fn pre(dir: &Path) -> Report {
    let mut issues = Vec::with_capacity(4);

    let manifest = collect(check_go_mod(dir), &mut issues);

    let module_path = collect(check_module_path(dir, manifest.as_deref()), &mut issues);

    let name = collect(
        check_name(dir, module_path.as_deref().unwrap_or_default()),
        &mut issues,
    );

    if let Err(issue) = check_writable(dir) {
        issues.push(issue);
    }

    let verdict = max_severity(&issues);

    Report {
        stage: Stage::Pre,
        verdict,
        issues,
        module_path: module_path.unwrap_or_default(),
        name: name.unwrap_or_default(),
    }
}

/// Record a failed check's issue and hand the success value (if any) onward.
fn collect<T>(outcome: Result<T, Issue>, issues: &mut Vec<Issue>) -> Option<T> {
    match outcome {
        Ok(value) => Some(value),
        Err(issue) => {
            issues.push(issue);
            None
        }
    }
}

/// Check 1: the manifest must exist and be readable.
fn check_go_mod(dir: &Path) -> Result<String, Issue> {
    let go_mod_path = dir.join(GO_MOD);
    match fs::read_to_string(&go_mod_path) {
        Ok(data) => Ok(data),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(Issue::error(
            "GO_MOD_MISSING",
            "go.mod file is missing",
            &go_mod_path,
        )),
        Err(_) => Err(Issue::error(
            "GO_MOD_READ_FAILED",
            "go.mod file cannot be read",
            &go_mod_path,
        )),
    }
}

/// Check 2: the manifest must carry a well-formed module directive.
///
/// When check 1 failed, `manifest` is `None` and parsing the absent data
/// degrades into this check's own issue.
fn check_module_path(dir: &Path, manifest: Option<&str>) -> Result<String, Issue> {
    modfile::parse_module_path(manifest.unwrap_or_default()).map_err(|_| {
        Issue::error("MODULE_PATH_INVALID", "invalid module path", dir)
    })
}

/// Check 3: a project name must be derivable from the module path.
///
/// Shares `MODULE_PATH_INVALID` with check 2: parsing and derivation
/// failures are indistinguishable to the caller.
fn check_name(dir: &Path, module_path: &str) -> Result<String, Issue> {
    naming::project_name(module_path).map_err(|_| {
        Issue::error("MODULE_PATH_INVALID", "invalid module path", dir)
    })
}

/// Check 4: the directory gear will write into must be usable.
///
/// With an existing `.gear` it must be a writable, traversable directory;
/// without one, the project root itself must be.
fn check_writable(dir: &Path) -> Result<(), Issue> {
    let gear_dir = dir.join(GEAR_DIR);
    match fs::metadata(&gear_dir) {
        Ok(meta) => {
            if !meta.is_dir() {
                return Err(Issue::error(
                    "GEAR_IS_A_FILE",
                    ".gear is a file",
                    &gear_dir,
                ));
            }
            if !probe::is_accessible(&gear_dir) {
                return Err(Issue::error(
                    "GEAR_IS_NOT_ACCESSIBLE",
                    ".gear is not accessible",
                    &gear_dir,
                ));
            }
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            if !probe::is_accessible(dir) {
                return Err(Issue::error(
                    "DIR_IS_NOT_ACCESSIBLE",
                    "project dir is not accessible",
                    dir,
                ));
            }
            Ok(())
        }
        Err(_) => Err(Issue::error(
            "OS_STAT_FAILED",
            "stat on .gear failed",
            &gear_dir,
        )),
    }
}

/// Worst severity across the issue list, in check-execution order.
///
/// WARN upgrades OK and keeps scanning; the first ERROR is already the
/// ceiling, so the scan stops there.
fn max_severity(issues: &[Issue]) -> Severity {
    let mut verdict = Severity::Ok;
    for issue in issues {
        match issue.severity {
            Severity::Warn => verdict = Severity::Warn,
            Severity::Error => {
                verdict = Severity::Error;
                break;
            }
            Severity::Ok => {}
        }
    }
    verdict
}
