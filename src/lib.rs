//! # Gear - Go module inspection and vendoring bootstrap
//!
//! Gear inspects a Go module project before and during a packaging workflow.
//! It reads `go.mod`, derives a canonical project name and import path, probes
//! for the artifacts the packaging pipeline expects (`vendor/`, `.gear/` and
//! its contents), and reports a severity-ranked verdict of readiness.
//!
//! ## Core Concepts
//!
//! - **Facts**: a read-only snapshot of derived project metadata, produced by
//!   [`inspect::inspect`] — fail-fast, all-or-nothing
//! - **Report**: an issue list plus overall verdict, produced by
//!   [`validate::pre`] — never fails, individual checks degrade to issues
//! - **Vendoring**: a thin wrapper over `go mod vendor` used by the
//!   `bootstrap` subcommand
//!
//! ## Modules
//!
//! - [`modfile`] - `go.mod` directive parsing (module path, go version)
//! - [`naming`] - project name derivation from a module path
//! - [`probe`] - filesystem existence and accessibility probes
//! - [`inspect`] - fail-fast facts aggregation
//! - [`validate`] - accumulate-and-report validation engine
//! - [`vendor`] - `go mod vendor` invocation
//! - [`render`] - JSON/text rendering and output destination handling
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use gear::validate::{self, Severity};
//!
//! let report = validate::pre(Path::new("."));
//! match report.verdict {
//!     Severity::Ok => println!("ready to package"),
//!     _ => {
//!         for issue in &report.issues {
//!             eprintln!("{} {}: {}", issue.severity, issue.code, issue.message);
//!         }
//!     }
//! }
//! ```

pub mod inspect;
pub mod modfile;
pub mod naming;
pub mod probe;
pub mod render;
pub mod validate;
pub mod vendor;

/// Path constants for the artifacts gear probes relative to a project root.
pub mod paths {
    /// The Go module manifest: `go.mod`
    pub const GO_MOD: &str = "go.mod";
    /// Vendored dependencies directory: `vendor`
    pub const VENDOR_DIR: &str = "vendor";
    /// Project-local gear configuration directory: `.gear`
    pub const GEAR_DIR: &str = ".gear";
    /// Packaging rules file inside the gear directory: `.gear/rules`
    pub const GEAR_RULES: &str = ".gear/rules";
}
