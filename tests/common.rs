//! Common test helpers for integration tests

use std::fs;
use std::path::Path;

/// Write a minimal well-formed go.mod into `dir`.
pub fn write_go_mod(dir: &Path, module_path: &str) {
    let content = format!("module {}\n\ngo 1.25\n", module_path);
    fs::write(dir.join("go.mod"), content).expect("write go.mod");
}

/// Lay out a full gear project: go.mod, vendor/, .gear/ with rules and spec.
pub fn setup_gear_project(dir: &Path, module_path: &str, name: &str) {
    write_go_mod(dir, module_path);
    fs::create_dir(dir.join("vendor")).expect("mkdir vendor");
    fs::create_dir(dir.join(".gear")).expect("mkdir .gear");
    fs::write(dir.join(".gear/rules"), "keep: all\n").expect("write rules");
    fs::write(dir.join(".gear").join(format!("{}.spec", name)), "").expect("write spec");
}
