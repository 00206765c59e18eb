//! Filesystem probes for expected project artifacts.
//!
//! Absence is a normal answer (`Ok(false)`); any other stat failure is a real
//! error and propagates to the caller.

use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Is there a directory at `root/rel`?
pub fn has_dir(root: &Path, rel: &str) -> Result<bool> {
    let path = root.join(rel);
    match fs::metadata(&path) {
        Ok(meta) => Ok(meta.is_dir()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).with_context(|| format!("stat {}", path.display())),
    }
}

/// Is there a non-directory file at `root/rel`?
pub fn has_file(root: &Path, rel: &str) -> Result<bool> {
    let path = root.join(rel);
    match fs::metadata(&path) {
        Ok(meta) => Ok(!meta.is_dir()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).with_context(|| format!("stat {}", path.display())),
    }
}

/// Can the current process write to and traverse `path`?
#[cfg(unix)]
pub fn is_accessible(path: &Path) -> bool {
    use nix::unistd::{access, AccessFlags};
    access(path, AccessFlags::W_OK | AccessFlags::X_OK).is_ok()
}

/// Can the current process write to and traverse `path`?
///
/// Best effort off unix: falls back to the read-only metadata bit.
#[cfg(not(unix))]
pub fn is_accessible(path: &Path) -> bool {
    fs::metadata(path)
        .map(|meta| !meta.permissions().readonly())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_has_dir_present() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("vendor")).unwrap();
        assert!(has_dir(tmp.path(), "vendor").unwrap());
    }

    #[test]
    fn test_has_dir_absent_is_false() {
        let tmp = TempDir::new().unwrap();
        assert!(!has_dir(tmp.path(), "vendor").unwrap());
    }

    #[test]
    fn test_has_dir_rejects_plain_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("vendor"), "not a dir").unwrap();
        assert!(!has_dir(tmp.path(), "vendor").unwrap());
    }

    #[test]
    fn test_has_file_present() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("rules"), "").unwrap();
        assert!(has_file(tmp.path(), "rules").unwrap());
    }

    #[test]
    fn test_has_file_absent_is_false() {
        let tmp = TempDir::new().unwrap();
        assert!(!has_file(tmp.path(), "rules").unwrap());
    }

    #[test]
    fn test_has_file_rejects_directory() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("rules")).unwrap();
        assert!(!has_file(tmp.path(), "rules").unwrap());
    }

    #[test]
    fn test_is_accessible_own_tempdir() {
        let tmp = TempDir::new().unwrap();
        assert!(is_accessible(tmp.path()));
    }

    #[cfg(unix)]
    #[test]
    fn test_is_accessible_readonly_dir() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("locked");
        fs::create_dir(&dir).unwrap();
        fs::set_permissions(&dir, fs::Permissions::from_mode(0o555)).unwrap();

        // Root bypasses permission bits; nothing to assert in that case.
        let accessible = is_accessible(&dir);
        fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).unwrap();
        if nix::unistd::geteuid().is_root() {
            return;
        }
        assert!(!accessible);
    }
}
