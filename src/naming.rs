//! Project name derivation from a Go module path.
//!
//! Semantic-versioned import paths carry a major-version suffix
//! (`github.com/a/b/v2`) that is not part of the project's name. Derivation
//! strips it when a preceding segment exists to fall back to.

use anyhow::{bail, Result};

/// Derive the canonical lower-cased project name from a module path.
///
/// The last path segment is the name, unless it is a major-version segment
/// (`v` followed by digits) and the path has at least two segments, in which
/// case the second-to-last segment is used.
///
/// A single-segment path always names itself, even when it is version-shaped:
/// `project_name("v2")` is `Ok("v2")`, since there is no prior segment to
/// fall back to and the path is otherwise legal.
pub fn project_name(module_path: &str) -> Result<String> {
    let segments: Vec<&str> = module_path.split('/').collect();
    let last = segments[segments.len() - 1];

    let name = if is_major_version_segment(last) && segments.len() >= 2 {
        segments[segments.len() - 2]
    } else {
        last
    };

    if name.is_empty() {
        bail!("cannot derive a project name from module path {:?}", module_path);
    }

    Ok(name.to_lowercase())
}

/// True for segments of the form `v<digits>` (v2, v10, ...).
fn is_major_version_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    if chars.next() != Some('v') {
        return false;
    }
    let rest = &segment[1..];
    !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit())
}
