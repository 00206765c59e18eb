//! Directive parsing for the `go.mod` manifest.
//!
//! Gear only mines the manifest for two directives: the module path
//! (`module github.com/a/b`) and the go version (`go 1.25`). Everything else
//! in the file, including the `toolchain` directive, is ignored.

use std::fmt;

/// Directive key for the module path.
pub const MODULE_KEY: &str = "module";
/// Directive key for the go version.
pub const GO_KEY: &str = "go";

const COMMENT_MARKER: &str = "//";

/// Why a directive could not be extracted from the manifest.
#[derive(Debug, PartialEq, Eq)]
pub enum DirectiveError {
    /// No line in the manifest starts with the requested key.
    NotFound { key: String },
    /// The directive line has no value after comment-stripping.
    EmptyValue { key: String },
    /// The directive line has more than one value token.
    Malformed { key: String, line: String },
}

impl fmt::Display for DirectiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectiveError::NotFound { key } => {
                write!(f, "directive {:?} not found in go.mod", key)
            }
            DirectiveError::EmptyValue { key } => {
                write!(f, "directive {:?} has an empty value", key)
            }
            DirectiveError::Malformed { key, line } => {
                write!(f, "malformed {:?} directive: {:?}", key, line)
            }
        }
    }
}

impl std::error::Error for DirectiveError {}

/// Extract a single-valued directive from manifest text.
///
/// A line is considered after stripping everything from the first `//` and
/// trimming surrounding whitespace (which also swallows a trailing `\r`).
/// The first line whose first whitespace-separated token equals `key` decides
/// the outcome: exactly one further token is the value, anything else is an
/// error. Later lines are never consulted for the same key.
pub fn parse_directive(data: &str, key: &str) -> Result<String, DirectiveError> {
    for raw_line in data.lines() {
        let line = match raw_line.find(COMMENT_MARKER) {
            Some(idx) => &raw_line[..idx],
            None => raw_line,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split_whitespace();
        if fields.next() != Some(key) {
            continue;
        }

        // First matching line wins, well-formed or not.
        let value = match fields.next() {
            Some(value) => value,
            None => {
                return Err(DirectiveError::EmptyValue {
                    key: key.to_string(),
                })
            }
        };
        if fields.next().is_some() {
            return Err(DirectiveError::Malformed {
                key: key.to_string(),
                line: line.to_string(),
            });
        }
        return Ok(value.to_string());
    }

    Err(DirectiveError::NotFound {
        key: key.to_string(),
    })
}

/// Extract the module path from manifest text.
pub fn parse_module_path(data: &str) -> Result<String, DirectiveError> {
    parse_directive(data, MODULE_KEY)
}

/// Extract the go version from manifest text.
///
/// Matches only a bare `go` directive; a `toolchain go1.25.1` line never
/// matches because the key comparison is exact.
pub fn parse_go_version(data: &str) -> Result<String, DirectiveError> {
    parse_directive(data, GO_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_module_path_simple() {
        assert_eq!(
            parse_module_path("module github.com/a/b\n").unwrap(),
            "github.com/a/b"
        );
    }

    #[test]
    fn test_parse_module_path_inline_comment() {
        assert_eq!(
            parse_module_path("module github.com/a/b // comment\n").unwrap(),
            "github.com/a/b"
        );
    }

    #[test]
    fn test_parse_module_path_tabs() {
        assert_eq!(
            parse_module_path("module\tgithub.com/a/b\n").unwrap(),
            "github.com/a/b"
        );
    }

    #[test]
    fn test_parse_module_path_crlf() {
        assert_eq!(
            parse_module_path("module github.com/a/b\r\n").unwrap(),
            "github.com/a/b"
        );
    }

    #[test]
    fn test_parse_module_path_leading_and_extra_spaces() {
        assert_eq!(
            parse_module_path("   module github.com/a/b\n").unwrap(),
            "github.com/a/b"
        );
        assert_eq!(
            parse_module_path("module     github.com/a/b   \n").unwrap(),
            "github.com/a/b"
        );
    }

    #[test]
    fn test_parse_module_path_not_first_line() {
        let data = "go 1.22\nrequire example.com/x v1.0.0\nmodule github.com/a/b\n";
        assert_eq!(parse_module_path(data).unwrap(), "github.com/a/b");
    }

    #[test]
    fn test_parse_module_path_missing() {
        let err = parse_module_path("go 1.22\nrequire example.com/x v1.0.0\n").unwrap_err();
        assert!(matches!(err, DirectiveError::NotFound { .. }));
    }

    #[test]
    fn test_parse_module_path_empty_value() {
        let err = parse_module_path("module   \n").unwrap_err();
        assert!(matches!(err, DirectiveError::EmptyValue { .. }));
    }

    #[test]
    fn test_parse_module_path_comment_only_value() {
        let err = parse_module_path("module // comment\n").unwrap_err();
        assert!(matches!(err, DirectiveError::EmptyValue { .. }));
    }

    #[test]
    fn test_parse_module_path_extra_tokens() {
        let err = parse_module_path("module github.com/a/b extra\n").unwrap_err();
        assert!(matches!(err, DirectiveError::Malformed { .. }));
    }

    #[test]
    fn test_first_matching_line_wins_even_when_malformed() {
        let data = "module a/b extra\nmodule github.com/a/b\n";
        let err = parse_module_path(data).unwrap_err();
        assert!(matches!(err, DirectiveError::Malformed { .. }));
    }

    #[test]
    fn test_parse_go_version_simple() {
        assert_eq!(
            parse_go_version("module github.com/a/b\ngo 1.22\n").unwrap(),
            "1.22"
        );
    }

    #[test]
    fn test_parse_go_version_inline_comment_and_tabs() {
        assert_eq!(parse_go_version("go 1.25 // comment\n").unwrap(), "1.25");
        assert_eq!(parse_go_version("go\t1.25\n").unwrap(), "1.25");
    }

    #[test]
    fn test_parse_go_version_ignores_toolchain() {
        assert_eq!(
            parse_go_version("toolchain go1.25.1\ngo 1.24\n").unwrap(),
            "1.24"
        );
    }

    #[test]
    fn test_parse_go_version_missing() {
        let err = parse_go_version("module github.com/a/b\n").unwrap_err();
        assert!(matches!(err, DirectiveError::NotFound { .. }));
    }

    #[test]
    fn test_parse_go_version_empty_and_extra() {
        assert!(matches!(
            parse_go_version("go   \n").unwrap_err(),
            DirectiveError::EmptyValue { .. }
        ));
        assert!(matches!(
            parse_go_version("go 1.25 extra\n").unwrap_err(),
            DirectiveError::Malformed { .. }
        ));
    }

    #[test]
    fn test_error_messages_name_the_key() {
        let err = parse_directive("", "module").unwrap_err();
        assert!(err.to_string().contains("module"));
    }
}
