//! Error types for termfolio.
//!
//! Every error here is recoverable: command handlers convert them into
//! ordinary scrollback lines, so the dispatcher never sees a failure.

use std::fmt;

/// Result type alias for termfolio operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for termfolio operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Path does not resolve to any node in the virtual filesystem.
    NoSuchPath(String),
    /// Path resolves to a file where a directory was required.
    NotADirectory(String),
    /// Path resolves to a directory where a file was required.
    NotAFile(String),
    /// `..` at the filesystem root (demo-safety boundary, not a real OS one).
    PermissionDenied,
    /// No section matched the given name.
    SectionNotFound(String),
    /// Verb is not in the command table.
    UnknownCommand(String),
    /// A network-probe collaborator returned a malformed or failed response.
    ProbeFailed(String),
    /// The submitted line was empty after trimming.
    EmptyCommand,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSuchPath(p) => write!(f, "{p}: No such file or directory"),
            Self::NotADirectory(p) => write!(f, "{p}: Not a directory"),
            Self::NotAFile(p) => write!(f, "{p}: Is a directory"),
            Self::PermissionDenied => write!(f, "..: Permission denied"),
            Self::SectionNotFound(name) => write!(f, "section '{name}' not found"),
            Self::UnknownCommand(verb) => write!(f, "{verb}: command not found"),
            Self::ProbeFailed(reason) => write!(f, "network probe failed: {reason}"),
            Self::EmptyCommand => write!(f, "empty command"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NoSuchPath("~/nope.txt".to_string());
        assert!(err.to_string().contains("No such file or directory"));

        let err = Error::NotAFile("~/projects".to_string());
        assert!(err.to_string().contains("Is a directory"));

        let err = Error::UnknownCommand("foobar".to_string());
        assert_eq!(err.to_string(), "foobar: command not found");
    }

    #[test]
    fn test_permission_denied_phrasing() {
        assert_eq!(Error::PermissionDenied.to_string(), "..: Permission denied");
    }
}
