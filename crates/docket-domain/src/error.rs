//! Machine-readable error classification shared across crates

use std::fmt;

/// Classification carried by every Docket error type
///
/// Callers branch on the kind instead of matching message text. The HTTP
/// layer maps kinds to status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Caller input is missing or invalid
    Validation,

    /// A board or group the caller named does not exist remotely
    NotFound,

    /// Transport or application failure from an external API
    Remote,

    /// Model output could not be parsed as JSON
    Parse,

    /// Anything else
    Internal,
}

impl ErrorKind {
    /// Get the kind as a snake_case tag
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Remote => "remote",
            ErrorKind::Parse => "parse",
            ErrorKind::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
