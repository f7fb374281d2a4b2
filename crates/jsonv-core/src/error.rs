//! Error types for parsing and for value-model access.

use thiserror::Error;

/// Malformed input detected by the parser.
///
/// Carries the 1-based line and column at which scanning stopped. A parse
/// never recovers from one of these: the whole call fails and no partial tree
/// is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} at line {line}, column {column}")]
pub struct ParseError {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

/// Errors raised by the value model itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A strict accessor was called on the wrong variant.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Strict keyed access on a map that has no such key.
    #[error("no such key: {0:?}")]
    MissingKey(String),

    /// The tree holds something the canonical form cannot express.
    #[error("malformed value: {0}")]
    Malformed(String),
}

/// Convenience alias used by the value model.
pub type Result<T> = std::result::Result<T, ValueError>;
