//! Error types for address parsing.

use std::fmt;

use crate::require::Require;

/// Errors that can occur when parsing an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parsing error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input is empty
    Empty,
    /// A second `@` was found
    DuplicateDelimiter {
        /// Byte offset of the second `@`
        position: usize,
    },
    /// A `/` appeared before any `@`, or directly after it
    MisplacedDelimiter {
        /// Byte offset of the offending `/`
        position: usize,
    },
    /// The input carries fewer components than the caller required
    InsufficientComponents {
        /// Level the caller asked for
        required: Require,
        /// Level actually present in the input
        found: Require,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse address '{}': {}", self.input, self.kind)
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "address cannot be empty"),
            Self::DuplicateDelimiter { position } => {
                write!(f, "duplicate '@' at position {position}")
            }
            Self::MisplacedDelimiter { position } => write!(
                f,
                "misplaced '/' at position {position}; a resource must follow a non-empty identifier and host"
            ),
            Self::InsufficientComponents { required, found } => {
                write!(f, "address has {found} components but {required} is required")
            }
        }
    }
}

impl std::error::Error for ParseError {}
