//! Structural scanning of address strings.
//!
//! The scanner only locates the two structural delimiters. It does not
//! validate the characters of any component.

use crate::constants::{AT, SLASH};
use crate::error::ParseErrorKind;
use crate::require::Require;

/// The structural components of a scanned address, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parts<'a> {
    /// `identifier`
    Identifier(&'a str),
    /// `identifier@host`
    Logon {
        /// Text before the `@`
        identifier: &'a str,
        /// Text after the `@`
        host: &'a str,
    },
    /// `identifier@host/resource`
    Full {
        /// Text before the `@`
        identifier: &'a str,
        /// Text between the `@` and the first valid `/`
        host: &'a str,
        /// Everything after the first valid `/`
        resource: &'a str,
    },
}

impl<'a> Parts<'a> {
    /// Returns the completeness level of this scan.
    #[must_use]
    pub const fn level(&self) -> Require {
        match self {
            Self::Identifier(_) => Require::Identifier,
            Self::Logon { .. } => Require::Logon,
            Self::Full { .. } => Require::Full,
        }
    }

    /// Returns the identifier component.
    #[must_use]
    pub const fn identifier(&self) -> &'a str {
        match *self {
            Self::Identifier(identifier)
            | Self::Logon { identifier, .. }
            | Self::Full { identifier, .. } => identifier,
        }
    }

    /// Returns the host component, if present.
    #[must_use]
    pub const fn host(&self) -> Option<&'a str> {
        match *self {
            Self::Identifier(_) => None,
            Self::Logon { host, .. } | Self::Full { host, .. } => Some(host),
        }
    }

    /// Returns the resource component, if present.
    #[must_use]
    pub const fn resource(&self) -> Option<&'a str> {
        match *self {
            Self::Full { resource, .. } => Some(resource),
            _ => None,
        }
    }
}

/// Splits an address string into its structural components.
///
/// Returns `Ok(None)` for empty input. The scan is a single left-to-right
/// pass that stops at the first valid `/`; anything after it, including
/// further `@` or `/` characters, belongs to the resource.
///
/// A `/` is valid only after an `@` that has a non-empty identifier before
/// it and at least one host character between it and the `/`. An empty
/// host without a resource (`identifier@`) is accepted.
///
/// # Errors
///
/// - [`ParseErrorKind::DuplicateDelimiter`] for a second `@` before the
///   first valid `/`.
/// - [`ParseErrorKind::MisplacedDelimiter`] for a `/` that is not valid.
///
/// # Examples
///
/// ```
/// use xmpp_address::{scan, Parts};
///
/// assert_eq!(scan("juliet").unwrap(), Some(Parts::Identifier("juliet")));
/// assert_eq!(
///     scan("juliet@example.com/balcony").unwrap(),
///     Some(Parts::Full {
///         identifier: "juliet",
///         host: "example.com",
///         resource: "balcony",
///     })
/// );
/// assert!(scan("juliet/balcony").is_err());
/// ```
pub fn scan(input: &str) -> Result<Option<Parts<'_>>, ParseErrorKind> {
    if input.is_empty() {
        return Ok(None);
    }

    let mut at_pos = None;
    let mut slash_pos = None;

    for (i, c) in input.char_indices() {
        if c == SLASH {
            match at_pos {
                Some(at) if at > 0 && at + 1 < i => {
                    slash_pos = Some(i);
                    break;
                }
                _ => return Err(ParseErrorKind::MisplacedDelimiter { position: i }),
            }
        } else if c == AT {
            if at_pos.is_some() {
                return Err(ParseErrorKind::DuplicateDelimiter { position: i });
            }
            at_pos = Some(i);
        }
    }

    let parts = match (at_pos, slash_pos) {
        (None, _) => Parts::Identifier(input),
        (Some(at), None) => Parts::Logon {
            identifier: &input[..at],
            host: &input[at + 1..],
        },
        (Some(at), Some(slash)) => Parts::Full {
            identifier: &input[..at],
            host: &input[at + 1..slash],
            resource: &input[slash + 1..],
        },
    };

    Ok(Some(parts))
}
