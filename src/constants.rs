//! Constants for address scanning and resource splitting.

/// Delimiter between identifier and host.
pub const AT: char = '@';

/// Delimiter between host and resource.
pub const SLASH: char = '/';

/// Delimiter between resource kind and session.
pub const DOT: char = '.';

/// Device name whose trailing letters are valid hex digits.
///
/// The resource splitter keeps this prefix intact instead of cutting it
/// after the `i`.
pub const ANDROID: &str = "android";

/// Device name whose trailing letter is a valid hex digit.
///
/// The resource splitter keeps this prefix intact instead of cutting it
/// after the `n`.
pub const IPHONE: &str = "iPhone";
