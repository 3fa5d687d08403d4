//! Resource kind/session decomposition.
//!
//! Many clients generate resources such as `laptop.AB12CD` or `android3f9a`:
//! a stable, human-readable kind followed by a volatile session token.
//! Splitting the two lets roster equality treat concurrent sessions of the
//! same client as one entry.
//!
//! This is a best-effort convention matching known client naming patterns,
//! not a grammar. The split depends only on string content.

use crate::constants::{ANDROID, DOT, IPHONE};

/// Device names that end in hex-looking letters and must not be cut.
const DEVICE_NAMES: [&str; 2] = [ANDROID, IPHONE];

/// Splits a resource into `(kind, session)`.
///
/// Rules, first match wins:
///
/// 1. If the last `.` is not at index 0, split around it.
/// 2. Otherwise scan backward for the first character that is not an ASCII
///    hex digit and split right after it. The session is the hex-looking
///    tail.
/// 3. If every character is a hex digit, or the resource is empty, there is
///    no split and `None` is returned.
///
/// Two literal exceptions apply to rule 2: a resource starting with
/// `android` or `iPhone` keeps the whole device name in the kind, even
/// though its last letters (`d`, `e`) are hex digits.
///
/// # Examples
///
/// ```
/// use xmpp_address::split_resource;
///
/// assert_eq!(split_resource("laptop.AB12"), Some(("laptop", "AB12")));
/// assert_eq!(split_resource("android3f9a"), Some(("android", "3f9a")));
/// assert_eq!(split_resource("deadbeef"), None);
/// ```
#[must_use]
pub fn split_resource(resource: &str) -> Option<(&str, &str)> {
    if let Some(dot) = resource.rfind(DOT).filter(|&dot| dot > 0) {
        return Some((&resource[..dot], &resource[dot + 1..]));
    }

    let (pos, c) = resource
        .char_indices()
        .rev()
        .find(|&(_, c)| !c.is_ascii_hexdigit())?;

    // Device-name boundary letters are ASCII, so two characters past `pos`
    // is `pos + 2` bytes.
    let end = if ends_device_name(resource, pos, c) {
        pos + 2
    } else {
        pos + c.len_utf8()
    };

    // Everything after `pos` is ASCII, so any end up to the length is a boundary.
    Some(resource.split_at(end.min(resource.len())))
}

/// Returns true if `c`, found at byte offset `pos`, is the last non-hex
/// letter of a device name.
///
/// The boundary is matched by character index, not byte offset. Only the
/// first two characters and the boundary letter are matched, so `an???i3f`
/// counts as `android` the same way `android3f` does.
fn ends_device_name(resource: &str, pos: usize, c: char) -> bool {
    let index = resource[..pos].chars().count();
    DEVICE_NAMES.into_iter().any(|name| {
        let boundary = name.len() - 2;
        index == boundary && name[boundary..].starts_with(c) && resource.starts_with(&name[..2])
    })
}
