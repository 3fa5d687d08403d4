//! The address value type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, Range};
use std::ptr;
use std::str::FromStr;

use crate::error::{ParseError, ParseErrorKind};
use crate::require::Require;
use crate::resource::split_resource;
use crate::scanner::scan;

/// A parsed address: `identifier`, `identifier@host`, or
/// `identifier@host/resource`.
///
/// Addresses are immutable. Every component is a slice of one string, the
/// *projection*, which is the most specific composite present: the full
/// address if there is a resource, else the logon, else the identifier.
/// The projection is what [`Display`](fmt::Display), [`Deref`], [`Hash`]
/// and [`as_str`](Self::as_str) expose.
///
/// # Equality and ordering
///
/// Two addresses are compared at the most specific level they share:
///
/// - if either lacks a host, by identifier;
/// - else if either lacks a resource, by logon;
/// - else by logon and [resource kind](Self::resource_kind). Differing
///   sessions of the same kind are equal, so two sessions of one client
///   collapse into one roster entry.
///
/// Because of the last rule, and because a bare identifier is equal to
/// addresses that are not equal to each other, `==` is not an equivalence
/// relation and `Address` does not implement `Eq`. It also does not agree
/// with [`Hash`], which covers the whole projection. Rosters that need a
/// hash key should key by [`as_str`](Self::as_str) and apply `==` as a
/// separate merge step.
///
/// For sorting use [`compare`](Self::compare). It orders full addresses
/// by their full text, so it can report two `==` addresses as unequal.
/// That is deliberate: sorting and roster merging are separate concerns.
///
/// # Examples
///
/// ```
/// use xmpp_address::{Address, Require};
///
/// let addr = Address::parse_with("juliet@capulet.lit/laptop.a1b2", Require::Full).unwrap();
/// assert_eq!(addr.identifier(), "juliet");
/// assert_eq!(addr.host(), Some("capulet.lit"));
/// assert_eq!(addr.logon(), Some("juliet@capulet.lit"));
/// assert_eq!(addr.resource_kind(), Some("laptop"));
/// assert_eq!(addr.resource_session(), Some("a1b2"));
///
/// // Another session of the same client is the same roster entry.
/// let other = Address::parse("juliet@capulet.lit/laptop.c3d4").unwrap();
/// assert!(addr == other);
/// assert_ne!(addr.as_str(), other.as_str());
/// ```
#[derive(Debug, Clone)]
pub struct Address {
    text: String,
    /// Byte offset of the `@`
    at: Option<usize>,
    /// Byte offset of the first valid `/`
    slash: Option<usize>,
    kind: Option<Range<usize>>,
    session: Option<Range<usize>>,
}

impl Address {
    /// Parses an address, accepting any completeness level.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the input is empty or its delimiters are
    /// misplaced or duplicated.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_with(input, Require::Identifier)
    }

    /// Parses an address that must carry at least `require` components.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - The input is empty
    /// - The input has a second `@`
    /// - A `/` comes before the `@` or directly after it
    /// - The input has fewer components than `require`
    ///
    /// # Examples
    ///
    /// ```
    /// use xmpp_address::{Address, ParseErrorKind, Require};
    ///
    /// assert!(Address::parse_with("a@b/c", Require::Full).is_ok());
    ///
    /// let err = Address::parse_with("a@b", Require::Full).unwrap_err();
    /// assert!(matches!(err.kind, ParseErrorKind::InsufficientComponents { .. }));
    /// ```
    pub fn parse_with(input: &str, require: Require) -> Result<Self, ParseError> {
        Self::parse_inner(input, require).map_err(|kind| ParseError {
            input: input.to_string(),
            kind,
        })
    }

    fn parse_inner(input: &str, require: Require) -> Result<Self, ParseErrorKind> {
        let parts = scan(input)?.ok_or(ParseErrorKind::Empty)?;

        let found = parts.level();
        if found < require {
            return Err(ParseErrorKind::InsufficientComponents {
                required: require,
                found,
            });
        }

        let at = parts.host().map(|_| parts.identifier().len());
        let (slash, kind, session) = match parts.resource() {
            Some(resource) => {
                let start = input.len() - resource.len();
                let (kind, session) = split_resource(resource).unwrap_or((resource, resource));
                (
                    Some(start - 1),
                    Some(start..start + kind.len()),
                    Some(input.len() - session.len()..input.len()),
                )
            }
            None => (None, None, None),
        };

        Ok(Self {
            text: input.to_string(),
            at,
            slash,
            kind,
            session,
        })
    }

    /// Returns the identifier. Always present.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.text[..self.at.unwrap_or(self.text.len())]
    }

    /// Returns the host, if the address has one.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.at
            .map(|at| &self.text[at + 1..self.slash.unwrap_or(self.text.len())])
    }

    /// Returns the resource, if the address has one.
    #[must_use]
    pub fn resource(&self) -> Option<&str> {
        self.slash.map(|slash| &self.text[slash + 1..])
    }

    /// Returns the stable leading part of the resource.
    ///
    /// Equal to the whole resource when it has no kind/session split.
    #[must_use]
    pub fn resource_kind(&self) -> Option<&str> {
        self.kind.clone().map(|range| &self.text[range])
    }

    /// Returns the volatile trailing part of the resource.
    ///
    /// Equal to the whole resource when it has no kind/session split.
    #[must_use]
    pub fn resource_session(&self) -> Option<&str> {
        self.session.clone().map(|range| &self.text[range])
    }

    /// Returns `identifier@host`, if the address has a host.
    #[must_use]
    pub fn logon(&self) -> Option<&str> {
        self.at
            .map(|_| &self.text[..self.slash.unwrap_or(self.text.len())])
    }

    /// Returns `identifier@host/resource`, if the address has a resource.
    #[must_use]
    pub fn full(&self) -> Option<&str> {
        self.slash.map(|_| self.text.as_str())
    }

    /// Returns the most specific composite: full, else logon, else identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the completeness level this address carries.
    #[must_use]
    pub const fn level(&self) -> Require {
        match (self.at, self.slash) {
            (_, Some(_)) => Require::Full,
            (Some(_), None) => Require::Logon,
            (None, None) => Require::Identifier,
        }
    }

    /// Returns true if this address carries at least `require` components.
    #[must_use]
    pub fn satisfies(&self, require: Require) -> bool {
        self.level() >= require
    }

    /// Orders two addresses for sorting.
    ///
    /// Full addresses compare by their full text. Otherwise the addresses
    /// compare by logon, or by identifier if either lacks a host. This is a
    /// total order over addresses of one completeness level, but it does not
    /// agree with `==`: two sessions of one resource kind are equal yet
    /// order apart.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use xmpp_address::Address;
    ///
    /// let a = Address::parse("romeo@montague.lit/dev.01").unwrap();
    /// let b = Address::parse("romeo@montague.lit/dev.02").unwrap();
    /// assert!(a == b);
    /// assert_eq!(a.compare(&b), Ordering::Less);
    ///
    /// let mut roster = vec![b, a];
    /// roster.sort_by(Address::compare);
    /// assert_eq!(roster[0].as_str(), "romeo@montague.lit/dev.01");
    /// ```
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        if ptr::eq(self, other) {
            return Ordering::Equal;
        }
        match (self.full(), other.full()) {
            (Some(a), Some(b)) => a.cmp(b),
            _ => {
                let (a, b) = self.shared_keys(other);
                a.cmp(b)
            }
        }
    }

    /// Returns the logons of both addresses, or their identifiers if either
    /// lacks a host.
    fn shared_keys<'a>(&'a self, other: &'a Self) -> (&'a str, &'a str) {
        match (self.logon(), other.logon()) {
            (Some(a), Some(b)) => (a, b),
            _ => (self.identifier(), other.identifier()),
        }
    }
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        if ptr::eq(self, other) {
            return true;
        }
        match (self.resource_kind(), other.resource_kind()) {
            (Some(a), Some(b)) => self.logon() == other.logon() && a == b,
            _ => {
                let (a, b) = self.shared_keys(other);
                a == b
            }
        }
    }
}

/// Compares against the logon, or the identifier if there is no host. The
/// full address never takes part.
impl PartialEq<str> for Address {
    fn eq(&self, other: &str) -> bool {
        self.logon().unwrap_or_else(|| self.identifier()) == other
    }
}

impl PartialEq<&str> for Address {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl PartialEq<Address> for str {
    fn eq(&self, other: &Address) -> bool {
        *other == *self
    }
}

impl PartialEq<Address> for &str {
    fn eq(&self, other: &Address) -> bool {
        *other == **self
    }
}

impl Hash for Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Address {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Address {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl Deref for Address {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.text
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.text)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn addr(s: &str) -> Address {
        Address::parse(s).unwrap()
    }

    fn hash_of(a: &Address) -> u64 {
        let mut hasher = DefaultHasher::new();
        a.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn parse_identifier() {
        let a = addr("juliet");
        assert_eq!(a.identifier(), "juliet");
        assert_eq!(a.host(), None);
        assert_eq!(a.resource(), None);
        assert_eq!(a.resource_kind(), None);
        assert_eq!(a.resource_session(), None);
        assert_eq!(a.logon(), None);
        assert_eq!(a.full(), None);
        assert_eq!(a.level(), Require::Identifier);
        assert_eq!(a.as_str(), "juliet");
    }

    #[test]
    fn parse_logon() {
        let a = addr("juliet@capulet.lit");
        assert_eq!(a.identifier(), "juliet");
        assert_eq!(a.host(), Some("capulet.lit"));
        assert_eq!(a.resource(), None);
        assert_eq!(a.logon(), Some("juliet@capulet.lit"));
        assert_eq!(a.full(), None);
        assert_eq!(a.level(), Require::Logon);
        assert_eq!(a.as_str(), "juliet@capulet.lit");
    }

    #[test]
    fn parse_full() {
        let a = addr("juliet@capulet.lit/balcony");
        assert_eq!(a.identifier(), "juliet");
        assert_eq!(a.host(), Some("capulet.lit"));
        assert_eq!(a.resource(), Some("balcony"));
        assert_eq!(a.logon(), Some("juliet@capulet.lit"));
        assert_eq!(a.full(), Some("juliet@capulet.lit/balcony"));
        assert_eq!(a.level(), Require::Full);
    }

    #[test]
    fn resource_split_is_exposed() {
        let a = addr("juliet@capulet.lit/android3f9a");
        assert_eq!(a.resource_kind(), Some("android"));
        assert_eq!(a.resource_session(), Some("3f9a"));
    }

    #[test]
    fn unsplit_resource_falls_back_to_whole() {
        let a = addr("juliet@capulet.lit/deadbeef");
        assert_eq!(a.resource_kind(), Some("deadbeef"));
        assert_eq!(a.resource_session(), Some("deadbeef"));

        let empty = addr("juliet@capulet.lit/");
        assert_eq!(empty.resource(), Some(""));
        assert_eq!(empty.resource_kind(), Some(""));
        assert_eq!(empty.resource_session(), Some(""));
    }

    #[test]
    fn parse_empty_returns_error() {
        let result = Address::parse("");
        assert!(matches!(
            result,
            Err(ParseError {
                kind: ParseErrorKind::Empty,
                ..
            })
        ));
    }

    #[test]
    fn parse_misplaced_slash_returns_error() {
        let err = Address::parse("a/b").unwrap_err();
        assert_eq!(err.input, "a/b");
        assert_eq!(err.kind, ParseErrorKind::MisplacedDelimiter { position: 1 });
    }

    #[test]
    fn parse_duplicate_at_returns_error() {
        let err = Address::parse("a@@b").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::DuplicateDelimiter { position: 2 });
    }

    #[test]
    fn require_levels() {
        assert!(Address::parse_with("a", Require::Identifier).is_ok());
        assert!(Address::parse_with("a@b", Require::Logon).is_ok());
        assert!(Address::parse_with("a@b/c", Require::Logon).is_ok());
        assert!(Address::parse_with("a@b/c", Require::Full).is_ok());

        let err = Address::parse_with("a", Require::Logon).unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::InsufficientComponents {
                required: Require::Logon,
                found: Require::Identifier,
            }
        );

        let err = Address::parse_with("a@b", Require::Full).unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::InsufficientComponents {
                required: Require::Full,
                found: Require::Logon,
            }
        );
    }

    #[test]
    fn satisfies_levels() {
        let a = addr("a@b");
        assert!(a.satisfies(Require::Identifier));
        assert!(a.satisfies(Require::Logon));
        assert!(!a.satisfies(Require::Full));
    }

    #[test]
    fn equal_sessions_of_same_kind() {
        assert!(addr("a@h/dev.01") == addr("a@h/dev.02"));
        assert!(addr("a@h/laptopX1") == addr("a@h/laptopXff"));
    }

    #[test]
    fn unequal_kinds() {
        assert!(addr("a@h/dev.01") != addr("a@h/phone.01"));
    }

    #[test]
    fn unequal_logons_with_same_kind() {
        assert!(addr("a@h/dev.01") != addr("b@h/dev.01"));
    }

    #[test]
    fn missing_resource_compares_logon() {
        assert!(addr("a@h") == addr("a@h/dev.01"));
        assert!(addr("a@h/dev.01") == addr("a@h"));
        assert!(addr("a@h") != addr("a@g/dev.01"));
    }

    #[test]
    fn missing_host_compares_identifier() {
        assert!(addr("a") == addr("a@h"));
        assert!(addr("a") == addr("a@g/dev.01"));
        assert!(addr("a") != addr("b@h"));
    }

    #[test]
    fn equality_is_not_transitive_across_levels() {
        let bare = addr("a");
        let x = addr("a@h");
        let y = addr("a@g");
        assert!(bare == x);
        assert!(bare == y);
        assert!(x != y);
    }

    #[test]
    fn equality_against_strings() {
        assert!(addr("a") == "a");
        assert!(addr("a@h") == "a@h");
        assert!(addr("a@h/r") == "a@h");
        assert!(addr("a@h/r") != "a@h/r");
        assert!(addr("a@h") != "a");
        assert!("a@h" == addr("a@h/r"));
    }

    #[test]
    fn identical_values_are_equal() {
        let a = addr("a@h/r");
        let same = &a;
        assert!(a == *same);
        assert_eq!(a.compare(same), Ordering::Equal);
    }

    #[test]
    fn compare_full_by_full_text() {
        assert_eq!(addr("a@h/dev.01").compare(&addr("a@h/dev.02")), Ordering::Less);
        assert_eq!(addr("b@h/x").compare(&addr("a@h/y")), Ordering::Greater);
    }

    #[test]
    fn compare_mixed_levels_by_shared_key() {
        assert_eq!(addr("a@h").compare(&addr("a@h/r")), Ordering::Equal);
        assert_eq!(addr("a").compare(&addr("a@h/r")), Ordering::Equal);
        assert_eq!(addr("a@h").compare(&addr("b@a")), Ordering::Less);
        assert_eq!(addr("b").compare(&addr("a@z")), Ordering::Greater);
    }

    #[test]
    fn compare_disagrees_with_eq_for_sessions() {
        let a = addr("a@h/dev.01");
        let b = addr("a@h/dev.02");
        assert!(a == b);
        assert_ne!(a.compare(&b), Ordering::Equal);
    }

    #[test]
    fn hash_follows_projection() {
        assert_eq!(hash_of(&addr("a@h/r")), hash_of(&addr("a@h/r")));
        assert_ne!(hash_of(&addr("a@h/dev.01")), hash_of(&addr("a@h/dev.02")));
    }

    #[test]
    fn string_view() {
        let a = addr("a@h/r");
        assert_eq!(a.len(), 5);
        assert_eq!(a.chars().nth(1), Some('@'));
        assert_eq!(&a[2..3], "h");
        assert_eq!(a.to_string(), "a@h/r");
        assert_eq!(AsRef::<str>::as_ref(&a), "a@h/r");
    }

    #[test]
    fn from_str_and_try_from() {
        let a: Address = "a@h".parse().unwrap();
        assert_eq!(a.logon(), Some("a@h"));
        let b = Address::try_from("a@h/r").unwrap();
        assert_eq!(b.resource(), Some("r"));
        assert!("a/b".parse::<Address>().is_err());
    }

    #[test]
    fn display_roundtrip() {
        for input in ["a", "a@h", "a@h/r", "a@", "@h", "a@h/r/s@t"] {
            let a = addr(input);
            let reparsed = addr(&a.to_string());
            assert_eq!(reparsed.as_str(), a.as_str());
            assert_eq!(reparsed.level(), a.level());
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_projection() {
        let a = addr("a@h/laptop.01");
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "\"a@h/laptop.01\"");
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back.resource_kind(), Some("laptop"));
        assert!(serde_json::from_str::<Address>("\"a/b\"").is_err());
    }
}
