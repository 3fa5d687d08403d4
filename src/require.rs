//! Completeness levels for address construction.

use std::fmt;
use std::str::FromStr;

/// How many structural components an address carries, or must carry.
///
/// Levels are ordered by specificity: `Identifier < Logon < Full`. When
/// passed to [`Address::parse_with`](crate::Address::parse_with), the level
/// is a minimum: input with more components is accepted, input with fewer
/// is rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Require {
    /// `identifier`
    #[default]
    Identifier,
    /// `identifier@host`
    Logon,
    /// `identifier@host/resource`
    Full,
}

impl Require {
    /// Returns the lowercase name of this level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::Logon => "logon",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for Require {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Require {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Identifier, Self::Logon, Self::Full]
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or("expected one of 'identifier', 'logon' or 'full'")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Require {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Require {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
