//! Parser for XMPP-style addresses with roster-oriented comparison.
//!
//! An address has one to three structural components:
//!
//! ```text
//! identifier[@host[/resource]]
//! ```
//!
//! Only the two delimiters are checked. Component characters are not
//! validated or normalized.
//!
//! # Quick Start
//!
//! ```rust
//! use xmpp_address::{Address, Require};
//!
//! let addr = Address::parse("romeo@montague.lit/orchard").unwrap();
//! assert_eq!(addr.identifier(), "romeo");
//! assert_eq!(addr.host(), Some("montague.lit"));
//! assert_eq!(addr.resource(), Some("orchard"));
//! assert_eq!(addr.logon(), Some("romeo@montague.lit"));
//!
//! // Ask for a minimum number of components.
//! assert!(Address::parse_with("romeo@montague.lit", Require::Full).is_err());
//! ```
//!
//! # Rosters
//!
//! Resources are split into a stable *kind* and a volatile *session*
//! (`laptop.a1b2` is kind `laptop`, session `a1b2`). Equality ignores the
//! session, so concurrent sessions of one client compare equal:
//!
//! ```rust
//! use xmpp_address::Address;
//!
//! let a = Address::parse("romeo@montague.lit/laptop.a1b2").unwrap();
//! let b = Address::parse("romeo@montague.lit/laptop.c3d4").unwrap();
//! assert!(a == b);
//! ```
//!
//! Hashing and [`Address::compare`] use the full text instead. See
//! [`Address`] for how the three relate.
//!
//! # Grammar
//!
//! | Input | Components |
//! |-------|------------|
//! | `ID` | identifier |
//! | `ID@HOST` | identifier, host |
//! | `ID@HOST/RESOURCE` | identifier, host, resource |
//!
//! A second `@` before the resource is an error. A `/` is structural only
//! after a non-empty identifier, an `@`, and a non-empty host; any other
//! `/` before that point is an error. Everything after the first
//! structural `/` is the resource.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod address;
mod constants;
mod error;
#[cfg(kani)]
mod kani_impls;
pub mod prelude;
mod require;
mod resource;
mod scanner;

pub use address::Address;
pub use constants::{ANDROID, AT, DOT, IPHONE, SLASH};
pub use error::{ParseError, ParseErrorKind};
pub use require::Require;
pub use resource::split_resource;
pub use scanner::{scan, Parts};
