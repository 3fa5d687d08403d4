//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use xmpp_address::prelude::*;
//!
//! let addr = Address::parse_with("romeo@montague.lit", Require::Logon).unwrap();
//! ```

pub use crate::{
    // Core types
    Address, Parts, Require,
    // Functions
    scan, split_resource,
    // Errors
    ParseError, ParseErrorKind,
};
