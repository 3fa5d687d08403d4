//! Kani Arbitrary implementations and proof harnesses for property verification.
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use std::cmp::Ordering;

use crate::{split_resource, Address, Require};

/// Component characters: a few letters, hex digits and a dot
const COMPONENT_CHARS: &[u8] = b"aznP09fF.";

fn arbitrary_component_char() -> char {
    let idx: usize = kani::any();
    let idx = idx % COMPONENT_CHARS.len();
    COMPONENT_CHARS[idx] as char
}

/// Generate a 1-4 char component without delimiters
fn arbitrary_component() -> String {
    let len: usize = kani::any();
    let len = 1 + (len % 4);
    (0..len).map(|_| arbitrary_component_char()).collect()
}

impl kani::Arbitrary for Require {
    fn any() -> Self {
        let idx: u8 = kani::any();
        match idx % 3 {
            0 => Require::Identifier,
            1 => Require::Logon,
            _ => Require::Full,
        }
    }
}

impl kani::Arbitrary for Address {
    fn any() -> Self {
        let level: Require = kani::any();
        let mut input = arbitrary_component();
        if level >= Require::Logon {
            input.push('@');
            input.push_str(&arbitrary_component());
        }
        if level == Require::Full {
            input.push('/');
            input.push_str(&arbitrary_component());
        }

        Address::parse_with(&input, level).expect("valid address by construction")
    }
}

/// Proof: the projection re-parses to the same projection and level
#[kani::proof]
#[kani::unwind(14)]
fn proof_projection_roundtrip() {
    let addr: Address = kani::any();
    let reparsed = Address::parse(addr.as_str()).expect("projection should parse");
    assert_eq!(reparsed.as_str(), addr.as_str());
    assert_eq!(reparsed.level(), addr.level());
}

/// Proof: kind and session reassemble the resource
#[kani::proof]
#[kani::unwind(6)]
fn proof_split_reassembles() {
    let resource = arbitrary_component();
    if let Some((kind, session)) = split_resource(&resource) {
        assert!(resource.starts_with(kind));
        assert!(resource.ends_with(session));
        assert!(kind.len() + session.len() <= resource.len());
    }
}

/// Proof: equality is symmetric
#[kani::proof]
#[kani::unwind(14)]
fn proof_eq_symmetric() {
    let a: Address = kani::any();
    let b: Address = kani::any();
    assert_eq!(a == b, b == a);
}

/// Proof: compare is antisymmetric
#[kani::proof]
#[kani::unwind(14)]
fn proof_compare_antisymmetric() {
    let a: Address = kani::any();
    let b: Address = kani::any();
    assert_eq!(a.compare(&b), b.compare(&a).reverse());
    if a.compare(&b) == Ordering::Equal {
        assert_eq!(b.compare(&a), Ordering::Equal);
    }
}
