//! Order-independent pair identity
//!
//! Storage is keyed by a fingerprint of the canonically ordered pair, so
//! `(A, B)` and `(B, A)` resolve to the same entry regardless of how the
//! caller phrases the query.

use alloy_primitives::{keccak256, Address, B256};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical ordering for a pair: the smaller address comes first.
///
/// The returned flag records whether the caller's order differed from the
/// canonical one.
pub fn canonical_pair(base: Address, quote: Address) -> (Address, Address, bool) {
    if base <= quote {
        (base, quote, false)
    } else {
        (quote, base, true)
    }
}

/// Order-independent fingerprint of an asset pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairId(B256);

impl PairId {
    /// keccak256 over the canonically ordered 40-byte pair encoding.
    ///
    /// Deterministic across calls and processes: `of(a, b) == of(b, a)`
    /// for every pair.
    pub fn of(base: Address, quote: Address) -> Self {
        let (first, second, _) = canonical_pair(base, quote);
        let mut buf = [0u8; 40];
        buf[..20].copy_from_slice(first.as_slice());
        buf[20..].copy_from_slice(second.as_slice());
        Self(keccak256(buf))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0 .0
    }
}

impl fmt::Display for PairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
