//! Canonical feed storage
//!
//! Rates are stored oriented to the canonical pair order, so reads in
//! either direction are a cheap orientation rather than recomputation.

use alloy_primitives::Address;
use std::collections::HashMap;

use oracle_core::{canonical_pair, orient_rate, PairId, Quote};

/// Mapping from pair identity to the latest quote.
///
/// Entries are created on the first update for a pair and overwritten,
/// never deleted, by every later one. Locking is the owner's concern; the
/// oracle instance wraps the feed in its coarse lock.
#[derive(Debug, Default)]
pub struct Feed {
    entries: HashMap<PairId, Quote>,
}

impl Feed {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Latest quote oriented to the caller's order.
    ///
    /// An absent entry yields `Quote::UNSET` rather than an error; "never
    /// recorded" is a valid query result.
    pub fn get(&self, base: Address, quote: Address) -> Quote {
        let (_, _, swapped) = canonical_pair(base, quote);
        match self.entries.get(&PairId::of(base, quote)) {
            Some(entry) => Quote::new(orient_rate(swapped, entry.rate), entry.observed_at),
            None => Quote::UNSET,
        }
    }

    /// Stored observation time for the pair, 0 when unset
    pub fn newest_timestamp(&self, base: Address, quote: Address) -> u64 {
        self.entries
            .get(&PairId::of(base, quote))
            .map(|entry| entry.observed_at)
            .unwrap_or(0)
    }

    /// Overwrite the entry for the pair, orienting the rate to canonical
    /// order first. Callers must guarantee the rate is non-zero in both
    /// orientations.
    pub fn put(&mut self, base: Address, quote: Address, rate: u128, timestamp: u64) {
        let (_, _, swapped) = canonical_pair(base, quote);
        let entry = Quote::new(orient_rate(swapped, rate), timestamp);
        self.entries.insert(PairId::of(base, quote), entry);
    }

    /// Number of pairs ever recorded
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
