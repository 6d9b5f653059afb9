//! Oracle instance
//!
//! Owns the feed and the operator credentials behind a single coarse
//! lock: every mutation is an atomic validate-then-commit step, and reads
//! are snapshot-consistent without blocking each other.

use alloy_primitives::Address;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::broadcast;
use tracing::{info, warn};

use oracle_core::{canonical_pair, orient_rate, OracleConfig, OracleError, OracleResult, Quote};

use crate::auth::{update_digest, Secp256k1Recovery, SignerRecovery};
use crate::events::OracleEvent;
use crate::state::Feed;

/// Mutable state guarded by the coarse lock
struct Inner {
    feed: Feed,
    operator: Address,
    operator_owner: Address,
}

/// A deployed oracle instance
pub struct Oracle {
    inner: RwLock<Inner>,
    recovery: Box<dyn SignerRecovery>,
    events: broadcast::Sender<OracleEvent>,
    max_clock_drift_secs: u64,
    accepted_updates: AtomicU64,
}

impl Oracle {
    /// Construct with the default secp256k1 recovery backend
    pub fn new(config: OracleConfig) -> OracleResult<Self> {
        Self::with_recovery(config, Box::new(Secp256k1Recovery))
    }

    /// Construct with an explicit recovery backend.
    ///
    /// Fails with `NullCredential` when either initial credential is the
    /// zero address; a misconfigured instance never becomes usable.
    pub fn with_recovery(
        config: OracleConfig,
        recovery: Box<dyn SignerRecovery>,
    ) -> OracleResult<Self> {
        config.validate()?;
        let (events, _) = broadcast::channel(config.event_buffer);

        Ok(Self {
            inner: RwLock::new(Inner {
                feed: Feed::new(),
                operator: config.operator,
                operator_owner: config.operator_owner,
            }),
            recovery,
            events,
            max_clock_drift_secs: config.max_clock_drift_secs,
            accepted_updates: AtomicU64::new(0),
        })
    }

    /// Subscribe to the event stream
    pub fn subscribe(&self) -> broadcast::Receiver<OracleEvent> {
        self.events.subscribe()
    }

    /// Latest quote oriented to the caller's order; `(0, 0)` means unset.
    /// Never fails and never blocks other readers.
    pub fn get(&self, base: Address, quote: Address) -> Quote {
        self.inner.read().feed.get(base, quote)
    }

    /// Key currently authorized to sign rate updates
    pub fn operator(&self) -> Address {
        self.inner.read().operator
    }

    /// Key currently authorized to rotate the operator
    pub fn operator_owner(&self) -> Address {
        self.inner.read().operator_owner
    }

    /// Apply an operator-signed rate update against the process clock
    pub fn update(
        &self,
        base: Address,
        quote: Address,
        rate: u128,
        timestamp: u64,
        signature: &[u8],
    ) -> OracleResult<()> {
        self.update_at(base, quote, rate, timestamp, signature, unix_now())
    }

    /// Apply an operator-signed rate update against an explicit clock
    /// reading.
    ///
    /// Validation order runs the cheap structural checks before the
    /// signature recovery, so malformed requests fail without paying the
    /// recovery cost.
    pub fn update_at(
        &self,
        base: Address,
        quote: Address,
        rate: u128,
        timestamp: u64,
        signature: &[u8],
        now: u64,
    ) -> OracleResult<()> {
        let mut inner = self.inner.write();

        if base == quote {
            warn!(%base, "rejected update: base equals quote");
            return Err(OracleError::InvalidOrdering);
        }

        let newest = inner.feed.newest_timestamp(base, quote);
        if timestamp <= newest || timestamp > now + self.max_clock_drift_secs {
            warn!(
                %base,
                %quote,
                timestamp,
                newest,
                now,
                "rejected update: stale or future timestamp"
            );
            return Err(OracleError::StaleOrFutureTimestamp {
                submitted: timestamp,
                newest,
            });
        }

        if rate == 0 {
            warn!(%base, %quote, "rejected update: zero rate");
            return Err(OracleError::ZeroRate);
        }

        // A rate whose canonical-order inverse truncates to zero would
        // store the unset sentinel; reject it as a zero rate.
        let (_, _, swapped) = canonical_pair(base, quote);
        if orient_rate(swapped, rate) == 0 {
            warn!(%base, %quote, rate, "rejected update: rate inverts to zero");
            return Err(OracleError::ZeroRate);
        }

        let digest = update_digest(base, quote, rate, timestamp);
        if self.recovery.recover_signer(&digest, signature) != Some(inner.operator) {
            warn!(%base, %quote, timestamp, "rejected update: bad signature");
            return Err(OracleError::BadSignature);
        }

        inner.feed.put(base, quote, rate, timestamp);
        drop(inner);

        self.accepted_updates.fetch_add(1, Ordering::Relaxed);
        info!(%base, %quote, rate, timestamp, "rate updated");
        let _ = self.events.send(OracleEvent::RateUpdated {
            base,
            quote,
            rate,
            timestamp,
        });

        Ok(())
    }

    /// Rotate the operator key. Permitted to the current operator or the
    /// operator owner.
    pub fn set_operator(&self, caller: Address, new_operator: Address) -> OracleResult<()> {
        let mut inner = self.inner.write();

        if caller != inner.operator && caller != inner.operator_owner {
            warn!(%caller, "rejected operator rotation: unauthorized");
            return Err(OracleError::Unauthorized { caller });
        }
        if new_operator.is_zero() {
            return Err(OracleError::NullCredential);
        }

        let previous = inner.operator;
        inner.operator = new_operator;
        drop(inner);

        info!(%previous, current = %new_operator, "operator rotated");
        let _ = self.events.send(OracleEvent::OperatorChanged {
            previous,
            current: new_operator,
        });

        Ok(())
    }

    /// Rotate the operator-owner key. Permitted only to the current
    /// operator owner.
    pub fn set_operator_owner(&self, caller: Address, new_owner: Address) -> OracleResult<()> {
        let mut inner = self.inner.write();

        if caller != inner.operator_owner {
            warn!(%caller, "rejected operator-owner rotation: unauthorized");
            return Err(OracleError::Unauthorized { caller });
        }
        if new_owner.is_zero() {
            return Err(OracleError::NullCredential);
        }

        let previous = inner.operator_owner;
        inner.operator_owner = new_owner;
        drop(inner);

        info!(%previous, current = %new_owner, "operator owner rotated");
        let _ = self.events.send(OracleEvent::OperatorOwnerChanged {
            previous,
            current: new_owner,
        });

        Ok(())
    }

    /// Point-in-time counters
    pub fn stats(&self) -> OracleStats {
        OracleStats {
            tracked_pairs: self.inner.read().feed.len(),
            accepted_updates: self.accepted_updates.load(Ordering::Relaxed),
        }
    }
}

/// Statistics about an oracle instance
#[derive(Debug, Clone, Copy)]
pub struct OracleStats {
    pub tracked_pairs: usize,
    pub accepted_updates: u64,
}

fn unix_now() -> u64 {
    chrono::Utc::now().timestamp().max(0) as u64
}
