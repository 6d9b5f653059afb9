//! Observable oracle events for off-chain indexers

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// Emitted after each successful state transition, carrying the full new
/// state. Delivery is best-effort; core correctness never depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OracleEvent {
    /// A rate update passed the full validation chain and was committed
    RateUpdated {
        base: Address,
        quote: Address,
        rate: u128,
        timestamp: u64,
    },
    /// The operator key was rotated
    OperatorChanged { previous: Address, current: Address },
    /// The operator-owner key was rotated
    OperatorOwnerChanged { previous: Address, current: Address },
}
