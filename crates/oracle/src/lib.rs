//! Signed price-feed oracle
//!
//! Features:
//! - Canonical-pair storage with on-the-fly rate inversion
//! - Operator-signed update authentication (EIP-191 + secp256k1 recovery)
//! - Strict per-pair monotonic-time enforcement
//! - Broadcast event stream for off-chain indexers

pub mod auth;
pub mod events;
pub mod oracle;
pub mod state;

pub use auth::{update_digest, Secp256k1Recovery, SignerRecovery};
pub use events::OracleEvent;
pub use oracle::{Oracle, OracleStats};
pub use state::Feed;
