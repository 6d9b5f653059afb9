//! Error types

use alloy_primitives::Address;
use thiserror::Error;

/// Oracle error taxonomy
///
/// Every failure is caller-visible and non-retriable: a rejected request
/// leaves no partial state behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    #[error("base and quote refer to the same asset")]
    InvalidOrdering,

    #[error("timestamp {submitted} is stale or in the future (newest accepted: {newest})")]
    StaleOrFutureTimestamp { submitted: u64, newest: u64 },

    #[error("rate must be strictly positive")]
    ZeroRate,

    #[error("signature is malformed or was not produced by the operator")]
    BadSignature,

    #[error("caller {caller} is not permitted to perform this action")]
    Unauthorized { caller: Address },

    #[error("operator credentials must be non-null")]
    NullCredential,
}

/// Result type alias
pub type OracleResult<T> = Result<T, OracleError>;
