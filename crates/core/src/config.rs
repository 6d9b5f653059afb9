//! Configuration types

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::errors::{OracleError, OracleResult};

/// Construction-time configuration for an oracle instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleConfig {
    /// Key whose signature authorizes rate updates
    pub operator: Address,
    /// Key authorized to rotate the operator (and itself)
    pub operator_owner: Address,
    /// Forward clock skew tolerated when validating update timestamps
    pub max_clock_drift_secs: u64,
    /// Capacity of the event fan-out channel
    pub event_buffer: usize,
}

impl OracleConfig {
    pub fn new(operator: Address, operator_owner: Address) -> Self {
        Self {
            operator,
            operator_owner,
            max_clock_drift_secs: 0,
            event_buffer: 1024,
        }
    }

    pub fn with_max_clock_drift(mut self, secs: u64) -> Self {
        self.max_clock_drift_secs = secs;
        self
    }

    /// A null credential is the only fatal misconfiguration: an instance
    /// constructed from an invalid config must never become usable.
    pub fn validate(&self) -> OracleResult<()> {
        if self.operator.is_zero() || self.operator_owner.is_zero() {
            return Err(OracleError::NullCredential);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_non_null_credentials() {
        let config = OracleConfig::new(Address::repeat_byte(1), Address::repeat_byte(2));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_null_credentials() {
        let config = OracleConfig::new(Address::ZERO, Address::repeat_byte(2));
        assert_eq!(config.validate(), Err(OracleError::NullCredential));

        let config = OracleConfig::new(Address::repeat_byte(1), Address::ZERO);
        assert_eq!(config.validate(), Err(OracleError::NullCredential));
    }
}
