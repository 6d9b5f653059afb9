//! Update authentication
//!
//! Every mutating call is gated behind proof that the operator approved
//! exactly the submitted `(base, quote, rate, timestamp)` tuple: the
//! digest is reconstructed here and the detached signature must recover
//! to the registered operator key.

use alloy_primitives::{eip191_hash_message, keccak256, Address, Signature, B256};

/// Digest layout version. Bumped whenever the byte layout changes, so
/// signatures never validate across protocol generations.
pub const PROTOCOL_VERSION: u8 = 1;

/// Deterministic digest binding every field of a proposed update.
///
/// Layout: version tag, `base`, `quote`, big-endian `rate` (16 bytes),
/// big-endian `timestamp` (8 bytes), concatenated with no delimiters.
pub fn update_digest(base: Address, quote: Address, rate: u128, timestamp: u64) -> B256 {
    let mut buf = [0u8; 65];
    buf[0] = PROTOCOL_VERSION;
    buf[1..21].copy_from_slice(base.as_slice());
    buf[21..41].copy_from_slice(quote.as_slice());
    buf[41..57].copy_from_slice(&rate.to_be_bytes());
    buf[57..65].copy_from_slice(&timestamp.to_be_bytes());
    keccak256(buf)
}

/// Pluggable signer-recovery capability.
///
/// Implementations resolve the identity that signed `digest`, or `None`
/// when the signature is structurally invalid (wrong length, bad recovery
/// id, point not on curve). Recovery must never panic on malformed input.
pub trait SignerRecovery: Send + Sync {
    fn recover_signer(&self, digest: &B256, signature: &[u8]) -> Option<Address>;
}

/// secp256k1 recovery over the EIP-191 personal-message wrap of the
/// digest, matching the standard "sign arbitrary bytes" convention.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1Recovery;

impl SignerRecovery for Secp256k1Recovery {
    fn recover_signer(&self, digest: &B256, signature: &[u8]) -> Option<Address> {
        let signature = Signature::try_from(signature).ok()?;
        let message_hash = eip191_hash_message(digest);
        signature.recover_address_from_prehash(&message_hash).ok()
    }
}
