//! # STARK-Curve Primitives
//!
//! Off-chain ECDSA verification over the STARK curve, and the
//! `starknet_keccak` entrypoint-selector derivation.
//!
//! Everything here is a pure function of its inputs.

use sha3::{Digest, Keccak256};
use starknet_crypto::Felt;

/// Verify a signature against a raw public key, without touching the chain.
///
/// `signature` must be exactly two hex words `[r, s]`. Any arity mismatch,
/// unparseable hex scalar, or curve-level rejection collapses to `false`;
/// this function never panics and never returns an error.
pub fn verify_local(public_key: &str, message_hash: &str, signature: &[String]) -> bool {
    if signature.len() != 2 {
        return false;
    }

    let Ok(r) = Felt::from_hex(&signature[0]) else {
        return false;
    };
    let Ok(s) = Felt::from_hex(&signature[1]) else {
        return false;
    };
    let Ok(hash) = Felt::from_hex(message_hash) else {
        return false;
    };
    let Ok(key) = Felt::from_hex(public_key) else {
        return false;
    };

    starknet_crypto::verify(&key, &hash, &r, &s).unwrap_or(false)
}

/// Starknet entrypoint selector: `keccak256(name)` truncated to 250 bits.
pub fn selector_from_name(name: &str) -> Felt {
    let mut hash: [u8; 32] = Keccak256::digest(name.as_bytes()).into();
    // Zero the top 6 bits so the value fits the field.
    hash[0] &= 0x03;
    Felt::from_bytes_be(&hash)
}
