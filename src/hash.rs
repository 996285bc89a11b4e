//! Keccak-256 hashing with the null-hash sentinel convention.

use alloy::primitives::keccak256 as keccak;

use crate::errors::Error;
use crate::hex::{hex_to_bytes, is_hex_prefixed, to_hex};

/// Keccak-256 digest of empty input, without the `0x` marker.
///
/// Hashing anything that decodes to zero bytes produces this constant; it
/// doubles as an "empty/absent data" marker elsewhere in the Ethereum
/// ecosystem, so [`keccak256`] maps it to `None` instead of returning it.
pub const KECCAK_NULL_HASH: &str =
    "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470";

/// Computes the Keccak-256 hash of the given value.
///
/// A `0x`-prefixed input is treated as a hex string and decoded to bytes
/// first (malformed hex propagates as `DecodeError`); anything else is
/// hashed as raw text. Returns `Ok(None)` when the digest equals
/// [`KECCAK_NULL_HASH`], otherwise `Ok(Some("0x…"))` with 64 lowercase hex
/// digits.
pub fn keccak256(value: &str) -> Result<Option<String>, Error> {
    let digest = if is_hex_prefixed(value) {
        keccak(hex_to_bytes(value)?)
    } else {
        keccak(value.as_bytes())
    };

    let hash = to_hex(digest, false);
    if hash == KECCAK_NULL_HASH {
        Ok(None)
    } else {
        Ok(Some(format!("0x{hash}")))
    }
}
