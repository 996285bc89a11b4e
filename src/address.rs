//! Ethereum address validation and EIP-55 checksum handling.
//!
//! Addresses are handled at the string level: 40 hex characters with an
//! optional `0x` marker, where mixed letter casing encodes a
//! hash-derived checksum per character.

use crate::errors::Error;
use crate::hash::keccak256;
use crate::hex::strip_hex_prefix;

/// Returns true iff the value is a valid address.
///
/// The marker may be `0x` or `0X` and the remainder must be exactly 40 hex
/// characters. An all-lowercase or all-uppercase body is accepted without a
/// checksum; mixed case must pass [`is_address_checksum`].
pub fn is_address(value: &str) -> bool {
    let body = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    if body.len() != 40 || !body.bytes().all(|b| b.is_ascii_hexdigit()) {
        return false;
    }
    let has_upper = body.bytes().any(|b| b.is_ascii_uppercase());
    let has_lower = body.bytes().any(|b| b.is_ascii_lowercase());
    if !has_upper || !has_lower {
        return true;
    }
    is_address_checksum(value)
}

/// Validates the EIP-55 mixed-case checksum of an address.
///
/// The address is lowercased and hashed as raw text; for each of the 40
/// positions a hash nibble above 7 requires an uppercase character and a
/// nibble of 7 or below requires lowercase. Digits satisfy both. Note that
/// only a lowercase `0x` marker is stripped before hashing, matching
/// [`strip_hex_prefix`].
pub fn is_address_checksum(value: &str) -> bool {
    let body = strip_hex_prefix(value);
    let hash = match keccak256(&body.to_lowercase()) {
        Ok(Some(hash)) => hash,
        _ => return false,
    };

    let chars: Vec<char> = body.chars().collect();
    let nibbles: Vec<char> = strip_hex_prefix(&hash).chars().collect();
    if chars.len() < 40 {
        return false;
    }
    for i in 0..40 {
        let nibble = nibbles[i].to_digit(16).unwrap_or(0);
        let ch = chars[i];
        if (nibble > 7 && ch.to_ascii_uppercase() != ch)
            || (nibble <= 7 && ch.to_ascii_lowercase() != ch)
        {
            return false;
        }
    }
    true
}

/// Encodes an address into its EIP-55 checksummed form, `0x`-prefixed.
/// Fails with `InvalidInput` if the value is not a valid address.
pub fn to_checksum_address(value: &str) -> Result<String, Error> {
    if !is_address(value) {
        return Err(Error::InvalidInput(format!(
            "'{value}' is not a valid address"
        )));
    }
    let body = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
        .to_lowercase();
    let hash = keccak256(&body)?.ok_or_else(|| {
        Error::InvalidInput(format!("'{value}' hashes to the null-hash sentinel"))
    })?;

    let checksummed: String = body
        .chars()
        .zip(strip_hex_prefix(&hash).chars())
        .map(|(ch, nibble)| {
            if nibble.to_digit(16).unwrap_or(0) > 7 {
                ch.to_ascii_uppercase()
            } else {
                ch
            }
        })
        .collect();
    Ok(format!("0x{checksummed}"))
}
