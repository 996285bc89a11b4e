//! Hex string encoding and validation helpers.
//!
//! All outputs are lowercase; the `0x` marker is only ever added when
//! explicitly requested and only a single leading occurrence is ever
//! stripped on input.

use crate::errors::Error;

/// Encodes bytes as a lowercase hex string, two characters per byte.
/// Prepends the `0x` marker when `prefixed` is true.
pub fn to_hex<T: AsRef<[u8]>>(value: T, prefixed: bool) -> String {
    let encoded = hex::encode(value);
    if prefixed {
        format!("0x{encoded}")
    } else {
        encoded
    }
}

/// Decodes a hex string (with or without a leading `0x`) into bytes.
/// Odd-length input and non-hex digits surface as `DecodeError` from the
/// underlying decode primitive; they are not validated up front.
pub fn hex_to_bytes(value: &str) -> Result<Vec<u8>, Error> {
    hex::decode(strip_hex_prefix(value)).map_err(|e| Error::DecodeError(e.to_string()))
}

/// Returns true iff the string starts with the exact lowercase `0x` marker.
pub fn is_hex_prefixed(value: &str) -> bool {
    value.starts_with("0x")
}

/// Removes at most one leading `0x` marker; other input passes through
/// unchanged. Like [`is_hex_prefixed`], only the lowercase marker counts.
pub fn strip_hex_prefix(value: &str) -> &str {
    value.strip_prefix("0x").unwrap_or(value)
}

/// Returns true iff the value is an optional `0x` marker followed by zero
/// or more lowercase hex digits.
///
/// Uppercase digits are rejected here even though [`crate::address::is_address`]
/// accepts them; that asymmetry is long-standing observable behavior and is
/// kept as is.
pub fn is_hex(value: &str) -> bool {
    strip_hex_prefix(value)
        .bytes()
        .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
