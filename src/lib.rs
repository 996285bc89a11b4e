// # web3-sdk
//!
//! A Rust SDK of client-side utilities and RPC bindings for interacting
//! with an Ethereum-like blockchain node.
//!
//! The utility half is a set of stateless, pure functions: hex encoding
//! and validation, Keccak-256 hashing with the null-hash sentinel
//! convention, EIP-55 mixed-case address checksum validation, and
//! arbitrary-precision conversion between denominations such as wei and
//! ether. All of it is synchronous and safe to call concurrently; the only
//! shared state is the immutable denomination table in [`units::UNITS`].
//!
//! The RPC half is a thin [`Web3Client`] over an HTTP JSON-RPC endpoint,
//! built on `alloy`'s provider stack, with typed wrappers for the `net_*`
//! method family.
//!
//! ```no_run
//! use web3_sdk::units::{to_base_unit, to_ether};
//! use web3_sdk::address::is_address;
//!
//! let wei = to_base_unit("1", "ether").unwrap();
//! assert_eq!(wei.to_string(), "1000000000000000000");
//!
//! let (quotient, remainder) = to_ether("1", "kether").unwrap();
//! assert_eq!(quotient.to_string(), "1000");
//! assert_eq!(remainder.to_string(), "0");
//!
//! assert!(is_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"));
//! ```

/// Re-export commonly used types from `alloy`.
pub use alloy::primitives::{U64, U256};
pub use url::Url;

pub use client::Web3Client;
pub use errors::Error;
pub use hash::{KECCAK_NULL_HASH, keccak256};
pub use units::{Amount, Numeric};

/// Module for ABI method-signature helpers.
/// Renders ABI items as canonical `name(type,...)` signatures.
pub mod abi;

/// Module for address validation.
/// Implements the EIP-55 mixed-case checksum algorithm.
pub mod address;

/// Module for JSON-RPC client functionality.
/// Exposes the client used for interacting with a node endpoint.
pub mod client;

/// Module for SDK error types.
pub mod errors;

/// Module for Keccak-256 hashing.
/// Maps the well-known hash of empty input to a "no value" sentinel.
pub mod hash;

/// Module for hex string encoding, decoding, and validation.
pub mod hex;

/// Module for the `net_*` JSON-RPC method wrappers.
pub mod net;

/// Module for denomination conversion.
/// Arbitrary-precision conversions between wei, ether, and friends.
pub mod units;
