use displaydoc::Display;
use thiserror::Error;

/// Represents errors that can occur in the SDK.
/// Validation failures are raised synchronously at the call that detects
/// them and always propagate to the caller; nothing is retried internally.
#[derive(Debug, Display, Error)]
pub enum Error {
    /// Invalid input: {0}
    InvalidInput(String),
    /// Unsupported unit: {0}
    UnsupportedUnit(String),
    /// Invalid argument: {0}
    InvalidArgument(String),
    /// Failed to decode value: {0}
    DecodeError(String),
    /// Failed to send the RPC request: {0}
    RpcRequestError(String),
}
