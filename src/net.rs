//! `net_*` JSON-RPC method wrappers.
//!
//! Thin bindings that forward calls to the node and validate responses by
//! decoding them into typed values.

use alloy::primitives::U64;

use crate::client::Web3Client;
use crate::errors::Error;

impl Web3Client {
    /// Gets the network identifier the node is attached to (`net_version`).
    /// The node reports it as a decimal string.
    pub async fn net_version(&self) -> Result<String, Error> {
        self.rpc_call::<(), String>("net_version", ()).await
    }

    /// Gets the number of peers connected to the node (`net_peerCount`).
    /// The node reports a hex quantity; it is decoded here.
    pub async fn net_peer_count(&self) -> Result<u64, Error> {
        let count: U64 = self.rpc_call("net_peerCount", ()).await?;
        Ok(count.to::<u64>())
    }

    /// Returns whether the node is listening for network connections
    /// (`net_listening`).
    pub async fn net_listening(&self) -> Result<bool, Error> {
        self.rpc_call("net_listening", ()).await
    }
}
