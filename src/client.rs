//! JSON-RPC client for an Ethereum-like node.

use std::borrow::Cow;

use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::json_rpc::{RpcError, RpcRecv, RpcSend};
use url::Url;

use crate::errors::Error;

/// A thin client over an HTTP JSON-RPC endpoint of an Ethereum-like node.
/// Provides a generic call primitive plus the `net_*` method wrappers in
/// [`crate::net`].
#[derive(Clone)]
pub struct Web3Client {
    /// The underlying provider for making RPC calls.
    pub(crate) provider: DynProvider,
    /// The URL of the node endpoint.
    pub(crate) rpc_url: Url,
}

impl Web3Client {
    /// Creates a new client for the given endpoint.
    pub fn new(rpc_url: Url) -> Self {
        let provider = ProviderBuilder::new().connect_http(rpc_url.clone()).erased();
        Self { provider, rpc_url }
    }

    /// Gets the URL of the node endpoint.
    pub fn rpc_url(&self) -> &Url {
        &self.rpc_url
    }

    /// Gets the underlying RPC client (provider) used for node interactions.
    pub fn get_rpc_client(&self) -> DynProvider {
        self.provider.clone()
    }

    /// Makes a JSON-RPC call to the node endpoint.
    /// Handles serialization, deserialization, and error mapping for RPC
    /// requests; transport and node errors surface as `RpcRequestError`.
    pub async fn rpc_call<S: RpcSend, R: RpcRecv>(
        &self,
        method: impl Into<Cow<'static, str>>,
        params: S,
    ) -> Result<R, Error> {
        let method = method.into();
        log::debug!("RPC Call - Method: {method}, Params: {params:?}");
        self.provider
            .client()
            .request(method.clone(), params)
            .await
            .inspect(|res| log::debug!("RPC Response: {res:?}"))
            .map_err(|e| match e {
                RpcError::ErrorResp(err) => {
                    Error::RpcRequestError(format!("error response from RPC service: {err}"))
                }
                RpcError::SerError(err) => {
                    Error::RpcRequestError(format!("serialization error: {err}"))
                }
                RpcError::DeserError { err, text } => {
                    log::debug!("Deserialization error: {err}, response text: {text}");
                    Error::RpcRequestError(format!("deserialization error: {err}"))
                }
                _ => Error::RpcRequestError(e.to_string()),
            })
    }

    /// Gets the chain ID from the node.
    pub async fn chain_id(&self) -> Result<u64, Error> {
        self.provider
            .get_chain_id()
            .await
            .map_err(|e| Error::RpcRequestError(format!("failed to get chain ID: {e}")))
    }
}
