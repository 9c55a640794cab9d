//! HTTP JSON-RPC implementation of [`ContractCallClient`].
//!
//! Sends `eth_call` against the endpoint named in each [`ContractCall`] and
//! decodes the first 32-byte return word as an address.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use ensfield_core::constants::{ABI_WORD_SIZE, ETH_ADDRESS_SIZE};
use ensfield_core::error::{ResolutionError, Result, TransportError};
use ensfield_core::traits::ContractCallClient;
use ensfield_core::types::{Address, ContractCall};

use crate::config::ResolverConfig;

/// JSON-RPC response envelope.
#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<String>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// [`ContractCallClient`] backed by `reqwest`.
pub struct JsonRpcClient {
    http_client: reqwest::Client,
    timeout_seconds: u64,
    next_id: AtomicU64,
}

impl JsonRpcClient {
    /// Creates a client using the timeout from `config`.
    pub fn new(config: &ResolverConfig) -> Result<Self> {
        Self::with_timeout(&config.rpc_url, config.timeout())
    }

    /// Creates a client with an explicit request timeout.
    ///
    /// `endpoint` is only used for error reporting; every call carries its own.
    pub fn with_timeout(endpoint: &str, timeout: Duration) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ResolutionError::TransportSetup {
                endpoint: endpoint.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            http_client,
            timeout_seconds: timeout.as_secs(),
            next_id: AtomicU64::new(1),
        })
    }

    fn map_send_error(&self, e: reqwest::Error) -> TransportError {
        if e.is_timeout() {
            TransportError::Timeout(self.timeout_seconds)
        } else {
            TransportError::Http(e.to_string())
        }
    }

    /// Extracts the address from an ABI-encoded return value.
    ///
    /// An address occupies the low 20 bytes of the first 32-byte word; the
    /// high 12 bytes must be zero.
    fn decode_address(hex_data: &str) -> std::result::Result<Address, TransportError> {
        let data = hex_data.strip_prefix("0x").unwrap_or(hex_data);
        let bytes = hex::decode(data).map_err(|e| TransportError::Decode(e.to_string()))?;

        if bytes.len() < ABI_WORD_SIZE {
            return Err(TransportError::Decode(format!(
                "expected at least {} bytes, got {}",
                ABI_WORD_SIZE,
                bytes.len()
            )));
        }

        let (padding, address) = bytes[..ABI_WORD_SIZE].split_at(ABI_WORD_SIZE - ETH_ADDRESS_SIZE);
        if padding.iter().any(|&b| b != 0) {
            return Err(TransportError::Decode("return word is not a left-padded address".into()));
        }

        Address::from_slice(address)
            .ok_or_else(|| TransportError::Decode("malformed address word".into()))
    }
}

#[async_trait]
impl ContractCallClient for JsonRpcClient {
    #[instrument(skip(self, call), fields(contract = %call.contract, node = %call.node))]
    async fn call_address(
        &self,
        call: &ContractCall,
    ) -> std::result::Result<Address, TransportError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        let request = serde_json::json!({
            "jsonrpc": "2.0",
            "method": "eth_call",
            "params": [
                {
                    "to": call.contract.to_hex_string(),
                    "data": format!("0x{}", hex::encode(call.calldata()))
                },
                "latest"
            ],
            "id": id
        });

        let response = self
            .http_client
            .post(call.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "RPC endpoint returned an error status");
            return Err(TransportError::Http(format!("status {}", status)));
        }

        let body: RpcResponse = response
            .json()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))?;

        if let Some(error) = body.error {
            warn!(code = error.code, message = %error.message, "eth_call error");
            return Err(TransportError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        let result = body
            .result
            .ok_or_else(|| TransportError::Decode("response has neither result nor error".into()))?;

        let address = Self::decode_address(&result)?;
        debug!(%address, "eth_call returned");
        Ok(address)
    }
}
