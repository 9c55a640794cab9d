//! Common traits for ensfield.
//!
//! The resolver never talks to a node directly; it goes through
//! [`ContractCallClient`], so transports can be swapped and mocked.

use async_trait::async_trait;

use crate::error::TransportError;
use crate::types::{Address, ContractCall};

// ═══════════════════════════════════════════════════════════════════════════════
// CONTRACT CALL TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Capability to run a read-only contract method that returns an address.
///
/// Implementations might use:
/// - HTTP JSON-RPC `eth_call` (see `ensfield_resolver::JsonRpcClient`)
/// - A WebSocket provider
/// - An in-memory fake (for testing)
///
/// The first return value is decoded at this boundary, so callers receive a
/// typed [`Address`] or a [`TransportError`], never a loosely-typed map.
#[async_trait]
pub trait ContractCallClient: Send + Sync {
    /// Runs `call` and returns output index 0 decoded as an address.
    async fn call_address(&self, call: &ContractCall) -> Result<Address, TransportError>;
}
