//! Error types for ensfield.
//!
//! Every resolution failure surfaces through [`ResolutionError`]; nothing is
//! retried or suppressed. Transport-level causes are kept as a typed
//! [`TransportError`] source so callers can inspect them.

use thiserror::Error;

use crate::types::Address;

/// Result type alias using `ResolutionError`.
pub type Result<T> = std::result::Result<T, ResolutionError>;

/// Error type for all resolution operations.
#[derive(Debug, Error)]
pub enum ResolutionError {
    // ═══════════════════════════════════════════════════════════════════════════
    // INPUT ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Input is neither an address literal nor a dotted name.
    #[error("Invalid ENS name '{input}': expected an address or a name containing '.'")]
    InvalidName { input: String },

    // ═══════════════════════════════════════════════════════════════════════════
    // SETUP ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// RPC endpoint or HTTP provider could not be constructed.
    #[error("Transport setup failed for endpoint '{endpoint}': {reason}")]
    TransportSetup { endpoint: String, reason: String },

    /// The contract-call descriptor could not be constructed.
    #[error("Contract call setup failed for {contract}: {reason}")]
    ContractCallSetup { contract: String, reason: String },

    // ═══════════════════════════════════════════════════════════════════════════
    // RESOLUTION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// The registry has no owner for this name (null address).
    #[error("ENS name '{name}' is not resolved (owner is the null address)")]
    UnresolvedName { name: String },

    /// The contract call itself failed.
    #[error("owner() call to {contract} for '{name}' failed: {source}")]
    ResolutionFailed {
        name: String,
        contract: Address,
        #[source]
        source: TransportError,
    },
}

impl ResolutionError {
    /// Returns true if calling again may succeed without changing the input.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ResolutionError::ResolutionFailed { source, .. } if source.is_transient()
        )
    }

    /// Returns true if the error is caused by what the user typed.
    pub fn is_input_error(&self) -> bool {
        matches!(self, ResolutionError::InvalidName { .. })
    }
}

/// Failure reported by a [`ContractCallClient`](crate::traits::ContractCallClient).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// HTTP request failed or returned a non-success status.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The node answered with a JSON-RPC error object.
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The response could not be decoded into the expected value.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The request did not complete in time.
    #[error("Request timed out after {0}s")]
    Timeout(u64),
}

impl TransportError {
    /// Returns true for failures that usually go away on their own.
    pub fn is_transient(&self) -> bool {
        matches!(self, TransportError::Http(_) | TransportError::Timeout(_))
    }
}
