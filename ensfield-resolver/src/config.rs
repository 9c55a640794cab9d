//! Resolver configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use ensfield_core::constants::{
    DEFAULT_DEBOUNCE_MILLIS, DEFAULT_ETH_RPC_URL, DEFAULT_RPC_TIMEOUT_SECS, ENS_REGISTRY_ADDRESS,
};
use ensfield_core::error::{ResolutionError, Result};
use ensfield_core::types::{Address, NetworkId};

/// Configuration owned by a [`ResolutionCoordinator`](crate::ResolutionCoordinator).
///
/// Immutable once handed to a coordinator. `rpc_url` is validated lazily, when
/// a registry call is actually needed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Ethereum RPC URL
    pub rpc_url: String,
    /// Network resolutions run against (part of the cache key)
    pub network: NetworkId,
    /// ENS registry contract address
    pub registry_address: Address,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Default debounce delay in milliseconds
    #[serde(default = "default_debounce_millis")]
    pub debounce_millis: u64,
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_RPC_TIMEOUT_SECS
}

fn default_debounce_millis() -> u64 {
    DEFAULT_DEBOUNCE_MILLIS
}

fn default_registry() -> Address {
    // Compile-time constant; parse cannot fail.
    Address::parse_literal(ENS_REGISTRY_ADDRESS).unwrap_or(Address::ZERO)
}

fn invalid_setting(rpc_url: &str, key: &str, reason: impl std::fmt::Display) -> ResolutionError {
    ResolutionError::TransportSetup {
        endpoint: rpc_url.to_string(),
        reason: format!("invalid {}: {}", key, reason),
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_ETH_RPC_URL.into(),
            network: NetworkId::MAINNET,
            registry_address: default_registry(),
            timeout_seconds: DEFAULT_RPC_TIMEOUT_SECS,
            debounce_millis: DEFAULT_DEBOUNCE_MILLIS,
        }
    }
}

impl ResolverConfig {
    /// Creates a mainnet configuration with the given RPC URL.
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            ..Default::default()
        }
    }

    /// Loads configuration from the environment (and `.env`, if present).
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `ETH_RPC_URL` | public mainnet node |
    /// | `ENS_NETWORK` | `mainnet` |
    /// | `ENS_REGISTRY_ADDRESS` | canonical ENS registry |
    /// | `ENS_RPC_TIMEOUT_SECS` | 30 |
    /// | `ENS_DEBOUNCE_MS` | 500 |
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let rpc_url = lookup("ETH_RPC_URL").unwrap_or(defaults.rpc_url);

        let network = match lookup("ENS_NETWORK") {
            Some(raw) => raw
                .parse::<NetworkId>()
                .map_err(|reason| ResolutionError::TransportSetup {
                    endpoint: rpc_url.clone(),
                    reason,
                })?,
            None => defaults.network,
        };

        let registry_address = match lookup("ENS_REGISTRY_ADDRESS") {
            Some(raw) => Address::parse_literal(raw.trim()).map_err(|e| {
                ResolutionError::ContractCallSetup {
                    contract: raw.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => defaults.registry_address,
        };

        let timeout_seconds = match lookup("ENS_RPC_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| invalid_setting(&rpc_url, "ENS_RPC_TIMEOUT_SECS", e))?;
                if secs == 0 {
                    let reason = "must be at least 1";
                    return Err(invalid_setting(&rpc_url, "ENS_RPC_TIMEOUT_SECS", reason));
                }
                secs
            }
            None => defaults.timeout_seconds,
        };

        let debounce_millis = match lookup("ENS_DEBOUNCE_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| invalid_setting(&rpc_url, "ENS_DEBOUNCE_MS", e))?,
            None => defaults.debounce_millis,
        };

        Ok(Self {
            rpc_url,
            network,
            registry_address,
            timeout_seconds,
            debounce_millis,
        })
    }

    /// Sets the network.
    pub fn with_network(mut self, network: NetworkId) -> Self {
        self.network = network;
        self
    }

    /// Sets the registry address.
    pub fn with_registry(mut self, registry_address: Address) -> Self {
        self.registry_address = registry_address;
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_seconds = timeout.as_secs().max(1);
        self
    }

    /// Sets the default debounce delay.
    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.debounce_millis = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Returns the default debounce delay.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_millis)
    }
}
