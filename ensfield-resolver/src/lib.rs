//! # ensfield Resolver
//!
//! Turns what a user types into a wallet's address field into an address.
//!
//! - [`namehash`]: EIP-137 namehash over dot-separated labels
//! - [`ResolutionCoordinator`]: validation, cache lookup, debouncing and the
//!   registry `owner(bytes32)` call
//! - [`JsonRpcClient`]: a [`ContractCallClient`] over HTTP JSON-RPC `eth_call`
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use ensfield_resolver::{JsonRpcClient, ResolutionCache, ResolutionCoordinator, ResolverConfig};
//!
//! let config = Arc::new(ResolverConfig::from_env()?);
//! let client = Arc::new(JsonRpcClient::new(&config)?);
//! let cache = Arc::new(ResolutionCache::new());
//!
//! let coordinator = ResolutionCoordinator::new(config, cache, client);
//! let owner = coordinator.resolve("vitalik.eth").await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod config;
mod coordinator;
pub mod namehash;
mod rpc;

pub use config::ResolverConfig;
pub use coordinator::{Resolution, ResolutionCoordinator, ResolutionSource};
pub use namehash::{labelhash, namehash};
pub use rpc::JsonRpcClient;

pub use ensfield_cache::{CacheStats, ResolutionCache};
pub use ensfield_core::{
    Address, CacheKey, ContractCall, ContractCallClient, NetworkId, Node, ResolutionError,
    TransportError,
};
