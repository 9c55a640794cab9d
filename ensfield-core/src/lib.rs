//! # ensfield Core
//!
//! Core types, errors, and traits for resolving ENS names typed into wallet
//! input fields.
//!
//! This crate provides the foundational building blocks used by the other
//! ensfield crates:
//!
//! - **Types**: addresses, namehash nodes, network identifiers, cache keys,
//!   and contract-call descriptors
//! - **Errors**: the resolution error taxonomy and transport failures
//! - **Constants**: protocol sizes, selectors, and defaults
//! - **Traits**: the contract-call capability the resolver talks through
//!
//! ## Example
//!
//! ```rust
//! use ensfield_core::{Address, NetworkId};
//!
//! let addr: Address = "0x00000000000C2E074eC69A0dFb2997BA6C7d2e1e".parse().unwrap();
//! assert_eq!(addr.to_string(), "0x00000000000c2e074ec69a0dfb2997ba6c7d2e1e");
//! assert_eq!(NetworkId::MAINNET.chain_id(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{ResolutionError, Result, TransportError};
pub use traits::*;
pub use types::*;
