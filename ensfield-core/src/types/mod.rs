//! Domain types for ensfield.
//!
//! - [`Address`]: 20-byte Ethereum address, the resolution result
//! - [`Node`]: EIP-137 namehash of a name
//! - [`NetworkId`]: chain a resolution runs against
//! - [`CacheKey`]: `(Node, NetworkId)` identity of a memoized result
//! - [`ContractCall`]: descriptor for a read-only registry call

mod address;
mod call;
mod network;
mod node;

pub use address::*;
pub use call::*;
pub use network::*;
pub use node::*;
