//! Namehash nodes and cache keys.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::NetworkId;
use crate::constants::NODE_SIZE;

/// A 32-byte EIP-137 namehash identifying a name in the ENS hierarchy.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Node(#[serde(with = "hex")] [u8; NODE_SIZE]);

impl Node {
    /// The root node (namehash of the empty name).
    pub const ZERO: Node = Node([0u8; NODE_SIZE]);

    /// Creates from a fixed-size array.
    pub const fn from_array(bytes: [u8; NODE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8; NODE_SIZE] {
        &self.0
    }

    /// Returns the `0x`-prefixed hex string.
    pub fn to_hex_string(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Returns true for the root node.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }
}

impl From<[u8; NODE_SIZE]> for Node {
    fn from(bytes: [u8; NODE_SIZE]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.to_hex_string())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

/// Identity of a memoized resolution: the same node resolves independently
/// on every network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    /// Namehash of the normalized name
    pub node: Node,
    /// Network the resolution happened on
    pub network: NetworkId,
}

impl CacheKey {
    /// Creates a new cache key.
    pub const fn new(node: Node, network: NetworkId) -> Self {
        Self { node, network }
    }
}
