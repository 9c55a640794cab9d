//! Network identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The chain a resolution runs against, identified by its EIP-155 chain id.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkId(u64);

impl NetworkId {
    /// Ethereum mainnet.
    pub const MAINNET: NetworkId = NetworkId(1);
    /// Goerli testnet (deprecated, kept for old configs).
    pub const GOERLI: NetworkId = NetworkId(5);
    /// Holesky testnet.
    pub const HOLESKY: NetworkId = NetworkId(17_000);
    /// Sepolia testnet.
    pub const SEPOLIA: NetworkId = NetworkId(11_155_111);

    const KNOWN: [(NetworkId, &'static str); 4] = [
        (Self::MAINNET, "mainnet"),
        (Self::GOERLI, "goerli"),
        (Self::HOLESKY, "holesky"),
        (Self::SEPOLIA, "sepolia"),
    ];

    /// Creates an identifier for an arbitrary chain id.
    pub const fn from_chain_id(chain_id: u64) -> Self {
        Self(chain_id)
    }

    /// Returns the EIP-155 chain id.
    pub const fn chain_id(&self) -> u64 {
        self.0
    }

    /// Returns the well-known name of this network, if any.
    pub fn name(&self) -> Option<&'static str> {
        Self::KNOWN
            .iter()
            .find(|(id, _)| id == self)
            .map(|(_, name)| *name)
    }
}

impl Default for NetworkId {
    fn default() -> Self {
        Self::MAINNET
    }
}

impl FromStr for NetworkId {
    type Err = String;

    /// Accepts a known network name (case-insensitive) or a decimal chain id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some((id, _)) = Self::KNOWN
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(s))
        {
            return Ok(*id);
        }

        let digits = s.strip_prefix("chain-").unwrap_or(s);
        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|_| format!("unknown network '{}'", s))
    }
}

impl fmt::Debug for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NetworkId({})", self)
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "chain-{}", self.0),
        }
    }
}
