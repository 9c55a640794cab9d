//! Protocol constants for ensfield.
//!
//! Sizes follow the Ethereum yellow paper and EIP-137; the registry address is
//! the canonical ENS registry deployment shared by mainnet and the public testnets.

// ═══════════════════════════════════════════════════════════════════════════════
// ETHEREUM SIZES
// ═══════════════════════════════════════════════════════════════════════════════

/// Size of an Ethereum address in bytes (20 bytes = 160 bits).
pub const ETH_ADDRESS_SIZE: usize = 20;

/// Size of a keccak256 hash output.
pub const KECCAK256_SIZE: usize = 32;

/// Size of an EIP-137 namehash node.
pub const NODE_SIZE: usize = KECCAK256_SIZE;

/// Size of a Solidity function selector.
pub const SELECTOR_SIZE: usize = 4;

/// Size of one ABI word.
pub const ABI_WORD_SIZE: usize = 32;

// ═══════════════════════════════════════════════════════════════════════════════
// ENS CONSTANTS
// ═══════════════════════════════════════════════════════════════════════════════

/// ENS registry (with fallback) address, identical on mainnet, Sepolia and Holesky.
pub const ENS_REGISTRY_ADDRESS: &str = "0x00000000000C2E074eC69A0dFb2997BA6C7d2e1e";

/// Registry method returning the owner of a node.
pub const ENS_OWNER_METHOD: &str = "owner(bytes32)";

/// Label separator in ENS names.
pub const ENS_LABEL_SEPARATOR: char = '.';

// ═══════════════════════════════════════════════════════════════════════════════
// DEFAULTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Default Ethereum RPC URL when none is provided.
pub const DEFAULT_ETH_RPC_URL: &str = "https://ethereum.publicnode.com";

/// Default RPC request timeout in seconds.
pub const DEFAULT_RPC_TIMEOUT_SECS: u64 = 30;

/// Default debounce delay for `queue_resolve`, in milliseconds.
pub const DEFAULT_DEBOUNCE_MILLIS: u64 = 500;
