//! EIP-137 namehash.
//!
//! ```text
//! namehash("")            = 0x00 * 32
//! namehash(label "." rest) = keccak256(namehash(rest) || keccak256(label))
//! ```
//!
//! Labels are hashed as given; callers normalize (lowercase) first.

use sha3::{Digest, Keccak256};

use ensfield_core::constants::{ENS_LABEL_SEPARATOR, NODE_SIZE};
use ensfield_core::types::Node;

/// Computes the keccak256 hash of a single label.
pub fn labelhash(label: &str) -> [u8; NODE_SIZE] {
    Keccak256::digest(label.as_bytes()).into()
}

/// Computes the namehash of a dot-separated name.
///
/// Empty labels are skipped, so `""` is the root node and `"eth."` hashes
/// like `"eth"`.
pub fn namehash(name: &str) -> Node {
    let mut node = [0u8; NODE_SIZE];

    for label in name.rsplit(ENS_LABEL_SEPARATOR) {
        if label.is_empty() {
            continue;
        }

        let mut hasher = Keccak256::new();
        hasher.update(node);
        hasher.update(labelhash(label));
        node = hasher.finalize().into();
    }

    Node::from_array(node)
}
