//! Read-only contract call descriptors.

use std::fmt;

use sha3::{Digest, Keccak256};
use url::Url;

use super::{Address, Node};
use crate::constants::{ABI_WORD_SIZE, SELECTOR_SIZE};

/// A Solidity method signature together with its 4-byte selector.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct MethodSignature {
    signature: String,
    selector: [u8; SELECTOR_SIZE],
}

impl MethodSignature {
    /// Parses a canonical signature such as `owner(bytes32)`.
    ///
    /// Only the shape is checked: an identifier followed by a parenthesised,
    /// whitespace-free argument list.
    pub fn parse(signature: &str) -> std::result::Result<Self, String> {
        let open = signature
            .find('(')
            .ok_or_else(|| format!("'{}' has no argument list", signature))?;
        let name = &signature[..open];

        if !signature.ends_with(')') {
            return Err(format!("'{}' is not closed by ')'", signature));
        }
        if name.is_empty()
            || name.starts_with(|c: char| c.is_ascii_digit())
            || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        {
            return Err(format!("'{}' is not a valid method name", name));
        }
        if signature.chars().any(char::is_whitespace) {
            return Err(format!("'{}' must not contain whitespace", signature));
        }

        let hash = Keccak256::digest(signature.as_bytes());
        let mut selector = [0u8; SELECTOR_SIZE];
        selector.copy_from_slice(&hash[..SELECTOR_SIZE]);

        Ok(Self {
            signature: signature.to_string(),
            selector,
        })
    }

    /// Returns the signature text.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Returns the 4-byte selector.
    pub fn selector(&self) -> [u8; SELECTOR_SIZE] {
        self.selector
    }
}

impl fmt::Debug for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [0x{}]", self.signature, hex::encode(self.selector))
    }
}

/// Everything a [`ContractCallClient`](crate::traits::ContractCallClient)
/// needs to run one single-argument read-only call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractCall {
    /// RPC endpoint to send the call to
    pub endpoint: Url,
    /// Contract being called
    pub contract: Address,
    /// Method being called
    pub method: MethodSignature,
    /// The sole `bytes32` argument
    pub node: Node,
}

impl ContractCall {
    /// ABI-encodes the call data: selector followed by the node word.
    pub fn calldata(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(SELECTOR_SIZE + ABI_WORD_SIZE);
        data.extend_from_slice(&self.method.selector());
        data.extend_from_slice(self.node.as_bytes());
        data
    }
}
