mod chain;
mod error;
mod node;

pub use chain::{Iter, LinkedChain};
pub use error::{ChainError, ChainResult};
pub use node::NodeRef;

/// Lowercase hex BLAKE2s-256 digest
pub type Fingerprint = String;

/// Rendering of a chain without nodes
pub const EMPTY_CHAIN: &str = "[]";
