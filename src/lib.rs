//! Edge-labeled chains: ordered payloads where every transition between two
//! neighbours carries its own typed relation value.

mod traits;
mod types;
mod utils;

pub use traits::{Chain, Fingerprinted, NodeView};
pub use types::{
    ChainError, ChainResult, Fingerprint, Iter, LinkedChain, NodeRef, EMPTY_CHAIN,
};
