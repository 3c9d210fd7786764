use thiserror::Error;

/// Misuse of the chain construction protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChainError {
    /// `start` was called on a chain that already has a head.
    #[error("chain already started, use append to extend it")]
    AlreadyStarted,

    /// `append` was called before `start`.
    #[error("chain is empty, call start first")]
    NotStarted,
}

pub type ChainResult<T> = Result<T, ChainError>;
