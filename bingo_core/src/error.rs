//! Error types for the game core.

use thiserror::Error;

/// Errors that can occur while setting up or running a game.
#[derive(Debug, Clone, Error)]
pub enum GameError {
    /// A parameter combination that can never produce a valid game
    /// (e.g. more winning numbers than the pool holds)
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The number pool drained before the board was filled. Always a
    /// configuration bug upstream; never retried.
    #[error("Number pool exhausted: needed {needed} numbers, pool holds {pool_size}")]
    PoolExhausted { needed: usize, pool_size: u32 },
}

impl GameError {
    /// Creates an invalid-configuration error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}
