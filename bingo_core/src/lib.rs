//! Bingo game core - board generation, winning-number draws, and the
//! diagonal cross-run validator.
//!
//! All randomness flows through an explicitly passed [`rand::Rng`], so two
//! runs with the same seed produce identical boards, draws, and verdicts.

pub mod board;
pub mod config;
pub mod draw;
pub mod error;
pub mod validate;

// Re-export key types for convenience
pub use board::{Board, Cell};
pub use config::GameConfig;
pub use draw::draw_winning_numbers;
pub use error::GameError;
pub use validate::{validate, Verdict};
