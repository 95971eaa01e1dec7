//! Game configuration and its validity rules.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Parameters for one simulation run. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board edge length (boards are board_size x board_size)
    pub board_size: usize,

    /// Numbers are drawn from 1..=number_pool_size
    pub number_pool_size: u32,

    /// Boards generated and checked per run
    pub num_boards: u32,

    /// How many winning numbers are drawn per run
    pub winning_number_size: u32,
}

impl GameConfig {
    /// Checks the configuration invariants.
    ///
    /// The sweep runner treats a failure here as a skip; an ad-hoc run
    /// treats it as fatal.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.winning_number_size > self.number_pool_size {
            return Err(GameError::invalid(format!(
                "winning_number_size {} exceeds number_pool_size {}",
                self.winning_number_size, self.number_pool_size
            )));
        }
        let cells = self.board_size * self.board_size;
        if (self.number_pool_size as usize) < cells {
            return Err(GameError::invalid(format!(
                "number_pool_size {} cannot fill a {}x{} board ({} cells)",
                self.number_pool_size, self.board_size, self.board_size, cells
            )));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 6,
            number_pool_size: 200,
            num_boards: 250,
            winning_number_size: 60,
        }
    }
}
