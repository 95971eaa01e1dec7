//! Sweep runner - drives the simulation across a Cartesian parameter grid.

use rand::Rng;
use tracing::{error, info, warn};

use bingo_core::{GameConfig, GameError};

use crate::driver::run_game;
use crate::store::{SimulationRecord, SimulationStore};

/// The parameter grid for one sweep: every combination of pool size, board
/// count, and winning-draw size, with the board size held constant.
#[derive(Debug, Clone)]
pub struct SweepGrid {
    /// Board edge length, fixed across the grid
    pub board_size: usize,

    /// number_pool_size axis
    pub pool_sizes: Vec<u32>,

    /// num_boards axis
    pub board_counts: Vec<u32>,

    /// winning_number_size axis
    pub winning_sizes: Vec<u32>,
}

impl Default for SweepGrid {
    fn default() -> Self {
        Self {
            board_size: 6,
            pool_sizes: vec![60, 120, 200],
            board_counts: vec![100, 250],
            winning_sizes: vec![30, 60, 90],
        }
    }
}

impl SweepGrid {
    /// Yields the grid points as configurations, unvalidated.
    pub fn configs(&self) -> impl Iterator<Item = GameConfig> + '_ {
        self.pool_sizes.iter().flat_map(move |&pool| {
            self.board_counts.iter().flat_map(move |&boards| {
                self.winning_sizes.iter().map(move |&winning| GameConfig {
                    board_size: self.board_size,
                    number_pool_size: pool,
                    num_boards: boards,
                    winning_number_size: winning,
                })
            })
        })
    }
}

/// Runs `reps` repetitions of the grid, persisting one record per valid
/// grid point per repetition.
///
/// Invalid grid points are skipped with a warning and never reach the
/// driver. A failed insert drops that record and the sweep continues; a
/// pool exhaustion inside the driver aborts the whole sweep. Returns the
/// records that were persisted, in order.
pub fn run_sweep(
    grid: &SweepGrid,
    reps: u32,
    rng: &mut impl Rng,
    store: &SimulationStore,
) -> Result<Vec<SimulationRecord>, GameError> {
    let mut records = Vec::new();

    for rep in 0..reps {
        info!(rep = rep + 1, total = reps, "sweep repetition");

        for config in grid.configs() {
            if let Err(e) = config.validate() {
                warn!(
                    number_pool_size = config.number_pool_size,
                    num_boards = config.num_boards,
                    winning_number_size = config.winning_number_size,
                    "skipping grid point: {}",
                    e
                );
                continue;
            }

            let winning_boards_count = run_game(&config, &mut *rng)?;
            let record = SimulationRecord::new(&config, winning_boards_count);

            match store.insert(&record) {
                Ok(()) => records.push(record),
                Err(e) => error!("dropping record after store failure: {}", e),
            }
        }
    }

    info!(records = records.len(), "sweep complete");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn small_grid() -> SweepGrid {
        SweepGrid {
            board_size: 3,
            pool_sizes: vec![30, 60],
            board_counts: vec![10],
            winning_sizes: vec![15],
        }
    }

    #[test]
    fn test_sweep_persists_one_record_per_grid_point() {
        let store = SimulationStore::temporary().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let records = run_sweep(&small_grid(), 2, &mut rng, &store).unwrap();
        // 2 pools x 1 board count x 1 winning size, twice
        assert_eq!(records.len(), 4);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_sweep_skips_invalid_grid_points() {
        // winning size 90 can never be drawn from a pool of 60
        let grid = SweepGrid {
            board_size: 6,
            pool_sizes: vec![60],
            board_counts: vec![10],
            winning_sizes: vec![90],
        };
        let store = SimulationStore::temporary().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let records = run_sweep(&grid, 3, &mut rng, &store).unwrap();
        assert!(records.is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_sweep_skips_pool_too_small_for_board() {
        let grid = SweepGrid {
            board_size: 6,
            pool_sizes: vec![30], // 6x6 needs 36
            board_counts: vec![10],
            winning_sizes: vec![10],
        };
        let store = SimulationStore::temporary().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let records = run_sweep(&grid, 1, &mut rng, &store).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_sweep_zero_boards_still_produces_record() {
        let grid = SweepGrid {
            board_size: 3,
            pool_sizes: vec![30],
            board_counts: vec![0],
            winning_sizes: vec![15],
        };
        let store = SimulationStore::temporary().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let records = run_sweep(&grid, 1, &mut rng, &store).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].winning_boards_count, 0);
    }

    #[test]
    fn test_sweep_deterministic_per_seed() {
        let store1 = SimulationStore::temporary().unwrap();
        let store2 = SimulationStore::temporary().unwrap();
        let mut rng1 = ChaCha8Rng::seed_from_u64(7);
        let mut rng2 = ChaCha8Rng::seed_from_u64(7);

        let counts1: Vec<u32> = run_sweep(&small_grid(), 2, &mut rng1, &store1)
            .unwrap()
            .iter()
            .map(|r| r.winning_boards_count)
            .collect();
        let counts2: Vec<u32> = run_sweep(&small_grid(), 2, &mut rng2, &store2)
            .unwrap()
            .iter()
            .map(|r| r.winning_boards_count)
            .collect();

        assert_eq!(counts1, counts2);
    }
}
