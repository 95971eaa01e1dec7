//! Bingo boards - a size x size grid of distinct pool numbers.
//!
//! Boards are filled in row-major order by drawing without replacement from
//! a working copy of the number pool, so no two cells on one board ever share
//! a value. Validation later overwrites matched cells with [`Cell::Matched`].

use std::fmt;

use rand::Rng;

use crate::error::GameError;

/// A single board cell.
///
/// Freshly generated boards hold only `Number` cells; the validator replaces
/// matched cells with `Matched` in place, which doubles as a marked-board
/// rendering for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// A pool number, distinct within its board
    Number(u32),

    /// Terminal marker left behind by the validator
    Matched,
}

/// A size x size grid of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Generates a fresh board by drawing `size * size` numbers without
    /// replacement from the pool `1..=number_pool_size`.
    ///
    /// Returns [`GameError::PoolExhausted`] if the pool drains mid-fill,
    /// i.e. `number_pool_size < size * size`.
    pub fn generate(
        size: usize,
        number_pool_size: u32,
        rng: &mut impl Rng,
    ) -> Result<Self, GameError> {
        let needed = size * size;
        let mut pool: Vec<u32> = (1..=number_pool_size).collect();
        let mut cells = Vec::with_capacity(needed);

        for _ in 0..needed {
            if pool.is_empty() {
                return Err(GameError::PoolExhausted {
                    needed,
                    pool_size: number_pool_size,
                });
            }
            let idx = rng.gen_range(0..pool.len());
            cells.push(Cell::Number(pool.remove(idx)));
        }

        Ok(Self { size, cells })
    }

    /// Builds a board directly from row-major numbers (for tests and
    /// worked examples).
    ///
    /// # Panics
    ///
    /// Panics if `numbers.len()` is not a perfect square.
    pub fn from_numbers(numbers: &[u32]) -> Self {
        let size = (numbers.len() as f64).sqrt() as usize;
        assert_eq!(size * size, numbers.len(), "not a square grid");
        Self {
            size,
            cells: numbers.iter().map(|&n| Cell::Number(n)).collect(),
        }
    }

    /// Board edge length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.size + col]
    }

    /// Overwrites the cell at (row, col).
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.size + col] = cell;
    }

    /// Iterates all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cells
            .iter()
            .map(|c| match c {
                Cell::Number(n) => n.to_string().len(),
                Cell::Matched => 1,
            })
            .max()
            .unwrap_or(1);

        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.get(row, col) {
                    Cell::Number(n) => write!(f, "{:>width$}", n, width = width)?,
                    Cell::Matched => write!(f, "{:>width$}", "W", width = width)?,
                }
            }
            if row + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn test_generate_fills_distinct_numbers() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let board = Board::generate(6, 200, &mut rng).unwrap();

        let values: Vec<u32> = board
            .cells()
            .map(|c| match c {
                Cell::Number(n) => n,
                Cell::Matched => panic!("fresh board holds a marker"),
            })
            .collect();

        assert_eq!(values.len(), 36);
        let distinct: HashSet<u32> = values.iter().copied().collect();
        assert_eq!(distinct.len(), 36);
        assert!(values.iter().all(|&n| (1..=200).contains(&n)));
    }

    #[test]
    fn test_generate_deterministic_per_seed() {
        let mut rng1 = ChaCha8Rng::seed_from_u64(7);
        let mut rng2 = ChaCha8Rng::seed_from_u64(7);

        let a = Board::generate(5, 100, &mut rng1).unwrap();
        let b = Board::generate(5, 100, &mut rng2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_exhausted_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let err = Board::generate(4, 15, &mut rng).unwrap_err();
        assert!(matches!(err, GameError::PoolExhausted { needed: 16, .. }));
    }

    #[test]
    fn test_generate_pool_exactly_board_sized() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let board = Board::generate(3, 9, &mut rng).unwrap();

        let values: HashSet<u32> = board
            .cells()
            .map(|c| match c {
                Cell::Number(n) => n,
                Cell::Matched => unreachable!(),
            })
            .collect();
        // Pool of exactly 9 means the whole pool lands on the board
        let whole_pool: HashSet<u32> = (1..=9).collect();
        assert_eq!(values, whole_pool);
    }

    #[test]
    fn test_display_marks_matched_cells() {
        let mut board = Board::from_numbers(&[1, 2, 3, 4]);
        board.set(0, 0, Cell::Matched);

        let rendered = board.to_string();
        assert_eq!(rendered, "W 2\n3 4");
    }

    proptest! {
        #[test]
        fn prop_generate_distinct_and_in_range(
            size in 1usize..=8,
            extra in 0u32..200,
        ) {
            let pool_size = (size * size) as u32 + extra;
            let mut rng = ChaCha8Rng::seed_from_u64(99);
            let board = Board::generate(size, pool_size, &mut rng).unwrap();

            let values: Vec<u32> = board
                .cells()
                .map(|c| match c {
                    Cell::Number(n) => n,
                    Cell::Matched => unreachable!(),
                })
                .collect();
            let distinct: HashSet<u32> = values.iter().copied().collect();

            prop_assert_eq!(values.len(), size * size);
            prop_assert_eq!(distinct.len(), size * size);
            prop_assert!(values.iter().all(|&n| n >= 1 && n <= pool_size));
        }
    }
}
