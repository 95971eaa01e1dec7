//! Board validation - the diagonal walk with a four-direction cross-probe.
//!
//! The walk advances along the main diagonal until it meets a winning
//! number. That cell becomes the one and only pivot: its row and column are
//! probed outward in all four directions, each direction stopping
//! independently at its first non-matching cell. After the pivot the walk
//! keeps advancing only while the diagonal keeps matching; later diagonal
//! matches never spawn a second probe.
//!
//! A completed walk is always reported as won, even when no pivot was found
//! (run length 0). Whether a win should instead require a full cross is a
//! product question; the behavior here is kept as shipped.

use std::collections::HashSet;

use crate::board::{Board, Cell};

/// Outcome of validating one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// True whenever the diagonal walk completed (currently: always)
    pub won: bool,

    /// Cells marked `Matched`: the pivot plus every matched probe cell,
    /// or 0 if the diagonal never matched
    pub run_length: usize,
}

/// Validates a board against the winning numbers, marking matched cells
/// with [`Cell::Matched`] in place.
pub fn validate(board: &mut Board, winning: &HashSet<u32>) -> Verdict {
    let size = board.size();
    let mut pivot_found = false;
    let mut run_length = 0;

    for i in 0..size {
        let hit = is_winning(board.get(i, i), winning);

        if !pivot_found {
            if hit {
                pivot_found = true;
                board.set(i, i, Cell::Matched);
                run_length = 1 + cross_probe(board, winning, i, i);
            }
            // No pivot yet: a non-matching diagonal cell just lets the
            // walk continue.
        } else if !hit {
            // Inter-pivot step failed: the walk terminates.
            break;
        }
    }

    Verdict {
        won: true,
        run_length,
    }
}

/// Probes the pivot's row and column in all four directions, marking
/// matched cells. Returns how many cells matched across all directions.
///
/// Row probes sweep column 0 up to the pivot and the pivot to the right
/// edge; column probes sweep row 0 down to the pivot and the pivot to the
/// bottom edge. Each direction stops at its own first non-match without
/// affecting the others, and all four always run.
fn cross_probe(board: &mut Board, winning: &HashSet<u32>, row: usize, col: usize) -> usize {
    let size = board.size();
    let mut matched = 0;

    // Left of the pivot (row-wise)
    matched += probe(board, winning, (0..col).map(|c| (row, c)));
    // Right of the pivot (row-wise)
    matched += probe(board, winning, (col + 1..size).map(|c| (row, c)));
    // Above the pivot (column-wise)
    matched += probe(board, winning, (0..row).map(|r| (r, col)));
    // Below the pivot (column-wise)
    matched += probe(board, winning, (row + 1..size).map(|r| (r, col)));

    matched
}

/// Marks matching cells along one direction, stopping at the first
/// non-match. Returns the number of cells marked.
fn probe(
    board: &mut Board,
    winning: &HashSet<u32>,
    cells: impl Iterator<Item = (usize, usize)>,
) -> usize {
    let mut matched = 0;
    for (row, col) in cells {
        if is_winning(board.get(row, col), winning) {
            board.set(row, col, Cell::Matched);
            matched += 1;
        } else {
            break;
        }
    }
    matched
}

fn is_winning(cell: Cell, winning: &HashSet<u32>) -> bool {
    matches!(cell, Cell::Number(n) if winning.contains(&n))
}
