//! Winning-number draws - uniform sampling without replacement.

use std::collections::HashSet;

use rand::Rng;

use crate::error::GameError;

/// Draws `count` distinct winning numbers from `1..=pool_size`.
///
/// The draw happens once per game configuration and is reused for every
/// board generated under it. Returns [`GameError::InvalidConfiguration`] if
/// `count > pool_size`.
pub fn draw_winning_numbers(
    pool_size: u32,
    count: u32,
    rng: &mut impl Rng,
) -> Result<HashSet<u32>, GameError> {
    if count > pool_size {
        return Err(GameError::invalid(format!(
            "cannot draw {} winning numbers from a pool of {}",
            count, pool_size
        )));
    }

    let indices = rand::seq::index::sample(rng, pool_size as usize, count as usize);
    Ok(indices.iter().map(|i| i as u32 + 1).collect())
}
