//! Shared randomness utilities.
//!
//! Both primitives take the randomness source as an explicit parameter, so
//! callers inject whatever generator they want and tests run on a seeded
//! one for exact-output assertions.

use rand::seq::SliceRandom;
use rand::Rng;

/// Draw distinct indexes from `0..population_size` without replacement.
///
/// Returns `min(sample_size, population_size)` indexes in draw order;
/// an index never appears twice.
pub fn sample_indexes<R: Rng + ?Sized>(
    rng: &mut R,
    population_size: usize,
    sample_size: usize,
) -> Vec<usize> {
    let amount = sample_size.min(population_size);
    rand::seq::index::sample(rng, population_size, amount).into_vec()
}

/// Shuffle a slice in place with an unbiased Fisher-Yates pass.
pub fn shuffle<R, T>(rng: &mut R, items: &mut [T])
where
    R: Rng + ?Sized,
{
    items.shuffle(rng);
}
