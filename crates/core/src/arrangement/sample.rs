//! Random picks from the accepted set

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use super::Arrangement;

/// Picks one arrangement. A seed makes the pick reproducible.
pub fn sample(accepted: &[Arrangement], seed: Option<u64>) -> Option<&Arrangement> {
    match seed {
        Some(seed) => accepted.choose(&mut StdRng::seed_from_u64(seed)),
        None => accepted.choose(&mut rand::rng()),
    }
}
