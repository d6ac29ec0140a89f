//! Uniform random selection.
//!
//! Every dish has probability `1/N`. Picks are independent: the same dish
//! can come up twice in a row (sampling with replacement).

use crate::error::{Result, SelectionError};
use crate::traits::Selector;
use catalog::{Catalog, Dish};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Pick a uniformly random dish using the given random source.
pub fn pick_random<'a, R: Rng + ?Sized>(catalog: &'a Catalog, rng: &mut R) -> Result<&'a Dish> {
    let dishes = catalog.all();
    if dishes.is_empty() {
        return Err(SelectionError::EmptyCatalog);
    }

    let position = rng.random_range(0..dishes.len());
    debug!("Picked position {} of {}", position, dishes.len());
    Ok(&dishes[position])
}

/// Selector backed by a random number generator.
pub struct RandomSelector<R: Rng = StdRng> {
    rng: R,
}

impl RandomSelector<StdRng> {
    /// Seeded from the operating system
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Deterministic sequence of picks for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSelector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Selector for RandomSelector<R> {
    fn name(&self) -> &str {
        "RandomSelector"
    }

    fn pick<'a>(&mut self, catalog: &'a Catalog) -> Result<&'a Dish> {
        pick_random(catalog, &mut self.rng)
    }
}
