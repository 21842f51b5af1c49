//! RNG module - injectable randomness for tile spawns
//!
//! The engine never touches a global generator. Everything random goes through
//! [`SpawnSource`], which has three kinds of implementors:
//!
//! - [`SimpleRng`]: a small seeded LCG, deterministic across platforms (tests, `--seed`)
//! - [`RandSource`]: wraps any `rand` generator (the interactive default)
//! - `Box<dyn SpawnSource>`: lets a session swap sources at runtime

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::Grid;
use crate::types::FOUR_PROBABILITY;

/// Source of the two random choices a spawn makes.
pub trait SpawnSource {
    /// Uniform index in `0..len`. `len` is never zero.
    fn pick_cell(&mut self, len: usize) -> usize;

    /// True if the spawned tile should be rank 2 (probability [`FOUR_PROBABILITY`]).
    fn pick_four(&mut self) -> bool;
}

impl<S: SpawnSource + ?Sized> SpawnSource for Box<S> {
    fn pick_cell(&mut self, len: usize) -> usize {
        (**self).pick_cell(len)
    }

    fn pick_four(&mut self) -> bool {
        (**self).pick_four()
    }
}

impl<S: SpawnSource + ?Sized> SpawnSource for &mut S {
    fn pick_cell(&mut self, len: usize) -> usize {
        (**self).pick_cell(len)
    }

    fn pick_four(&mut self) -> bool {
        (**self).pick_four()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The high bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl SpawnSource for SimpleRng {
    fn pick_cell(&mut self, len: usize) -> usize {
        self.next_range(len as u32) as usize
    }

    fn pick_four(&mut self) -> bool {
        self.next_range(10) == 0
    }
}

/// Adapter from any `rand` generator to [`SpawnSource`].
#[derive(Debug, Clone)]
pub struct RandSource<R>(pub R);

impl RandSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        RandSource(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        RandSource(StdRng::from_entropy())
    }
}

impl<R: Rng> SpawnSource for RandSource<R> {
    fn pick_cell(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }

    fn pick_four(&mut self) -> bool {
        self.0.gen_bool(FOUR_PROBABILITY)
    }
}

/// Place one tile on a uniformly chosen empty cell.
///
/// Returns the (row, col, rank) written, or `None` if the grid has no empty cell.
pub fn spawn_tile<S: SpawnSource + ?Sized>(
    grid: &mut Grid,
    source: &mut S,
) -> Option<(usize, usize, u8)> {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        return None;
    }
    let pick = source.pick_cell(empty.len()).min(empty.len() - 1);
    let (row, col) = empty[pick];
    let rank = if source.pick_four() { 2 } else { 1 };
    grid.set(row, col, rank);
    Some((row, col, rank))
}
