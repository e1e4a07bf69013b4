//! Randomness capability used by reel draws.
//!
//! The core only ever asks for "an index below `bound`", so any generator (or a scripted
//! list of stops for tests and replays) can drive a spin.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Source of uniformly distributed reel stops.
pub trait IndexSource {
    /// Return an index in `0..bound`. `bound` is always non-zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// [`IndexSource`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }
}

impl RngSource<ThreadRng> {
    /// Thread-local generator; each thread gets its own state.
    pub fn thread() -> Self {
        RngSource::new(rand::thread_rng())
    }
}

impl RngSource<StdRng> {
    /// Reproducible generator for replays and tests.
    pub fn seeded(seed: u64) -> Self {
        RngSource::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> IndexSource for RngSource<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

/// Replays a fixed list of stops, wrapping each into range with `% bound`.
/// Falls back to 0 once the list is exhausted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    stops: VecDeque<usize>,
}

impl ScriptedSource {
    pub fn new(stops: impl IntoIterator<Item = usize>) -> Self {
        ScriptedSource {
            stops: stops.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.stops.len()
    }
}

impl IndexSource for ScriptedSource {
    fn next_index(&mut self, bound: usize) -> usize {
        self.stops.pop_front().map(|s| s % bound).unwrap_or(0)
    }
}
