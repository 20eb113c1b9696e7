//! Deterministic random number generation for the search.
//!
//! Playout randomness is keyed by `(search seed, worker id, playout
//! index)`: every playout runs on its own ChaCha stream, so results are
//! deterministic per worker and per playout with no cross-thread
//! coordination.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG that hands out an independent stream per playout.
///
/// A worker's stream id keeps the worker id in the high half and the
/// playout index in the low half, so no two playouts in one search share
/// a sequence.
#[derive(Clone, Debug)]
pub struct SearchRng {
    inner: ChaCha8Rng,
    seed: u64,
    worker_id: u32,
    playouts_started: u32,
}

impl SearchRng {
    /// Create the RNG for worker 0 of a search.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::for_worker(seed, 0)
    }

    /// Create the RNG for one search worker.
    #[must_use]
    pub fn for_worker(seed: u64, worker_id: usize) -> Self {
        let worker_id = worker_id as u32;
        let mut inner = ChaCha8Rng::seed_from_u64(seed);
        inner.set_stream(u64::from(worker_id) << 32);
        Self {
            inner,
            seed,
            worker_id,
            playouts_started: 0,
        }
    }

    /// The single-use RNG for this worker's next playout: stream
    /// `(worker id, playout index)` of the search seed. Playout indices
    /// start at 1; the worker's own stream keeps index 0.
    #[must_use]
    pub fn playout_rng(&mut self) -> Self {
        self.playouts_started += 1;
        let mut inner = ChaCha8Rng::seed_from_u64(self.seed);
        inner.set_stream(u64::from(self.worker_id) << 32 | u64::from(self.playouts_started));
        Self {
            inner,
            seed: self.seed,
            worker_id: self.worker_id,
            playouts_started: 0,
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
