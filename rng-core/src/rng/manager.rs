//! Stateful adapter over the pure generators
//!
//! `RngManager` holds one word source and one state slot and forwards every
//! call to the pure transition functions, storing the returned state. It adds
//! no generation logic of its own.
//!
//! Sharing is opt-in: `SharedRng` puts a manager behind a mutex for callers
//! that really want one stream consumed from several places.

use std::sync::{Arc, Mutex, MutexGuard};

use rand_core::RngCore;

use super::bits::{draw_bits, next_n_bits};
use super::bytes::{fill_bytes, next_bytes};
use super::error::RngError;
use super::generators::{
    next_bool, next_f64, next_i64, next_i64_in, next_u64, next_u64_below, next_u64_in,
};
use super::source::WordSource;
use super::state::RngState;
use super::xorshift::Xorshift64Star;

/// Deterministic random number generator with a single mutable state slot
///
/// # Example
/// ```
/// use bitstream_rng::RngManager;
///
/// let mut rng = RngManager::new(12345).unwrap();
/// let value = rng.next_u64();
/// let range_value = rng.range(0, 100).unwrap(); // [0, 100)
/// assert!(range_value < 100);
/// ```
#[derive(Debug, Clone)]
pub struct RngManager<S = Xorshift64Star> {
    source: S,
    state: RngState,
}

impl RngManager<Xorshift64Star> {
    /// Create a new RNG over xorshift64* with given seed
    ///
    /// The first word is drawn eagerly, so the seed itself never shows up in
    /// the output.
    ///
    /// # Errors
    /// [`RngError::InvalidSeed`] if `seed` is zero.
    pub fn new(seed: u64) -> Result<Self, RngError> {
        let mut source = Xorshift64Star;
        let state = RngState::primed(seed, &mut source)?;
        Ok(Self { source, state })
    }
}

impl<S: WordSource> RngManager<S> {
    /// Wrap an existing source and state
    pub fn with_source(source: S, state: RngState) -> Self {
        Self { source, state }
    }

    /// Current state (for checkpointing/replay)
    ///
    /// # Example
    /// ```
    /// use bitstream_rng::{RngManager, Xorshift64Star};
    ///
    /// let mut rng = RngManager::new(12345).unwrap();
    /// let checkpoint = rng.state();
    /// let first = rng.next_u64();
    ///
    /// let mut replay = RngManager::with_source(Xorshift64Star, checkpoint);
    /// assert_eq!(replay.next_u64(), first);
    /// ```
    pub fn state(&self) -> RngState {
        self.state
    }

    /// Replace the state slot
    pub fn restore(&mut self, state: RngState) {
        self.state = state;
    }

    /// Borrow the word source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Split back into source and state
    pub fn into_parts(self) -> (S, RngState) {
        (self.source, self.state)
    }

    /// Generate next random u64 value
    pub fn next_u64(&mut self) -> u64 {
        let (value, state) = next_u64(&mut self.source, self.state);
        self.state = state;
        value
    }

    /// Generate an `n`-bit field
    pub fn next_bits(&mut self, n: u32) -> Result<u64, RngError> {
        let (value, state) = next_n_bits(n, &mut self.source, self.state)?;
        self.state = state;
        Ok(value)
    }

    /// Generate random value in `[0, max_exclusive)`
    pub fn below(&mut self, max_exclusive: u64) -> Result<u64, RngError> {
        let (value, state) = next_u64_below(max_exclusive, &mut self.source, self.state)?;
        self.state = state;
        Ok(value)
    }

    /// Generate random value in `[min, max)`
    ///
    /// # Errors
    /// [`RngError::InvalidRange`] if `min >= max`; the state is not advanced.
    pub fn range(&mut self, min: u64, max: u64) -> Result<u64, RngError> {
        let (value, state) = next_u64_in(min, max, &mut self.source, self.state)?;
        self.state = state;
        Ok(value)
    }

    /// Generate random signed value in `[min, max)`
    pub fn range_i64(&mut self, min: i64, max: i64) -> Result<i64, RngError> {
        let (value, state) = next_i64_in(min, max, &mut self.source, self.state)?;
        self.state = state;
        Ok(value)
    }

    /// Generate a full-range signed value
    pub fn next_i64(&mut self) -> i64 {
        let (value, state) = next_i64(&mut self.source, self.state);
        self.state = state;
        value
    }

    /// Generate a random bool from a single bit
    pub fn next_bool(&mut self) -> bool {
        let (value, state) = next_bool(&mut self.source, self.state);
        self.state = state;
        value
    }

    /// Generate random f64 in range [0.0, 1.0)
    pub fn next_f64(&mut self) -> f64 {
        let (value, state) = next_f64(&mut self.source, self.state);
        self.state = state;
        value
    }

    /// Generate exactly `count` random bytes
    pub fn next_bytes(&mut self, count: i64) -> Result<Vec<u8>, RngError> {
        let (bytes, state) = next_bytes(count, &mut self.source, self.state)?.into_parts();
        self.state = state;
        Ok(bytes)
    }

    /// Fill `dest` with random bytes
    pub fn fill(&mut self, dest: &mut [u8]) {
        self.state = fill_bytes(dest, &mut self.source, self.state);
    }

    /// Move into a mutex for explicit sharing
    pub fn into_shared(self) -> SharedRng<S> {
        SharedRng {
            inner: Arc::new(Mutex::new(self)),
        }
    }
}

impl<S: WordSource> RngCore for RngManager<S> {
    fn next_u32(&mut self) -> u32 {
        // Only 32 bits leave the buffer; the rest stay fresh for the next call
        let (bits, state) = draw_bits(32, &mut self.source, self.state);
        self.state = state;
        bits as u32
    }

    fn next_u64(&mut self) -> u64 {
        RngManager::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.fill(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill(dest);
        Ok(())
    }
}

/// Cloneable handle to one RNG stream shared behind a mutex
///
/// Every clone draws from the same stream. Prefer giving each consumer its
/// own `RngManager` unless the draws must interleave.
#[derive(Debug)]
pub struct SharedRng<S = Xorshift64Star> {
    inner: Arc<Mutex<RngManager<S>>>,
}

impl<S> Clone for SharedRng<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: WordSource> SharedRng<S> {
    /// Run `f` with exclusive access to the stream
    pub fn with<T>(&self, f: impl FnOnce(&mut RngManager<S>) -> T) -> T {
        let mut guard = self.lock();
        f(&mut *guard)
    }

    /// Current state of the shared stream
    pub fn state(&self) -> RngState {
        self.lock().state()
    }

    fn lock(&self) -> MutexGuard<'_, RngManager<S>> {
        // The slot is a plain value written in one store; a panic elsewhere
        // can not leave it half-updated
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
