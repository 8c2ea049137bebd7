//! Adapter over an external random engine
//!
//! Wraps any `rand_core::RngCore` as a word source. The engine is asked for
//! `buffer_len` bytes at a time and words are served from that block, so the
//! buffer length only controls how large each engine draw is.
//!
//! Unlike the counter sources, the word returned here depends on the
//! engine's own position, not on the cursor. The cursor only counts draws.

use rand_core::RngCore;

use super::source::WordSource;

const WORD_BYTES: usize = 8;

/// Word source backed by an external engine
///
/// # Example
/// ```
/// use bitstream_rng::{next_u64, EngineSource, RngState};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut source = EngineSource::new(StdRng::seed_from_u64(7), 32);
/// let state = RngState::from_parts(1, 0, 0).unwrap();
/// let (_, state) = next_u64(&mut source, state);
/// assert_eq!(state.seed(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct EngineSource<R> {
    engine: R,
    block: Vec<u8>,
    position: usize,
}

impl<R: RngCore> EngineSource<R> {
    /// Wrap `engine`, drawing `buffer_len` bytes per refill
    ///
    /// `buffer_len` is rounded up to a whole number of words, minimum one.
    pub fn new(engine: R, buffer_len: usize) -> Self {
        let words = buffer_len.div_ceil(WORD_BYTES).max(1);
        let block = vec![0; words * WORD_BYTES];
        let position = block.len();
        Self {
            engine,
            block,
            position,
        }
    }

    /// Bytes requested from the engine per refill
    pub fn buffer_len(&self) -> usize {
        self.block.len()
    }

    /// Give the engine back
    pub fn into_inner(self) -> R {
        self.engine
    }
}

impl<R: RngCore> WordSource for EngineSource<R> {
    fn next_word(&mut self, cursor: u64) -> (u64, u64) {
        if self.position == self.block.len() {
            self.engine.fill_bytes(&mut self.block);
            self.position = 0;
        }

        let mut bytes = [0u8; WORD_BYTES];
        bytes.copy_from_slice(&self.block[self.position..self.position + WORD_BYTES]);
        self.position += WORD_BYTES;

        let next = cursor.checked_add(1).unwrap_or(1);
        (u64::from_le_bytes(bytes), next)
    }
}
