//! Buffered RNG state
//!
//! An `RngState` is an immutable value: the cursor of the word source, the
//! unconsumed remainder of the last drawn word, and how many of its low bits
//! are still fresh. Generators never mutate a state; they return a new one.

use serde::{Deserialize, Serialize};

use super::error::RngError;
use super::source::WordSource;

/// Bits in one raw word
pub const WORD_BITS: u32 = 64;

/// Immutable bit-buffer state threaded through every generator call
///
/// Invariant: bits `[0, fresh_bits)` of `buffer` are fresh and every bit at or
/// above `fresh_bits` is zero, so consumed bits can never be returned twice.
///
/// # Example
/// ```
/// use bitstream_rng::RngState;
///
/// let state = RngState::from_parts(1, 0x0123_4567_89AB_CDEF, 16).unwrap();
/// assert_eq!(state.buffer(), 0xCDEF);
/// assert_eq!(state.fresh_bits(), 16);
///
/// assert!(RngState::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRngState")]
pub struct RngState {
    /// Word source cursor (never zero)
    seed: u64,

    /// Unconsumed remainder of the most recently drawn word
    buffer: u64,

    /// Number of fresh low-order bits in `buffer`
    fresh_bits: u32,
}

impl RngState {
    /// Create a state whose buffer is the seed word, fully unconsumed
    ///
    /// The first 64 bits drawn from this state are the seed itself. Use
    /// [`RngState::primed`] when the seed must not appear in the output.
    ///
    /// # Errors
    /// [`RngError::InvalidSeed`] if `seed` is zero.
    pub fn new(seed: u64) -> Result<Self, RngError> {
        Self::from_parts(seed, seed, WORD_BITS)
    }

    /// Create a state from explicit parts
    ///
    /// Bits of `buffer` at or above `fresh_bits` are treated as consumed and
    /// cleared.
    ///
    /// # Errors
    /// - [`RngError::InvalidSeed`] if `seed` is zero
    /// - [`RngError::InvalidFreshBits`] if `fresh_bits > 64`
    pub fn from_parts(seed: u64, buffer: u64, fresh_bits: u32) -> Result<Self, RngError> {
        if seed == 0 {
            return Err(RngError::InvalidSeed);
        }
        if fresh_bits > WORD_BITS {
            return Err(RngError::InvalidFreshBits { fresh_bits });
        }

        Ok(Self::from_raw(seed, buffer & low_mask(fresh_bits), fresh_bits))
    }

    /// Create a state whose buffer is the first word drawn from `source`
    ///
    /// # Errors
    /// [`RngError::InvalidSeed`] if `seed` is zero.
    pub fn primed<S>(seed: u64, source: &mut S) -> Result<Self, RngError>
    where
        S: WordSource + ?Sized,
    {
        if seed == 0 {
            return Err(RngError::InvalidSeed);
        }

        let (word, cursor) = source.next_word(seed);
        Ok(Self::from_raw(cursor, word, WORD_BITS))
    }

    /// Unchecked constructor for transitions that already uphold the invariant
    pub(crate) fn from_raw(seed: u64, buffer: u64, fresh_bits: u32) -> Self {
        debug_assert!(fresh_bits <= WORD_BITS);
        debug_assert_eq!(buffer & !low_mask(fresh_bits), 0);
        Self {
            seed,
            buffer,
            fresh_bits,
        }
    }

    /// Word source cursor
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Unconsumed remainder of the last drawn word
    pub fn buffer(&self) -> u64 {
        self.buffer
    }

    /// Number of fresh bits left in the buffer
    pub fn fresh_bits(&self) -> u32 {
        self.fresh_bits
    }
}

/// Mask selecting the low `n` bits (`n` in `[0, 64]`)
#[inline]
pub(crate) fn low_mask(n: u32) -> u64 {
    u64::MAX.checked_shr(WORD_BITS - n).unwrap_or(0)
}

/// Wire shape of `RngState`; deserialization re-validates it
#[derive(Deserialize)]
struct RawRngState {
    seed: u64,
    buffer: u64,
    fresh_bits: u32,
}

impl TryFrom<RawRngState> for RngState {
    type Error = RngError;

    fn try_from(raw: RawRngState) -> Result<Self, Self::Error> {
        Self::from_parts(raw.seed, raw.buffer, raw.fresh_bits)
    }
}
