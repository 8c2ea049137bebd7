//! Sized byte sequences
//!
//! Bytes are cut from the bit stream eight bits at a time. The sequence is
//! lazy but its length is fixed up front, and the state after any prefix is
//! observable, so a caller can stop early and still thread the right state
//! onward.

use std::iter::FusedIterator;

use super::bits::draw_bits;
use super::error::RngError;
use super::source::WordSource;
use super::state::RngState;

const BYTE_BITS: u32 = 8;

/// Lazy sequence of exactly `count` random bytes
///
/// Created by [`next_bytes`]. Each item advances the carried state by one
/// 8-bit field.
#[derive(Debug)]
pub struct Bytes<'a, S: ?Sized> {
    source: &'a mut S,
    state: RngState,
    remaining: usize,
}

impl<'a, S> Bytes<'a, S>
where
    S: WordSource + ?Sized,
{
    /// State after the bytes yielded so far
    pub fn state(&self) -> RngState {
        self.state
    }

    /// Drain the remaining bytes and return them with the final state
    pub fn into_parts(mut self) -> (Vec<u8>, RngState) {
        let bytes: Vec<u8> = self.by_ref().collect();
        (bytes, self.state)
    }
}

impl<'a, S> Iterator for Bytes<'a, S>
where
    S: WordSource + ?Sized,
{
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.remaining == 0 {
            return None;
        }

        let (byte, state) = draw_bits(BYTE_BITS, &mut *self.source, self.state);
        self.state = state;
        self.remaining -= 1;
        Some(byte as u8)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, S> ExactSizeIterator for Bytes<'a, S> where S: WordSource + ?Sized {}

impl<'a, S> FusedIterator for Bytes<'a, S> where S: WordSource + ?Sized {}

/// Lazy sequence of `count` bytes starting at `state`
///
/// Replaying from the same state with a source at the same position yields
/// the same bytes.
///
/// # Errors
/// [`RngError::InvalidCount`] if `count` is negative.
///
/// # Example
/// ```
/// use bitstream_rng::{next_bytes, RngState, Xorshift64Star};
///
/// let state = RngState::new(42).unwrap();
/// let mut source = Xorshift64Star;
///
/// let (bytes, state) = next_bytes(100, &mut source, state).unwrap().into_parts();
/// assert_eq!(bytes.len(), 100);
/// assert!(next_bytes(-1, &mut source, state).is_err());
/// ```
pub fn next_bytes<S>(
    count: i64,
    source: &mut S,
    state: RngState,
) -> Result<Bytes<'_, S>, RngError>
where
    S: WordSource + ?Sized,
{
    let remaining = usize::try_from(count).map_err(|_| RngError::InvalidCount { count })?;

    Ok(Bytes {
        source,
        state,
        remaining,
    })
}

/// Fill `dest` with random bytes and return the advanced state
pub fn fill_bytes<S>(dest: &mut [u8], source: &mut S, state: RngState) -> RngState
where
    S: WordSource + ?Sized,
{
    let mut bytes = Bytes {
        source,
        state,
        remaining: dest.len(),
    };
    for (slot, byte) in dest.iter_mut().zip(bytes.by_ref()) {
        *slot = byte;
    }
    bytes.state
}
