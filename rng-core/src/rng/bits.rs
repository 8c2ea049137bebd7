//! Bit-field extraction
//!
//! The bit buffer turns a stream of raw words into a stream of bits. Fields
//! are cut from the low end of the buffer; when the buffer runs short, the
//! remaining fresh bits form the low part of the field and the rest comes from
//! the low end of one newly drawn word. Nothing is skipped or reused.

use super::error::RngError;
use super::source::WordSource;
use super::state::{low_mask, RngState, WORD_BITS};

/// Draw an `n`-bit field (`n` in `[1, 64]`) from the bit stream
///
/// Returns the field and the advanced state. The source is consulted only
/// when the buffer holds fewer than `n` fresh bits, and then exactly once.
///
/// # Errors
/// [`RngError::InvalidWidth`] if `n` is 0 or greater than 64. The state and
/// the source are left untouched.
///
/// # Example
/// ```
/// use bitstream_rng::{next_n_bits, RngState};
///
/// let mut source = |cursor: u64| -> (u64, u64) { (0, cursor + 1) };
/// let state = RngState::from_parts(1, 0x0123_4567_89AB_CDEF, 64).unwrap();
///
/// let (low, state) = next_n_bits(16, &mut source, state).unwrap();
/// assert_eq!(low, 0xCDEF);
/// let (next, state) = next_n_bits(16, &mut source, state).unwrap();
/// assert_eq!(next, 0x89AB);
/// assert_eq!(state.fresh_bits(), 32);
/// ```
pub fn next_n_bits<S>(
    n: u32,
    source: &mut S,
    state: RngState,
) -> Result<(u64, RngState), RngError>
where
    S: WordSource + ?Sized,
{
    if n == 0 || n > WORD_BITS {
        return Err(RngError::InvalidWidth { width: n });
    }

    Ok(draw_bits(n, source, state))
}

/// Unchecked field draw for widths already known to be in `[1, 64]`
pub(crate) fn draw_bits<S>(n: u32, source: &mut S, state: RngState) -> (u64, RngState)
where
    S: WordSource + ?Sized,
{
    let fresh = state.fresh_bits();
    let buffer = state.buffer();

    if fresh >= n {
        let value = buffer & low_mask(n);
        let remainder = shift_out(buffer, n);
        return (value, RngState::from_raw(state.seed(), remainder, fresh - n));
    }

    // fresh < n <= 64, so shifting by `fresh` stays in range
    let needed = n - fresh;
    let (word, cursor) = source.next_word(state.seed());
    let value = buffer | ((word & low_mask(needed)) << fresh);
    let remainder = shift_out(word, needed);

    (value, RngState::from_raw(cursor, remainder, WORD_BITS - needed))
}

/// `word >> n`, where shifting out all 64 bits leaves zero
#[inline]
fn shift_out(word: u64, n: u32) -> u64 {
    word.checked_shr(n).unwrap_or(0)
}
