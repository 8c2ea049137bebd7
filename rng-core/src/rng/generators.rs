//! Derived generators
//!
//! Every generator here is a pure transition `(params, state) -> (value,
//! state)` built on [`next_n_bits`](super::bits::next_n_bits). Parameter
//! checks run before the state is read.
//!
//! # Range reduction
//!
//! Bounded draws use high-bits-of-product scaling: a full 64-bit draw `v` is
//! mapped to `[0, bound)` as the high half of `v * bound`. There is no modulo
//! and no rejection loop, so each bounded draw consumes exactly 64 bits. The
//! price is a skew of at most `bound / 2^64` between outcomes, which is
//! accepted as-is.

use crate::core::wide::{as_signed, as_unsigned, mul_high_64};

use super::bits::draw_bits;
use super::error::RngError;
use super::source::WordSource;
use super::state::{RngState, WORD_BITS};

/// `2^-64`, mapping a full 64-bit draw onto `[0.0, 1.0]`
const F64_SCALE: f64 = 1.0 / 18_446_744_073_709_551_616.0;

/// Largest `f64` strictly below 1.0
const F64_BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Draw a full 64-bit value
pub fn next_u64<S>(source: &mut S, state: RngState) -> (u64, RngState)
where
    S: WordSource + ?Sized,
{
    draw_bits(WORD_BITS, source, state)
}

/// Draw a value in `[0, max_exclusive)`
///
/// # Errors
/// [`RngError::InvalidBound`] if `max_exclusive` is zero.
///
/// # Example
/// ```
/// use bitstream_rng::{next_u64_below, RngState};
///
/// let mut source = |cursor: u64| -> (u64, u64) { (u64::MAX, cursor + 1) };
/// let state = RngState::from_parts(1, 0, 0).unwrap();
///
/// let (value, _) = next_u64_below(100, &mut source, state).unwrap();
/// assert_eq!(value, 99);
/// ```
pub fn next_u64_below<S>(
    max_exclusive: u64,
    source: &mut S,
    state: RngState,
) -> Result<(u64, RngState), RngError>
where
    S: WordSource + ?Sized,
{
    if max_exclusive == 0 {
        return Err(RngError::InvalidBound);
    }

    let (value, state) = next_u64(source, state);
    Ok((mul_high_64(value, max_exclusive), state))
}

/// Draw a value in `[min_inclusive, max_exclusive)`
///
/// # Errors
/// [`RngError::InvalidRange`] if `min_inclusive >= max_exclusive`.
pub fn next_u64_in<S>(
    min_inclusive: u64,
    max_exclusive: u64,
    source: &mut S,
    state: RngState,
) -> Result<(u64, RngState), RngError>
where
    S: WordSource + ?Sized,
{
    if max_exclusive <= min_inclusive {
        return Err(RngError::InvalidRange {
            min: min_inclusive,
            max: max_exclusive,
        });
    }

    let (offset, state) = next_u64_below(max_exclusive - min_inclusive, source, state)?;
    Ok((min_inclusive + offset, state))
}

/// Draw a full-range signed value
///
/// The 64 drawn bits are reinterpreted as two's complement, so every `i64`
/// is equally likely.
pub fn next_i64<S>(source: &mut S, state: RngState) -> (i64, RngState)
where
    S: WordSource + ?Sized,
{
    let (value, state) = next_u64(source, state);
    (as_signed(value), state)
}

/// Draw a signed value in `[min_inclusive, max_exclusive)`
///
/// # Errors
/// [`RngError::InvalidSignedRange`] if `min_inclusive >= max_exclusive`.
pub fn next_i64_in<S>(
    min_inclusive: i64,
    max_exclusive: i64,
    source: &mut S,
    state: RngState,
) -> Result<(i64, RngState), RngError>
where
    S: WordSource + ?Sized,
{
    if max_exclusive <= min_inclusive {
        return Err(RngError::InvalidSignedRange {
            min: min_inclusive,
            max: max_exclusive,
        });
    }

    // Width of the range on the bit patterns; fits in u64 for any min < max
    let span = as_unsigned(max_exclusive).wrapping_sub(as_unsigned(min_inclusive));
    let (offset, state) = next_u64_below(span, source, state)?;
    Ok((min_inclusive.wrapping_add(as_signed(offset)), state))
}

/// Draw a single bit as a `bool`
pub fn next_bool<S>(source: &mut S, state: RngState) -> (bool, RngState)
where
    S: WordSource + ?Sized,
{
    let (bit, state) = draw_bits(1, source, state);
    (bit == 1, state)
}

/// Draw a uniform `f64` in `[0.0, 1.0)`
///
/// The 64-bit draw is divided by `2^64` in floating point, so small draws
/// keep their low bits (`1` maps to `2^-64`). Draws close enough to
/// `u64::MAX` round up to `1.0`; those are pinned to the largest `f64` below
/// 1.0 so the interval stays half-open.
///
/// # Example
/// ```
/// use bitstream_rng::{next_f64, RngState, Xorshift64Star};
///
/// let state = RngState::new(12345).unwrap();
/// let (probability, _) = next_f64(&mut Xorshift64Star, state);
/// assert!(probability >= 0.0 && probability < 1.0);
/// ```
pub fn next_f64<S>(source: &mut S, state: RngState) -> (f64, RngState)
where
    S: WordSource + ?Sized,
{
    let (value, state) = next_u64(source, state);
    let scaled = value as f64 * F64_SCALE;
    if scaled < 1.0 {
        (scaled, state)
    } else {
        (F64_BELOW_ONE, state)
    }
}
