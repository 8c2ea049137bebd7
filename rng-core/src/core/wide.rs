//! Wide multiplication and bit-pattern reinterpretation
//!
//! Leaf arithmetic used by the range-reduction and signed generators.
//! Everything here is pure and stateless.

const LOW_32: u64 = 0xFFFF_FFFF;

/// High 64 bits of the exact 128-bit product `x * y`
///
/// Computed from four 32×32→64 partial products so the result does not
/// depend on native 128-bit arithmetic.
///
/// # Example
/// ```
/// use bitstream_rng::core::wide::mul_high_64;
///
/// assert_eq!(mul_high_64(u64::MAX, 100), 99);
/// assert_eq!(mul_high_64(1 << 32, 1 << 32), 1);
/// ```
pub fn mul_high_64(x: u64, y: u64) -> u64 {
    let (x_hi, x_lo) = (x >> 32, x & LOW_32);
    let (y_hi, y_lo) = (y >> 32, y & LOW_32);

    let lo_lo = x_lo * y_lo;
    let lo_hi = x_lo * y_hi;
    let hi_lo = x_hi * y_lo;
    let hi_hi = x_hi * y_hi;

    // Bits 32..96 of the product; at most 3 * (2^32 - 1), no overflow
    let middle = (lo_lo >> 32) + (lo_hi & LOW_32) + (hi_lo & LOW_32);

    hi_hi + (lo_hi >> 32) + (hi_lo >> 32) + (middle >> 32)
}

/// Reinterpret the bit pattern of `u` as a two's-complement `i64`
///
/// `0x8000_0000_0000_0000` becomes `i64::MIN`, `u64::MAX` becomes `-1`.
#[inline]
pub fn as_signed(u: u64) -> i64 {
    // Same-width `as` casts keep the bit pattern unchanged
    u as i64
}

/// Reinterpret the bit pattern of `i` as a `u64`
#[inline]
pub fn as_unsigned(i: i64) -> u64 {
    i as u64
}
