//! Tests for wide multiplication and two's-complement reinterpretation
//!
//! The 128-bit reference is only used here; the library computes the high
//! half from 32-bit partial products.

use bitstream_rng::{as_signed, as_unsigned, mul_high_64};
use proptest::prelude::*;

const SAMPLES: u128 = 100;

/// `i / SAMPLES` of the way through the 64-bit range
fn scaled(i: u128) -> u64 {
    ((i << 64) / SAMPLES) as u64
}

fn reference_mul_high(x: u64, y: u64) -> u64 {
    ((x as u128 * y as u128) >> 64) as u64
}

#[test]
fn test_mul_high_scaled_grid() {
    for i in 0..SAMPLES {
        for j in 0..SAMPLES {
            let (x, y) = (scaled(i), scaled(j));
            assert_eq!(
                mul_high_64(x, y),
                reference_mul_high(x, y),
                "mul_high_64({:#x}, {:#x})",
                x,
                y
            );
        }
    }
}

#[test]
fn test_mul_high_boundaries() {
    let edges = [
        0,
        1,
        0xFFFF_FFFF,
        0x1_0000_0000,
        0x8000_0000_0000_0000,
        0xFFFF_FFFF_0000_0000,
        u64::MAX - 1,
        u64::MAX,
    ];

    for &x in &edges {
        for &y in &edges {
            assert_eq!(mul_high_64(x, y), reference_mul_high(x, y));
        }
    }
}

#[test]
fn test_reinterpretation_literals() {
    assert_eq!(as_signed(0x7FFF_FFFF_FFFF_FFFF), i64::MAX);
    assert_eq!(as_signed(0x8000_0000_0000_0000), i64::MIN);
    assert_eq!(as_signed(0xFFFF_FFFF_FFFF_FFFF), -1);
    assert_eq!(as_unsigned(i64::MIN), 0x8000_0000_0000_0000);
    assert_eq!(as_unsigned(-1), u64::MAX);
}

proptest! {
    #[test]
    fn prop_mul_high_matches_reference(x in any::<u64>(), y in any::<u64>()) {
        prop_assert_eq!(mul_high_64(x, y), reference_mul_high(x, y));
    }

    #[test]
    fn prop_mul_high_commutes(x in any::<u64>(), y in any::<u64>()) {
        prop_assert_eq!(mul_high_64(x, y), mul_high_64(y, x));
    }

    #[test]
    fn prop_unsigned_round_trip(u in any::<u64>()) {
        prop_assert_eq!(as_unsigned(as_signed(u)), u);
    }

    #[test]
    fn prop_signed_round_trip(i in any::<i64>()) {
        prop_assert_eq!(as_signed(as_unsigned(i)), i);
    }
}
