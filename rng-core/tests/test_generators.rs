//! Tests for the derived generators
//!
//! Mocked sources pin the exact mapping of raw words to results; seeded
//! sources check ranges and rough uniformity.

use bitstream_rng::{
    next_bytes, next_f64, next_i64, next_i64_in, next_u64, next_u64_below, next_u64_in,
    RngError, RngState, SplitMix64, Xorshift64Star,
};
use proptest::prelude::*;

fn constant_source(word: u64) -> impl FnMut(u64) -> (u64, u64) {
    move |cursor| (word, cursor + 1)
}

fn empty_state() -> RngState {
    RngState::from_parts(1, 0x0123_4567_89AB_CDEF, 0).unwrap()
}

// ============================================================================
// Exact mappings
// ============================================================================

#[test]
fn test_next_u64_draws_whole_word() {
    let (value, state) = next_u64(&mut constant_source(0x0123_4567_89AB_CDEF), empty_state());
    assert_eq!(value, 0x0123_4567_89AB_CDEF);
    assert_eq!(state.seed(), 2);
}

#[test]
fn test_below_maps_extremes() {
    let (top, state) = next_u64_below(100, &mut constant_source(u64::MAX), empty_state()).unwrap();
    assert_eq!(top, 99);
    assert_eq!(state.seed(), 2);

    let (bottom, _) = next_u64_below(100, &mut constant_source(u64::MIN), empty_state()).unwrap();
    assert_eq!(bottom, 0);
}

#[test]
fn test_in_maps_extremes() {
    let (top, state) =
        next_u64_in(100, 200, &mut constant_source(u64::MAX), empty_state()).unwrap();
    assert_eq!(top, 199);
    assert_eq!(state.seed(), 2);

    let (bottom, _) = next_u64_in(100, 200, &mut constant_source(0), empty_state()).unwrap();
    assert_eq!(bottom, 100);
}

#[test]
fn test_below_midpoint() {
    // 2^63 is exactly half of the 64-bit space
    let (mid, _) =
        next_u64_below(100, &mut constant_source(0x8000_0000_0000_0000), empty_state()).unwrap();
    assert_eq!(mid, 50);
}

#[test]
fn test_signed_mapping() {
    let cases = [
        (0u64, 0i64),
        (0x7FFF_FFFF_FFFF_FFFF, i64::MAX),
        (0x8000_0000_0000_0000, i64::MIN),
        (0xFFFF_FFFF_FFFF_FFFF, -1),
    ];

    for (raw, expected) in cases {
        let (value, _) = next_i64(&mut constant_source(raw), empty_state());
        assert_eq!(value, expected, "raw {:#x}", raw);
    }
}

#[test]
fn test_double_range() {
    let (zero, _) = next_f64(&mut constant_source(0), empty_state());
    assert_eq!(zero, 0.0);

    let (top, _) = next_f64(&mut constant_source(u64::MAX), empty_state());
    assert!(top < 1.0);
    // Largest f64 below 1.0
    assert_eq!(top, 1.0 - 2f64.powi(-53));

    let (half, _) = next_f64(&mut constant_source(1 << 63), empty_state());
    assert_eq!(half, 0.5);
}

#[test]
fn test_double_smallest_draws_not_truncated() {
    let (smallest, _) = next_f64(&mut constant_source(1), empty_state());
    assert_eq!(smallest, 2f64.powi(-64));
    assert!(smallest > 0.0);

    // Below 2^11 a 53-bit truncation would collapse everything to zero
    let (below_2_11, _) = next_f64(&mut constant_source(2047), empty_state());
    assert_eq!(below_2_11, 2047.0 / 18_446_744_073_709_551_616.0);
}

#[test]
fn test_double_rounding_to_one_is_pinned() {
    // Draws within 1023 of u64::MAX round to 2^64 as an f64
    for raw in [u64::MAX, u64::MAX - 1, u64::MAX - 1023] {
        let (value, _) = next_f64(&mut constant_source(raw), empty_state());
        assert_eq!(value, 1.0 - 2f64.powi(-53), "raw {:#x}", raw);
    }
}

// ============================================================================
// Preconditions
// ============================================================================

#[test]
fn test_error_preconditions() {
    let state = empty_state();
    let mut source = constant_source(42);

    assert_eq!(
        next_u64_below(0, &mut source, state),
        Err(RngError::InvalidBound)
    );
    assert_eq!(
        next_u64_in(200, 100, &mut source, state),
        Err(RngError::InvalidRange { min: 200, max: 100 })
    );
    assert_eq!(
        next_i64_in(0, 0, &mut source, state),
        Err(RngError::InvalidSignedRange { min: 0, max: 0 })
    );
    assert_eq!(
        next_bytes(-1, &mut source, state).err(),
        Some(RngError::InvalidCount { count: -1 })
    );
    assert_eq!(RngState::new(0), Err(RngError::InvalidSeed));
}

#[test]
fn test_errors_do_not_touch_source() {
    let mut draws = 0;
    let mut source = |cursor: u64| -> (u64, u64) {
        draws += 1;
        (cursor, cursor + 1)
    };
    let state = empty_state();

    let _ = next_u64_below(0, &mut source, state);
    let _ = next_u64_in(9, 3, &mut source, state);
    let _ = next_i64_in(9, -3, &mut source, state);
    let _ = next_bytes(-10, &mut source, state);

    assert_eq!(draws, 0);
}

// ============================================================================
// Bytes
// ============================================================================

#[test]
fn test_bytes_count_exact() {
    let mut source = Xorshift64Star;
    let mut state = RngState::new(0x5EED).unwrap();

    for count in [0i64, 1, 7, 8, 9, 100, 1000] {
        let bytes = next_bytes(count, &mut source, state).unwrap();
        assert_eq!(bytes.len() as i64, count);

        let (collected, next) = bytes.into_parts();
        assert_eq!(collected.len() as i64, count);
        state = next;
    }
}

#[test]
fn test_bytes_restart_by_state() {
    let mut source = SplitMix64;
    let start = RngState::new(77).unwrap();

    let (first, _) = next_bytes(64, &mut source, start).unwrap().into_parts();
    let (again, _) = next_bytes(64, &mut source, start).unwrap().into_parts();

    assert_eq!(first, again);
}

#[test]
fn test_bytes_then_u64_continue_stream() {
    let mut source = constant_source(0x1122_3344_5566_7788);
    let state = RngState::from_parts(1, 0, 0).unwrap();

    let (bytes, state) = next_bytes(3, &mut source, state).unwrap().into_parts();
    assert_eq!(bytes, vec![0x88, 0x77, 0x66]);

    let (value, state) = next_u64(&mut source, state);
    assert_eq!(value, 0x6677_8811_2233_4455);
    assert_eq!(state.fresh_bits(), 40);
}

// ============================================================================
// Distribution sanity
// ============================================================================

#[test]
fn test_below_roughly_uniform() {
    let mut source = Xorshift64Star;
    let mut state = RngState::new(12345).unwrap();
    let mut counts = [0usize; 10];

    for _ in 0..10_000 {
        let (value, next) = next_u64_below(10, &mut source, state).unwrap();
        counts[value as usize] += 1;
        state = next;
    }

    for (bucket, &count) in counts.iter().enumerate() {
        assert!(
            (850..=1150).contains(&count),
            "bucket {} has {} of 10000 draws",
            bucket,
            count
        );
    }
}

#[test]
fn test_single_value_range() {
    let mut source = Xorshift64Star;
    let mut state = RngState::new(12345).unwrap();

    for _ in 0..20 {
        let (value, next) = next_u64_in(5, 6, &mut source, state).unwrap();
        assert_eq!(value, 5);
        state = next;
    }
}

proptest! {
    #[test]
    fn prop_below_stays_in_bound(raw in any::<u64>(), bound in 1u64..) {
        let (value, _) = next_u64_below(bound, &mut constant_source(raw), empty_state()).unwrap();
        prop_assert!(value < bound);
    }

    #[test]
    fn prop_in_stays_in_range(raw in any::<u64>(), min in any::<u64>(), width in 1u64..1_000_000) {
        let max = min.saturating_add(width);
        prop_assume!(min < max);
        let (value, _) = next_u64_in(min, max, &mut constant_source(raw), empty_state()).unwrap();
        prop_assert!(min <= value && value < max);
    }

    #[test]
    fn prop_signed_in_stays_in_range(raw in any::<u64>(), a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(a != b);
        let (min, max) = if a < b { (a, b) } else { (b, a) };
        let (value, _) = next_i64_in(min, max, &mut constant_source(raw), empty_state()).unwrap();
        prop_assert!(min <= value && value < max);
    }

    #[test]
    fn prop_double_in_unit_interval(raw in any::<u64>()) {
        let (value, _) = next_f64(&mut constant_source(raw), empty_state());
        prop_assert!((0.0..1.0).contains(&value));
    }
}
