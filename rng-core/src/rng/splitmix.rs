//! SplitMix64 counter source
//!
//! The cursor is a plain draw counter and the word at a counter is a pure
//! function of it, so any position in the stream can be addressed directly.

use serde::{Deserialize, Serialize};

use super::source::WordSource;

const GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Counter-based SplitMix64
///
/// The counter wraps from `u64::MAX` back to 1, keeping the cursor non-zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitMix64;

impl SplitMix64 {
    /// Word at an arbitrary counter position
    pub fn word_at(counter: u64) -> u64 {
        let mut z = counter.wrapping_mul(GAMMA);
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

impl WordSource for SplitMix64 {
    fn next_word(&mut self, cursor: u64) -> (u64, u64) {
        let next = match cursor.wrapping_add(1) {
            0 => 1,
            n => n,
        };
        (Self::word_at(cursor), next)
    }
}
