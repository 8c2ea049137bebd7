//! Error taxonomy for state construction and generator preconditions
//!
//! Every variant is a precondition failure detected before any state
//! transition happens, so an error never leaves a half-advanced state behind.

use thiserror::Error;

/// Errors raised by the RNG core
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RngError {
    #[error("Bit width {width} out of range: must be in [1, 64]")]
    InvalidWidth { width: u32 },

    #[error("Exclusive upper bound must be positive")]
    InvalidBound,

    #[error("Invalid range: min {min} must be less than max {max}")]
    InvalidRange { min: u64, max: u64 },

    #[error("Invalid range: min {min} must be less than max {max}")]
    InvalidSignedRange { min: i64, max: i64 },

    #[error("Byte count {count} must be non-negative")]
    InvalidCount { count: i64 },

    #[error("Seed must be strictly positive")]
    InvalidSeed,

    #[error("Fresh bit count {fresh_bits} exceeds 64")]
    InvalidFreshBits { fresh_bits: u32 },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
