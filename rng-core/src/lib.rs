//! Bitstream RNG - Rust Engine
//!
//! Deterministic, bit-buffered pseudorandom generation on top of a raw
//! 64-bit word source.
//!
//! # Architecture
//!
//! - **core**: Wide multiplication and bit-pattern reinterpretation
//! - **rng**: Bit buffer state, word sources, pure generators, stateful adapter
//! - **config**: JSON generator configuration
//! - **checkpoint**: Save/restore of generator state
//!
//! # Critical Invariants
//!
//! 1. Generators are pure: `(params, state) -> (value, state)`
//! 2. No bit of a drawn word is returned twice or skipped
//! 3. Precondition failures never advance the state

// Module declarations
pub mod checkpoint;
pub mod config;
pub mod core;
pub mod rng;

// Re-exports for convenience
pub use checkpoint::{CheckpointError, RngCheckpoint};
pub use config::{ConfiguredSource, RngConfig, SourceKind};
pub use crate::core::wide::{as_signed, as_unsigned, mul_high_64};
pub use rng::{
    fill_bytes, next_bool, next_bytes, next_f64, next_i64, next_i64_in, next_n_bits, next_u64,
    next_u64_below, next_u64_in, Bytes, EngineSource, RngError, RngManager, RngState,
    SharedRng, SplitMix64, WordSource, Xorshift64Star, WORD_BITS,
};
