//! Deterministic bit-buffered random number generation
//!
//! Raw 64-bit words come from a [`WordSource`]; the [`RngState`] buffers the
//! unconsumed bits of the last word; the generators cut bit fields, bounded
//! integers, signed integers, doubles and bytes out of that stream.
//!
//! CRITICAL: every generator is a pure transition. It takes a state by value
//! and returns the result with a new state; nothing is mutated in place.
//! [`RngManager`] is the stateful wrapper for callers that prefer one.

mod bits;
mod bytes;
mod engine;
mod error;
mod generators;
mod manager;
mod source;
mod splitmix;
mod state;
mod xorshift;

pub use bits::next_n_bits;
pub use bytes::{fill_bytes, next_bytes, Bytes};
pub use engine::EngineSource;
pub use error::RngError;
pub use generators::{
    next_bool, next_f64, next_i64, next_i64_in, next_u64, next_u64_below, next_u64_in,
};
pub use manager::{RngManager, SharedRng};
pub use source::WordSource;
pub use splitmix::SplitMix64;
pub use state::{RngState, WORD_BITS};
pub use xorshift::Xorshift64Star;
