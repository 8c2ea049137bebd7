//! Raw word source capability
//!
//! The generators never know where words come from. A source maps a cursor to
//! the next raw 64-bit word and the advanced cursor; counter-derived sources
//! do this purely, engine adapters keep their own position.

/// Produces raw 64-bit words for the bit buffer
///
/// Implementations must be deterministic and total over non-zero cursors.
/// A zero cursor is never passed in by the core: every state constructor
/// rejects it.
pub trait WordSource {
    /// Draw the word at `cursor` and return it with the advanced cursor
    fn next_word(&mut self, cursor: u64) -> (u64, u64);
}

/// Any `FnMut(cursor) -> (word, next_cursor)` closure is a word source
///
/// # Example
/// ```
/// use bitstream_rng::{next_u64, RngState};
///
/// let mut source = |cursor: u64| -> (u64, u64) { (cursor * 10, cursor + 1) };
/// let state = RngState::from_parts(1, 0, 0).unwrap();
///
/// let (value, state) = next_u64(&mut source, state);
/// assert_eq!(value, 10);
/// assert_eq!(state.seed(), 2);
/// ```
impl<F> WordSource for F
where
    F: FnMut(u64) -> (u64, u64),
{
    fn next_word(&mut self, cursor: u64) -> (u64, u64) {
        self(cursor)
    }
}
