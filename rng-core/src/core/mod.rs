//! Leaf arithmetic shared by the generators

pub mod wide;
