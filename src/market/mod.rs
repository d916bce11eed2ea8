//! Market-side value objects referenced by option positions.

pub mod underlying;

pub use underlying::*;
