//! Option positions: contract terms, side, and the premium they were opened at.

pub mod position;

pub use position::*;
