//! Core engine types: sides, position indices, RNG.
//!
//! This module contains the fundamental building blocks shared by the board,
//! the playout engine, and the search.

pub mod point;
pub mod rng;
pub mod side;

pub use point::PositionIndex;
pub use rng::SearchRng;
pub use side::Side;
