//! Position indices on a Go board.
//!
//! A [`PositionIndex`] encodes either a point in row-major order at a given
//! side length, or the distinguished PASS move.

use serde::{Deserialize, Serialize};

/// Index of a point on the board, or the PASS sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionIndex(pub u16);

impl PositionIndex {
    /// Sentinel value representing the pass move.
    pub const PASS: PositionIndex = PositionIndex(u16::MAX);

    /// Create a new position index.
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Build an index from board coordinates, row-major.
    #[must_use]
    pub fn from_xy(x: usize, y: usize, side_len: usize) -> Self {
        debug_assert!(x < side_len && y < side_len);
        Self((y * side_len + x) as u16)
    }

    /// Check if this is the PASS sentinel.
    #[inline]
    #[must_use]
    pub const fn is_pass(self) -> bool {
        self.0 == u16::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Column of this point at the given side length.
    #[must_use]
    pub fn x(self, side_len: usize) -> usize {
        debug_assert!(!self.is_pass());
        self.0 as usize % side_len
    }

    /// Row of this point at the given side length.
    #[must_use]
    pub fn y(self, side_len: usize) -> usize {
        debug_assert!(!self.is_pass());
        self.0 as usize / side_len
    }
}

impl std::fmt::Display for PositionIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_pass() {
            write!(f, "PASS")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
