//! Board contract consumed by the search, plus the bundled implementation.
//!
//! The search never touches Go rules directly; it talks to a [`Goban`].
//! [`Board`] is the concrete implementation shipped with the crate.

pub mod grid;

pub use grid::Board;

use crate::core::{PositionIndex, Side};

/// Contract between the search and a Go board representation.
///
/// Equality and hashing must identify canonical board states: same stones,
/// same side to move, and whatever ko/history bits the implementation
/// encodes. The transposition table is keyed on this equality.
pub trait Goban: Clone + Eq + std::hash::Hash + Send + Sync {
    /// Board side length.
    fn side_len(&self) -> usize;

    /// Number of points on the board (`side_len²`).
    fn area(&self) -> usize {
        self.side_len() * self.side_len()
    }

    /// The side to move.
    fn next_side(&self) -> Side;

    /// The side that moved (or passed) last.
    fn last_side(&self) -> Side;

    /// Playable point indices for `side`: empty and not ko-forbidden.
    ///
    /// The result may include suicide moves; callers filter with
    /// [`Goban::is_suicide`].
    fn playable_indices(&self, side: Side) -> Vec<PositionIndex>;

    /// Whether placing a stone of `side` at `at` would be suicide.
    fn is_suicide(&self, side: Side, at: PositionIndex) -> bool;

    /// Whether every neighbor of `at` holds a stone of `side`.
    ///
    /// Playouts skip such points so random games cannot fill their own
    /// eyes and cycle forever.
    fn is_own_eye(&self, side: Side, at: PositionIndex) -> bool;

    /// Whether the game has ended (two consecutive passes).
    fn is_end(&self) -> bool;

    /// Points controlled by Black under area scoring: Black stones plus
    /// empty regions bordered exclusively by Black.
    fn black_region(&self) -> usize;

    /// Play a stone at `at` for the side to move.
    ///
    /// `at` must be a playable, non-suicide point.
    fn play(&mut self, at: PositionIndex);

    /// Pass for `side`, which must be the side to move.
    fn pass(&mut self, side: Side);
}
