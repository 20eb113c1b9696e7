//! Player abstraction over the UCT search.

use crate::board::Goban;
use crate::core::PositionIndex;
use crate::mcts::{SearchConfig, SearchError, UctSearch};

/// A Go player that picks moves with the parallel UCT search.
///
/// The search precondition is a root with at least one playable point;
/// this wrapper handles the remaining case by passing, so callers can
/// hand it any legal position.
pub struct UctPlayer<B: Goban> {
    search: UctSearch<B>,
}

impl<B: Goban> UctPlayer<B> {
    /// Create a player from the three search parameters.
    pub fn new(
        seed: u64,
        playouts_per_move: u32,
        thread_count: usize,
    ) -> Result<Self, SearchError> {
        let config = SearchConfig::new(seed, playouts_per_move, thread_count);
        Ok(Self {
            search: UctSearch::new(config)?,
        })
    }

    /// The move to play on `board`: PASS when the side to move has no
    /// playable point, the search result otherwise.
    pub fn next_move(&mut self, board: &B) -> PositionIndex {
        if board.playable_indices(board.next_side()).is_empty() {
            return PositionIndex::PASS;
        }
        self.search.choose_move(board)
    }

    /// The underlying search, e.g. for statistics.
    #[must_use]
    pub fn search(&self) -> &UctSearch<B> {
        &self.search
    }

    /// Discard the accumulated tree, e.g. between games.
    pub fn reset(&mut self) {
        self.search.reset();
    }
}
