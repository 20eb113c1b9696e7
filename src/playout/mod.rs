//! Monte-Carlo playouts: random continuation of a game to a terminal state.
//!
//! A playout plays uniformly random legal moves until two consecutive
//! passes, skipping suicides and single-point own eyes so random games
//! finish instead of cycling through self-capture. A move-count cap bounds
//! pathological repetition.

use crate::board::Goban;
use crate::core::{PositionIndex, SearchRng, Side};

/// Moves allowed per playout, as a multiple of the board area.
const MAX_GAME_LEN_FACTOR: usize = 3;

/// A single-use random game from a starting position.
pub struct Playout<B: Goban> {
    board: B,
    rng: SearchRng,
    moves_played: usize,
}

impl<B: Goban> Playout<B> {
    /// Create a playout from a starting board and its per-playout RNG.
    #[must_use]
    pub fn new(board: B, rng: SearchRng) -> Self {
        Self {
            board,
            rng,
            moves_played: 0,
        }
    }

    /// Drive the board to a terminal state (or the move cap).
    pub fn run(&mut self) {
        let cap = self.board.area() * MAX_GAME_LEN_FACTOR;
        while !self.board.is_end() && self.moves_played < cap {
            let side = self.board.next_side();
            match self.choose_move(side) {
                Some(at) => self.board.play(at),
                None => self.board.pass(side),
            }
            self.moves_played += 1;
        }
    }

    /// A uniformly random playable point that is neither suicide nor a
    /// single-point own eye, or `None` to pass.
    fn choose_move(&mut self, side: Side) -> Option<PositionIndex> {
        let candidates: Vec<PositionIndex> = self
            .board
            .playable_indices(side)
            .into_iter()
            .filter(|&at| !self.board.is_suicide(side, at) && !self.board.is_own_eye(side, at))
            .collect();
        self.rng.choose(&candidates).copied()
    }

    /// The board in its current (after `run`, terminal) state.
    #[must_use]
    pub fn board(&self) -> &B {
        &self.board
    }

    /// Consume the playout, returning the final board.
    #[must_use]
    pub fn into_board(self) -> B {
        self.board
    }

    /// Moves played so far.
    #[must_use]
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }
}
