//! # goban-uct
//!
//! A Go move-selection engine built on parallel Monte-Carlo Tree Search
//! with the UCT selection rule. Given a legal position, it returns the
//! move its search judges most promising after a bounded number of
//! simulated games.
//!
//! ## Design
//!
//! - **Shared transposition table**: tree nodes are identified by
//!   canonical board state, so distinct move orders reaching the same
//!   position share one record. All workers read and mutate one table
//!   under a single mutex; playouts and board cloning run outside it.
//! - **Worker-spread expansion**: unvisited children are claimed by
//!   worker id and nodes currently being extended are skipped during
//!   selection, so parallel workers avoid duplicating work.
//! - **Board behind a trait**: the search consumes the [`board::Goban`]
//!   contract; [`board::Board`] is the bundled rules implementation.
//!
//! ## Modules
//!
//! - `core`: sides, position indices, per-worker RNG streams
//! - `board`: the board contract and the concrete Go rules
//! - `playout`: random game continuation for leaf evaluation
//! - `mcts`: node records, transposition table, selection, parallel search
//! - `player`: the move-or-pass player wrapper
//!
//! ## Example
//!
//! ```
//! use goban_uct::board::Board;
//! use goban_uct::player::UctPlayer;
//!
//! let board = Board::new(5);
//! let mut player: UctPlayer<Board> = UctPlayer::new(42, 100, 2).unwrap();
//!
//! let mv = player.next_move(&board);
//! assert!(!mv.is_pass());
//! ```

pub mod board;
pub mod core;
pub mod mcts;
pub mod player;
pub mod playout;

// Re-export commonly used types
pub use crate::core::{PositionIndex, SearchRng, Side};

pub use crate::board::{Board, Goban};

pub use crate::playout::Playout;

pub use crate::mcts::{
    max_ucb_child, region_ratio, ucb, NodeRecord, SearchConfig, SearchError, SearchStats,
    TranspositionTable, UctSearch,
};

pub use crate::player::UctPlayer;
