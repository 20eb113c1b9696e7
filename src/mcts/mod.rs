//! Parallel Monte-Carlo Tree Search with UCT selection.
//!
//! ## Overview
//!
//! The search runs `thread_count` workers over one shared
//! [`TranspositionTable`] keyed by canonical board state, so distinct move
//! orders reaching the same position share one [`NodeRecord`]. Key
//! properties:
//!
//! - **Coarse lock, cheap critical sections**: a single mutex protects the
//!   table and its records; playouts and board cloning run outside it.
//! - **Worker spreading**: unvisited children are claimed by worker id and
//!   in-search nodes are skipped during selection, so parallel workers
//!   avoid duplicating each other's expansions.
//! - **Zero-sum backpropagation**: profits are stored from the perspective
//!   of the side that just moved, and flipped (`1 − p`) at each level on
//!   the way back up.
//!
//! ## Usage
//!
//! ```
//! use goban_uct::board::Board;
//! use goban_uct::mcts::{SearchConfig, UctSearch};
//!
//! let config = SearchConfig::new(1, 50, 2);
//! let mut search: UctSearch<Board> = UctSearch::new(config).unwrap();
//!
//! let root = Board::new(5);
//! let mv = search.choose_move(&root);
//! assert!(!mv.is_pass());
//! ```

pub mod config;
pub mod policy;
pub mod record;
pub mod search;
pub mod stats;
pub mod table;

// Re-export main types
pub use config::{SearchConfig, SearchError};
pub use policy::{max_ucb_child, region_ratio, ucb};
pub use record::NodeRecord;
pub use search::UctSearch;
pub use stats::SearchStats;
pub use table::{child_board, TranspositionTable};
