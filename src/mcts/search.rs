//! Coordinator and worker loop for the parallel UCT search.
//!
//! The coordinator spawns `thread_count` workers over one shared
//! transposition table, an atomic playout counter, and an atomic stop
//! flag. Each worker repeatedly selects a root child, descends through
//! the table with UCB selection, resolves the frontier with a playout,
//! and backpropagates the profit with a zero-sum flip at every level.
//! Board cloning and playouts run outside the table mutex.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::time::Instant;

use log::debug;

use crate::board::Goban;
use crate::core::{PositionIndex, SearchRng};
use crate::playout::Playout;

use super::config::{SearchConfig, SearchError};
use super::policy::{max_ucb_child, region_ratio};
use super::record::NodeRecord;
use super::stats::SearchStats;
use super::table::{child_board, TranspositionTable};

/// Shared per-move search state handed to every worker.
struct SearchContext<'a, B: Goban> {
    table: &'a TranspositionTable<B>,
    root: &'a B,
    target: u32,
    mc_game_count: &'a AtomicU32,
    is_end: &'a AtomicBool,
}

/// Parallel UCT move search over a shared transposition table.
///
/// The table lives as long as the search value; callers may reuse it
/// across moves or [`UctSearch::reset`] it, at their discretion.
pub struct UctSearch<B: Goban> {
    config: SearchConfig,
    table: TranspositionTable<B>,
    stats: SearchStats,
}

impl<B: Goban> UctSearch<B> {
    /// Create a search from a validated configuration.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self {
            config,
            table: TranspositionTable::new(),
            stats: SearchStats::default(),
        })
    }

    /// Run the search and return the most-visited root child.
    ///
    /// # Panics
    ///
    /// Panics if `root` has no playable point for the side to move; the
    /// player layer handles that case by passing before the search is
    /// entered.
    pub fn choose_move(&mut self, root: &B) -> PositionIndex {
        assert!(
            !root.playable_indices(root.next_side()).is_empty(),
            "choose_move requires a root with at least one playable point"
        );

        let start = Instant::now();
        let nodes_before = self.table.len();
        self.stats.reset();

        let mc_game_count = AtomicU32::new(0);
        let is_end = AtomicBool::new(false);
        let ctx = SearchContext {
            table: &self.table,
            root,
            target: self.config.playouts_per_move,
            mc_game_count: &mc_game_count,
            is_end: &is_end,
        };

        std::thread::scope(|scope| {
            for worker_id in 0..self.config.thread_count {
                let ctx = &ctx;
                let mut rng = SearchRng::for_worker(self.config.seed, worker_id);
                scope.spawn(move || run_worker(ctx, worker_id, &mut rng));
            }
        });

        self.stats.playouts = mc_game_count.load(Ordering::Relaxed);
        self.stats.nodes_created = (self.table.len() - nodes_before) as u32;
        self.stats.time_us = start.elapsed().as_micros() as u64;

        self.log_root_report(root);
        self.best_child(root)
    }

    /// Per-child `(move, record)` pairs for the root's non-suicide moves,
    /// in playable order. Children the search never reached are omitted.
    #[must_use]
    pub fn root_report(&self, root: &B) -> Vec<(PositionIndex, NodeRecord)> {
        let side = root.next_side();
        root.playable_indices(side)
            .into_iter()
            .filter(|&at| !root.is_suicide(side, at))
            .filter_map(|at| self.table.get_child(root, at).map(|record| (at, record)))
            .collect()
    }

    /// Search statistics for the last `choose_move`.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The search configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The shared transposition table.
    #[must_use]
    pub fn table(&self) -> &TranspositionTable<B> {
        &self.table
    }

    /// Discard accumulated nodes and statistics, e.g. between games.
    pub fn reset(&mut self) {
        self.table.clear();
        self.stats.reset();
    }

    /// Root child with the greatest visit count, ties first-seen.
    ///
    /// # Panics
    ///
    /// Panics if a non-suicide root child has no record: the playout
    /// budget was under-provisioned for the branching factor.
    fn best_child(&self, root: &B) -> PositionIndex {
        let side = root.next_side();
        let mut best = PositionIndex::PASS;
        let mut max_visits = -1i64;
        for at in root.playable_indices(side) {
            if root.is_suicide(side, at) {
                continue;
            }
            let record = self.table.get_child(root, at).unwrap_or_else(|| {
                panic!("no record for root child {at}: playout budget too small")
            });
            if i64::from(record.visits) > max_visits {
                max_visits = i64::from(record.visits);
                best = at;
            }
        }
        best
    }

    fn log_root_report(&self, root: &B) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }
        for (at, record) in self.root_report(root) {
            debug!(
                "root child {at}: visits={} profit={:.3}",
                record.visits, record.average_profit
            );
        }
    }
}

/// One worker's loop: select a root child, extend it, repeat until the
/// shared playout counter reaches its target or the stop flag is raised.
fn run_worker<B: Goban>(ctx: &SearchContext<'_, B>, worker_id: usize, rng: &mut SearchRng) {
    while ctx.mc_game_count.load(Ordering::Relaxed) < ctx.target
        && !ctx.is_end.load(Ordering::Relaxed)
    {
        let mv = max_ucb_child(ctx.table, ctx.root, worker_id);
        let child = child_board(ctx.root, mv);
        run_episode(ctx, child, worker_id, rng);
    }
}

/// Descend from `board`, resolve the frontier, then backpropagate.
///
/// The recursive shape of the algorithm is flattened into a path stack:
/// every in-table node visited on the way down is recorded (and marked
/// in-search under the lock), the frontier is resolved with a playout or
/// a terminal revisit, and the resulting profit is folded back up the
/// path, flipped (`p ← 1 − p`) at each level because profits are stored
/// from the perspective of the side that just moved.
fn run_episode<B: Goban>(
    ctx: &SearchContext<'_, B>,
    mut board: B,
    worker_id: usize,
    rng: &mut SearchRng,
) {
    let mut path: Vec<B> = Vec::new();

    let mut profit = loop {
        match ctx.table.begin_visit(&board) {
            None => {
                // Leaf expansion: evaluate with a playout and install the
                // record with its first sample.
                let scored = if board.is_end() {
                    board.clone()
                } else {
                    let mut playout = Playout::new(board.clone(), rng.playout_rng());
                    playout.run();
                    playout.into_board()
                };
                ctx.mc_game_count.fetch_add(1, Ordering::Relaxed);
                let profit = region_ratio(&scored, board.last_side());
                ctx.table.insert(board, NodeRecord::new(1, profit));
                break profit;
            }
            Some(record) => {
                if board.is_end() {
                    // Terminal revisit: reuse the stored sample unchanged.
                    ctx.mc_game_count.fetch_add(1, Ordering::Relaxed);
                    ctx.table.record_revisit(&board);
                    break record.average_profit;
                }
                let side = board.next_side();
                let next = if board.playable_indices(side).is_empty() {
                    let mut next = board.clone();
                    next.pass(side);
                    next
                } else {
                    child_board(&board, max_ucb_child(ctx.table, &board, worker_id))
                };
                path.push(board);
                board = next;
            }
        }
    };

    for node in path.iter().rev() {
        profit = 1.0 - profit;
        ctx.table.record_sample(node, profit);
    }
}
