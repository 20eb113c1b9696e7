//! Selection policy and scoring helpers for the UCT search.

use crate::board::Goban;
use crate::core::{PositionIndex, Side};

use super::record::NodeRecord;
use super::table::{child_board, TranspositionTable};

// =============================================================================
// Selection
// =============================================================================

/// UCB1 score for a known child:
/// `average_profit + sqrt(2·ln(ΣN) / visits)`.
///
/// `visit_sum` is the total visits over the parent's known children.
#[must_use]
pub fn ucb(record: &NodeRecord, visit_sum: u32) -> f32 {
    debug_assert!(record.visits > 0, "ucb requires a visited record");
    record.average_profit + (2.0 * (visit_sum as f32).ln() / record.visits as f32).sqrt()
}

/// Pick the move a worker should extend from `board`.
///
/// Children absent from the table are claimed per worker id
/// (`unknown[worker_id % len]`) so concurrent workers spread over distinct
/// unvisited moves. Once every child is known, the not-in-search child with
/// the greatest [`ucb`] score wins, ties first-seen. Suicide moves are
/// never returned. Returns [`PositionIndex::PASS`] when every child is
/// in-search or suicidal.
///
/// # Panics
///
/// Panics if `board` has no playable point; callers guarantee otherwise.
pub fn max_ucb_child<B: Goban>(
    table: &TranspositionTable<B>,
    board: &B,
    worker_id: usize,
) -> PositionIndex {
    let side = board.next_side();
    let playable = board.playable_indices(side);
    assert!(!playable.is_empty(), "selection requires a playable point");

    // Child keys are computed before taking the lock; the records are then
    // read under one acquisition so the in_search filter sees a coherent
    // view of the children.
    let children: Vec<(PositionIndex, B)> = playable
        .into_iter()
        .filter(|&at| !board.is_suicide(side, at))
        .map(|at| (at, child_board(board, at)))
        .collect();

    let map = table.lock();

    let mut unknown: Vec<PositionIndex> = Vec::new();
    let mut visit_sum = 0u32;
    for (at, child) in &children {
        match map.get(child) {
            None => unknown.push(*at),
            Some(record) if unknown.is_empty() => visit_sum += record.visits,
            Some(_) => {}
        }
    }

    if !unknown.is_empty() {
        return unknown[worker_id % unknown.len()];
    }

    let mut max_ucb = -1.0f32;
    let mut best = PositionIndex::PASS;
    for (at, child) in &children {
        let Some(record) = map.get(child) else { continue };
        if record.in_search {
            continue;
        }
        let score = ucb(record, visit_sum);
        if score > max_ucb {
            max_ucb = score;
            best = *at;
        }
    }

    best
}

// =============================================================================
// Scoring
// =============================================================================

/// Fraction of the board area controlled by `side` under area scoring.
///
/// For Black this is `black_region / side_len²`; for White, one minus the
/// Black ratio.
#[must_use]
pub fn region_ratio<B: Goban>(board: &B, side: Side) -> f32 {
    let black_ratio = board.black_region() as f32 / board.area() as f32;
    match side {
        Side::Black => black_ratio,
        Side::White => 1.0 - black_ratio,
    }
}
