//! Concurrent transposition table mapping board states to node records.
//!
//! The table is the identity of tree nodes: distinct move orders reaching
//! the same position share one record. A single mutex guards the map and
//! every record in it; statistics are updated in place under the lock and
//! re-looked-up by board key on each touch, so no handle into the map ever
//! outlives a critical section. Board cloning and playouts run outside the
//! mutex.

use parking_lot::{Mutex, MutexGuard};
use rustc_hash::FxHashMap;

use super::record::NodeRecord;
use crate::board::Goban;
use crate::core::PositionIndex;

/// The board reached from `board` by playing `mv`, or by passing when `mv`
/// is the PASS sentinel.
#[must_use]
pub fn child_board<B: Goban>(board: &B, mv: PositionIndex) -> B {
    let mut child = board.clone();
    if mv.is_pass() {
        child.pass(child.next_side());
    } else {
        child.play(mv);
    }
    child
}

/// Mapping from canonical board state to [`NodeRecord`].
///
/// Records are inserted on first visit and mutated in place thereafter;
/// nothing is erased during a search, so visit counts only grow.
pub struct TranspositionTable<B: Goban> {
    map: Mutex<FxHashMap<B, NodeRecord>>,
}

impl<B: Goban> TranspositionTable<B> {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            map: Mutex::new(FxHashMap::default()),
        }
    }

    /// Number of records in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.lock().len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.lock().is_empty()
    }

    /// Discard every record, e.g. between moves.
    pub fn clear(&self) {
        self.map.lock().clear();
    }

    /// Snapshot of the record for `board`, or `None`.
    #[must_use]
    pub fn get(&self, board: &B) -> Option<NodeRecord> {
        self.map.lock().get(board).copied()
    }

    /// Snapshot of the record for the state reached by playing `mv` on
    /// `board`, or `None`.
    #[must_use]
    pub fn get_child(&self, board: &B, mv: PositionIndex) -> Option<NodeRecord> {
        self.get(&child_board(board, mv))
    }

    /// Install the record for a first visit.
    ///
    /// Two workers can race to expand the same state; the loser folds its
    /// sample into the existing record through the update law instead of
    /// clobbering it, so no playout result is lost.
    pub fn insert(&self, board: B, record: NodeRecord) {
        use std::collections::hash_map::Entry;

        match self.map.lock().entry(board) {
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
            Entry::Occupied(mut slot) => {
                slot.get_mut().update(record.average_profit);
            }
        }
    }

    /// If a record exists for `board`, mark it in-search and return a
    /// snapshot taken under the lock.
    pub(crate) fn begin_visit(&self, board: &B) -> Option<NodeRecord> {
        self.map.lock().get_mut(board).map(|record| {
            record.in_search = true;
            *record
        })
    }

    /// Fold a backpropagated sample into `board`'s record and clear its
    /// in-search mark.
    pub(crate) fn record_sample(&self, board: &B, profit: f32) {
        if let Some(record) = self.map.lock().get_mut(board) {
            record.update(profit);
            record.in_search = false;
        }
    }

    /// Count a terminal revisit of `board` and clear its in-search mark.
    pub(crate) fn record_revisit(&self, board: &B) {
        if let Some(record) = self.map.lock().get_mut(board) {
            record.revisit();
            record.in_search = false;
        }
    }

    /// Copies of every record, for diagnostics and invariant checks.
    #[must_use]
    pub fn snapshot(&self) -> Vec<NodeRecord> {
        self.map.lock().values().copied().collect()
    }

    /// Lock the underlying map for a compound read, e.g. one coherent
    /// child-enumeration pass during selection.
    pub(crate) fn lock(&self) -> MutexGuard<'_, FxHashMap<B, NodeRecord>> {
        self.map.lock()
    }
}

impl<B: Goban> Default for TranspositionTable<B> {
    fn default() -> Self {
        Self::new()
    }
}
