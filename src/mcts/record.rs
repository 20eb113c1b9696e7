//! Per-node search statistics.

use serde::{Deserialize, Serialize};

/// MCTS statistics for one board state.
///
/// `average_profit` is stored from the perspective of the side that has
/// just moved into this state, so a parent reads its own value as
/// `1 - child.average_profit`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Number of playouts that have visited this node.
    pub visits: u32,

    /// Mean observed profit, in `[0, 1]`.
    pub average_profit: f32,

    /// Set while a worker is currently extending this node. Selection
    /// skips in-search nodes so parallel workers spread out.
    pub in_search: bool,
}

impl NodeRecord {
    /// Create a record with an initial sample count and average.
    #[must_use]
    pub fn new(visits: u32, average_profit: f32) -> Self {
        Self {
            visits,
            average_profit,
            in_search: false,
        }
    }

    /// Fold one new sample into the running average:
    /// `avg ← (avg·visits + x) / (visits + 1)`, then `visits ← visits + 1`.
    pub fn update(&mut self, sample: f32) {
        self.average_profit =
            (self.average_profit * self.visits as f32 + sample) / (self.visits + 1) as f32;
        self.visits += 1;
    }

    /// Count a revisit that reuses the stored average without altering it
    /// (terminal states).
    pub fn revisit(&mut self) {
        self.visits += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record() {
        let record = NodeRecord::new(1, 0.75);
        assert_eq!(record.visits, 1);
        assert_eq!(record.average_profit, 0.75);
        assert!(!record.in_search);
    }

    #[test]
    fn test_update_law() {
        let mut record = NodeRecord::new(3, 0.5);
        record.update(0.9);
        assert_eq!(record.visits, 4);
        assert_eq!(record.average_profit, (0.5f32 * 3.0 + 0.9) / 4.0);
    }

    #[test]
    fn test_update_stays_in_range() {
        let mut record = NodeRecord::new(1, 0.0);
        for _ in 0..100 {
            record.update(1.0);
            assert!((0.0..=1.0).contains(&record.average_profit));
        }
        assert_eq!(record.visits, 101);
    }

    #[test]
    fn test_revisit_keeps_average() {
        let mut record = NodeRecord::new(5, 0.6);
        record.revisit();
        assert_eq!(record.visits, 6);
        assert_eq!(record.average_profit, 0.6);
    }

    #[test]
    fn test_serde_round_trip() {
        let record = NodeRecord::new(7, 0.25);
        let json = serde_json::to_string(&record).unwrap();
        let back: NodeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
