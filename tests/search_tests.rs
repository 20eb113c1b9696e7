//! End-to-end search scenarios on the bundled board.

use goban_uct::board::{Board, Goban};
use goban_uct::core::{PositionIndex, Side};
use goban_uct::mcts::{max_ucb_child, SearchConfig, TranspositionTable, UctSearch};
use goban_uct::player::UctPlayer;

fn p(x: usize, y: usize, side_len: usize) -> PositionIndex {
    PositionIndex::from_xy(x, y, side_len)
}

/// Every record in the table satisfies the post-search invariants.
fn assert_table_invariants(search: &UctSearch<Board>) {
    for record in search.table().snapshot() {
        assert!(record.visits >= 1, "record with zero visits");
        assert!(
            (0.0..=1.0).contains(&record.average_profit),
            "profit {} out of range",
            record.average_profit
        );
        assert!(!record.in_search, "in_search left set after join");
    }
}

// =============================================================================
// Single thread, tiny playout target
// =============================================================================

#[test]
fn test_single_thread_tiny_budget() {
    let config = SearchConfig::new(1, 10, 1);
    let mut search: UctSearch<Board> = UctSearch::new(config).unwrap();
    let root = Board::new(3);

    let mv = search.choose_move(&root);

    // The returned move is one of the nine points.
    assert!(root.playable_indices(Side::Black).contains(&mv));

    // All nine root-child records exist.
    for at in root.playable_indices(Side::Black) {
        assert!(
            search.table().get_child(&root, at).is_some(),
            "root child {at} missing"
        );
    }

    // Visit-count conservation: at least one visit per playout.
    let total_visits: u64 = search
        .table()
        .snapshot()
        .iter()
        .map(|record| u64::from(record.visits))
        .sum();
    assert!(total_visits >= 10, "only {total_visits} visits recorded");
}

// =============================================================================
// Determinism of single-thread searches
// =============================================================================

#[test]
fn test_single_thread_determinism() {
    let first = {
        let config = SearchConfig::new(1, 50, 1);
        let mut search: UctSearch<Board> = UctSearch::new(config).unwrap();
        search.choose_move(&Board::new(3))
    };
    let second = {
        let config = SearchConfig::new(1, 50, 1);
        let mut search: UctSearch<Board> = UctSearch::new(config).unwrap();
        search.choose_move(&Board::new(3))
    };

    assert_eq!(first, second, "fresh identical searches must agree");
}

// =============================================================================
// Multi-thread convergence
// =============================================================================

#[test]
fn test_multi_thread_agrees_with_single_thread() {
    let root = Board::new(3);

    let single = {
        let config = SearchConfig::new(1, 400, 1);
        let mut search: UctSearch<Board> = UctSearch::new(config).unwrap();
        search.choose_move(&root)
    };
    let multi = {
        let config = SearchConfig::new(1, 400, 4);
        let mut search: UctSearch<Board> = UctSearch::new(config).unwrap();
        search.choose_move(&root)
    };

    assert_eq!(single, multi, "visit distribution should concentrate");
}

// =============================================================================
// Forced pass is handled above the search
// =============================================================================

fn full_board() -> Board {
    let stones: Vec<(PositionIndex, Side)> = (0..4u16)
        .map(|i| {
            let side = if i % 2 == 0 { Side::Black } else { Side::White };
            (PositionIndex::new(i), side)
        })
        .collect();
    Board::with_stones(2, &stones, Side::Black)
}

#[test]
#[should_panic(expected = "playable point")]
fn test_search_rejects_root_without_moves() {
    let config = SearchConfig::new(1, 10, 1);
    let mut search: UctSearch<Board> = UctSearch::new(config).unwrap();
    search.choose_move(&full_board());
}

#[test]
fn test_player_passes_instead_of_searching() {
    let mut player: UctPlayer<Board> = UctPlayer::new(1, 10, 1).unwrap();
    assert_eq!(player.next_move(&full_board()), PositionIndex::PASS);
}

// =============================================================================
// Suicide avoidance
// =============================================================================

/// 5x5 position whose only suicide candidate for Black is the corner (0,0).
fn single_suicide_board() -> (Board, PositionIndex) {
    let board = Board::with_stones(
        5,
        &[(p(1, 0, 5), Side::White), (p(0, 1, 5), Side::White)],
        Side::Black,
    );
    let suicide = p(0, 0, 5);
    assert!(board.is_suicide(Side::Black, suicide));
    (board, suicide)
}

#[test]
fn test_suicide_candidate_never_returned() {
    let (root, suicide) = single_suicide_board();

    for seed in [1, 7, 42] {
        let config = SearchConfig::new(seed, 100, 2);
        let mut search: UctSearch<Board> = UctSearch::new(config).unwrap();
        let mv = search.choose_move(&root);
        assert_ne!(mv, suicide, "seed {seed} returned the suicide move");
        assert!(root.playable_indices(Side::Black).contains(&mv));
    }
}

#[test]
fn test_selector_never_returns_suicide_on_root() {
    let (root, suicide) = single_suicide_board();
    let table: TranspositionTable<Board> = TranspositionTable::new();

    // Across worker ids, before and after the root children are known.
    for worker_id in 0..32 {
        assert_ne!(max_ucb_child(&table, &root, worker_id), suicide);
    }

    let config = SearchConfig::new(1, 100, 1);
    let mut search: UctSearch<Board> = UctSearch::new(config).unwrap();
    search.choose_move(&root);
    for worker_id in 0..32 {
        assert_ne!(max_ucb_child(search.table(), &root, worker_id), suicide);
    }
}

// =============================================================================
// Invariant sweep after any search
// =============================================================================

#[test]
fn test_invariants_after_single_thread_search() {
    let config = SearchConfig::new(3, 60, 1);
    let mut search: UctSearch<Board> = UctSearch::new(config).unwrap();
    search.choose_move(&Board::new(3));
    assert_table_invariants(&search);
}

#[test]
fn test_invariants_after_multi_thread_search() {
    let config = SearchConfig::new(3, 200, 4);
    let mut search: UctSearch<Board> = UctSearch::new(config).unwrap();
    search.choose_move(&Board::new(3));
    assert_table_invariants(&search);
}

#[test]
fn test_invariants_on_midgame_position() {
    let mut root = Board::new(5);
    root.play(p(2, 2, 5));
    root.play(p(1, 1, 5));
    root.play(p(3, 1, 5));

    let config = SearchConfig::new(5, 120, 2);
    let mut search: UctSearch<Board> = UctSearch::new(config).unwrap();
    let mv = search.choose_move(&root);

    assert!(root.playable_indices(Side::White).contains(&mv));
    assert_table_invariants(&search);
}

// =============================================================================
// Counter and statistics
// =============================================================================

#[test]
fn test_playout_counter_reaches_target() {
    let config = SearchConfig::new(2, 80, 3);
    let mut search: UctSearch<Board> = UctSearch::new(config).unwrap();
    search.choose_move(&Board::new(3));

    let stats = search.stats();
    assert!(stats.playouts >= 80, "stopped at {} playouts", stats.playouts);
    assert!(stats.nodes_created > 0);
}

#[test]
fn test_best_child_has_max_visits() {
    let config = SearchConfig::new(4, 100, 1);
    let mut search: UctSearch<Board> = UctSearch::new(config).unwrap();
    let root = Board::new(3);

    let mv = search.choose_move(&root);

    let report = search.root_report(&root);
    let max_visits = report.iter().map(|(_, r)| r.visits).max().unwrap();
    let chosen_visits = report
        .iter()
        .find(|(at, _)| *at == mv)
        .map(|(_, r)| r.visits)
        .unwrap();
    assert_eq!(chosen_visits, max_visits);
}

// =============================================================================
// Table reuse across moves
// =============================================================================

#[test]
fn test_table_reused_across_moves() {
    let config = SearchConfig::new(1, 40, 2);
    let mut search: UctSearch<Board> = UctSearch::new(config).unwrap();

    let root = Board::new(3);
    let first = search.choose_move(&root);
    let after_first = search.table().len();

    let mut next = root.clone();
    next.play(first);
    let second = search.choose_move(&next);

    assert!(next.playable_indices(Side::White).contains(&second));
    assert!(search.table().len() >= after_first);
    assert_table_invariants(&search);
}

// =============================================================================
// Configuration round-trips
// =============================================================================

#[test]
fn test_config_serialization() {
    let config = SearchConfig::new(9, 250, 3);
    let json = serde_json::to_string(&config).unwrap();
    let back: SearchConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(back.seed, 9);
    assert_eq!(back.playouts_per_move, 250);
    assert_eq!(back.thread_count, 3);
}
