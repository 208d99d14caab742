//! Tests for the minimax engine on known positions.

use tactic_core::{AiEngine, Board, Move, Player, SearchMode, minimax};

fn mv(row: usize, col: usize) -> Move {
    Move::new(row, col).expect("in range")
}

fn board(s: &str) -> Board {
    s.parse().expect("valid board")
}

#[test]
fn test_empty_board_is_a_draw_and_prefers_first_corner() {
    let eval = minimax(&Board::new(), false, Player::Two);

    // Optimal play from both sides draws, so every opening scores 0 and
    // the row-major first cell wins the tie.
    assert_eq!(eval.value(), 0);
    assert_eq!(eval.best_move(), Some(mv(0, 0)));
}

#[test]
fn test_ai_blocks_open_row() {
    let mut b = Board::new();
    b.place_mark(mv(0, 0), Player::One).unwrap();
    b.place_mark(mv(0, 1), Player::One).unwrap();

    let mut ai = AiEngine::new(SearchMode::OptimalSearch, Player::Two);
    assert_eq!(ai.select_move(&b).unwrap(), mv(0, 2));
}

#[test]
fn test_ai_blocks_column() {
    // X threatens column 2; O must take (2, 2).
    let b = board("..X|.OX|...");
    let mut ai = AiEngine::new(SearchMode::OptimalSearch, Player::Two);
    assert_eq!(ai.select_move(&b).unwrap(), mv(2, 2));
}

#[test]
fn test_ai_prefers_win_over_block() {
    // O can win on row 1 at (1, 2); X threatens (0, 2) but O moves first.
    let b = board("XX.|OO.|X..");
    let mut ai = AiEngine::new(SearchMode::OptimalSearch, Player::Two);
    assert_eq!(ai.select_move(&b).unwrap(), mv(1, 2));
}

#[test]
fn test_answer_to_corner_opening_is_center() {
    // Every reply except the center loses against a corner opening.
    let b = board("X..|...|...");
    let eval = minimax(&b, false, Player::Two);
    assert_eq!(eval.value(), 0);
    assert_eq!(eval.best_move(), Some(mv(1, 1)));
}

#[test]
fn test_minimax_is_deterministic() {
    let positions = ["X..|...|...", ".X.|...|...", "X..|.O.|..X", "XO.|.X.|..."];
    for s in positions {
        let b = board(s);
        let first = minimax(&b, false, Player::Two);
        for _ in 0..3 {
            assert_eq!(minimax(&b, false, Player::Two), first, "board {s}");
        }

        let mut a = AiEngine::with_seed(SearchMode::OptimalSearch, Player::Two, 1);
        let mut c = AiEngine::with_seed(SearchMode::OptimalSearch, Player::Two, 99);
        assert_eq!(a.select_move(&b).unwrap(), c.select_move(&b).unwrap());
    }
}

#[test]
fn test_select_move_leaves_live_board_untouched() {
    let b = board("X..|.O.|..X");
    let snapshot = b;
    let mut ai = AiEngine::new(SearchMode::OptimalSearch, Player::Two);
    let _ = ai.select_move(&b).unwrap();
    assert_eq!(b, snapshot);
    assert_eq!(b.marked_count(), 3);
}

#[test]
fn test_full_tree_node_count() {
    // Number of positions reachable by legal play when the search stops
    // at wins, counted with repetition, including the empty root.
    let eval = minimax(&Board::new(), false, Player::Two);
    assert_eq!(eval.nodes(), 549_946);
}
