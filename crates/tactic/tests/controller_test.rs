//! Tests for the game controller.

use tactic::{Controller, GameConfig, GameMode, PlayError};
use tactic_core::{AiEngine, Cell, GameOutcome, Move, MoveError, Player, SearchMode};

fn mv(row: usize, col: usize) -> Move {
    Move::new(row, col).expect("in range")
}

fn pvp() -> Controller {
    let ai = AiEngine::with_seed(SearchMode::OptimalSearch, Player::Two, 0);
    Controller::new(GameMode::PlayerVsPlayer, Player::One, ai)
}

#[test]
fn test_players_alternate() {
    let mut game = pvp();
    assert_eq!(game.to_move(), Player::One);

    game.play(mv(1, 1)).unwrap();
    assert_eq!(game.to_move(), Player::Two);
    game.play(mv(0, 0)).unwrap();
    assert_eq!(game.to_move(), Player::One);

    assert_eq!(game.board().get(mv(1, 1)), Cell::Marked(Player::One));
    assert_eq!(game.board().get(mv(0, 0)), Cell::Marked(Player::Two));
}

#[test]
fn test_occupied_cell_rejected_without_changing_turn() {
    let mut game = pvp();
    game.play(mv(1, 1)).unwrap();

    let result = game.play(mv(1, 1));
    assert_eq!(result, Err(PlayError::Move(MoveError::Occupied(mv(1, 1)))));
    assert_eq!(game.to_move(), Player::Two);
    assert_eq!(game.board().marked_count(), 1);
}

#[test]
fn test_win_stops_the_game() {
    let mut game = pvp();
    for cell in [mv(0, 0), mv(1, 0), mv(0, 1), mv(1, 1)] {
        assert_eq!(game.play(cell).unwrap(), GameOutcome::InProgress);
    }
    assert_eq!(game.play(mv(0, 2)).unwrap(), GameOutcome::PlayerOneWins);

    assert!(!game.is_running());
    assert_eq!(game.outcome(), GameOutcome::PlayerOneWins);
    assert_eq!(game.winning_line().unwrap().player(), Player::One);
    assert_eq!(game.play(mv(2, 2)), Err(PlayError::GameOver));
}

#[test]
fn test_full_board_is_a_draw() {
    let mut game = pvp();
    // X O X / X O O / O X X
    let order = [
        mv(0, 0),
        mv(0, 1),
        mv(0, 2),
        mv(1, 1),
        mv(1, 0),
        mv(1, 2),
        mv(2, 1),
        mv(2, 0),
        mv(2, 2),
    ];
    let mut last = GameOutcome::InProgress;
    for cell in order {
        last = game.play(cell).unwrap();
    }
    assert_eq!(last, GameOutcome::Draw);
    assert!(game.board().is_full());
    assert_eq!(game.board().terminal_outcome(), None);
    assert!(!game.is_running());
}

#[test]
fn test_ai_turn_only_when_due() {
    let ai = AiEngine::with_seed(SearchMode::OptimalSearch, Player::Two, 0);
    let mut game = Controller::new(GameMode::PlayerVsAi, Player::One, ai);

    assert!(!game.ai_to_move());
    assert_eq!(game.play_ai_turn(), Err(PlayError::NotAiTurn));

    game.play(mv(0, 0)).unwrap();
    assert!(game.ai_to_move());
    let (reply, outcome) = game.play_ai_turn().unwrap();
    assert_eq!(reply, mv(1, 1));
    assert_eq!(outcome, GameOutcome::InProgress);
    assert_eq!(game.to_move(), Player::One);
}

#[test]
fn test_ai_idle_in_pvp_mode() {
    let mut game = pvp();
    game.play(mv(0, 0)).unwrap();
    assert!(!game.ai_to_move());

    game.toggle_mode();
    assert_eq!(game.mode(), GameMode::PlayerVsAi);
    assert!(game.ai_to_move());
}

#[test]
fn test_reset_keeps_settings() {
    let ai = AiEngine::with_seed(SearchMode::OptimalSearch, Player::Two, 0);
    let mut game = Controller::new(GameMode::PlayerVsAi, Player::One, ai);
    game.set_search_mode(SearchMode::Random);
    game.play(mv(2, 2)).unwrap();

    game.reset();
    assert!(game.board().is_empty_board());
    assert!(game.is_running());
    assert_eq!(game.to_move(), Player::One);
    assert_eq!(game.mode(), GameMode::PlayerVsAi);
    assert_eq!(game.ai().mode(), SearchMode::Random);
}

#[test]
fn test_ai_moves_first_when_configured() {
    let mut config = GameConfig::default();
    config.set_first_player(Player::Two);
    let mut game = Controller::from_config(&config);

    assert!(game.ai_to_move());
    let (opening, _) = game.play_ai_turn().unwrap();
    assert_eq!(opening, mv(0, 0));
    assert_eq!(game.board().get(opening), Cell::Marked(Player::Two));
    assert_eq!(game.to_move(), Player::One);
}
