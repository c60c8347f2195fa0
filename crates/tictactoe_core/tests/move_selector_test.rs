//! Tests for the heuristic computer opponent.

use tictactoe_core::{
    Board, Cell, Choice, Coord, GameState, Mode, MoveSelector, Player, Rule, ScriptedRandom,
    SeededRandom, Session,
};

const E: Cell = Cell::Empty;
const X: Cell = Cell::X;
const O: Cell = Cell::O;

fn coord(row: usize, col: usize) -> Coord {
    Coord::new(row, col).unwrap()
}

#[test]
fn test_immediate_win_beats_block() {
    let board = Board::from_rows([[O, O, E], [X, X, E], [E, E, E]]);
    let mut selector = MoveSelector::new(ScriptedRandom::default());
    assert_eq!(selector.select_move(&board), coord(0, 2));
}

#[test]
fn test_block_beats_center() {
    let board = Board::from_rows([[X, X, E], [O, E, E], [E, E, E]]);
    let mut selector = MoveSelector::new(ScriptedRandom::default());
    assert_eq!(selector.select_move(&board), coord(0, 2));
}

#[test]
fn test_center_on_empty_board_is_deterministic() {
    // A seeded source would change corner picks, never the center rule.
    for seed in 0..8 {
        let mut selector = MoveSelector::new(SeededRandom::new(seed));
        assert_eq!(selector.select_move(&Board::new()), Coord::CENTER);
    }
}

#[test]
fn test_corner_after_center_taken() {
    let board = Board::from_rows([[E, E, E], [E, X, E], [E, E, E]]);
    for pick in 0..4 {
        let mut selector = MoveSelector::new(ScriptedRandom::new([pick]));
        let choice = selector.select_move_for(&board, Player::O);
        assert_eq!(choice.rule, Rule::Corner);
        assert_eq!(choice.coord, Coord::CORNERS[pick]);
    }
}

#[test]
fn test_block_found_on_a_column() {
    let board = Board::from_rows([[X, O, E], [X, E, E], [E, E, E]]);
    let mut selector = MoveSelector::new(ScriptedRandom::default());
    assert_eq!(
        selector.select_move_for(&board, Player::O),
        Choice {
            coord: coord(2, 0),
            rule: Rule::Block
        }
    );
}

#[test]
fn test_selector_does_not_touch_state() {
    let mut game = GameState::new();
    game.apply_move(0, 0).unwrap();
    let before = game.clone();

    let mut selector = MoveSelector::new(ScriptedRandom::default());
    let _ = selector.select_move(game.board());
    assert_eq!(game, before);
}

#[test]
fn test_selected_moves_are_always_legal() {
    for seed in 0..20 {
        let mut session = Session::new(Mode::HumanVsHuman, SeededRandom::new(seed));
        while !session.state().is_over() {
            let legal = session.state().legal_moves();
            let events = session.computer_move();
            assert!(!events.is_empty());
            let placed = Coord::ALL
                .iter()
                .filter(|c| !session.state().board().is_empty(**c))
                .count();
            assert_eq!(placed, 9 - legal.len() + 1);
        }
    }
}

#[test]
fn test_computer_never_loses_an_open_win() {
    // X threatens row 2 and O can win on the diagonal: O must take the win.
    let board = Board::from_rows([[O, X, E], [E, O, E], [X, X, E]]);
    let mut selector = MoveSelector::new(ScriptedRandom::default());
    assert_eq!(
        selector.select_move_for(&board, Player::O),
        Choice {
            coord: coord(2, 2),
            rule: Rule::Win
        }
    );
}
