//! Rules integration tests: opening, scripted lines and end conditions.

use hexapawn::core::{Board, GameState, Move, Player, Point};
use hexapawn::Error;

fn mv(text: &str) -> Move {
    text.parse().unwrap()
}

fn play(moves: &[&str]) -> GameState {
    moves.iter().fold(GameState::new_game(), |state, text| {
        assert!(!state.is_over(), "game ended before {text}");
        state.try_apply_move(mv(text)).unwrap()
    })
}

fn position(pawns: &[(&str, Player)], next: Player) -> GameState {
    let board = pawns.iter().fold(Board::empty(), |board, (square, player)| {
        board.with_pawn(square.parse().unwrap(), *player).unwrap()
    });
    GameState::from_board(board, next)
}

// =============================================================================
// Opening
// =============================================================================

#[test]
fn test_new_game_has_three_forward_moves() {
    let state = GameState::new_game();
    let moves = state.legal_moves();

    assert_eq!(moves.len(), 3);
    assert_eq!(moves[0], mv("A3-A2"));
    assert_eq!(moves[1], mv("B3-B2"));
    assert_eq!(moves[2], mv("C3-C2"));
}

#[test]
fn test_new_game_is_not_over() {
    let state = GameState::new_game();
    assert!(!state.is_over());
    assert_eq!(state.winner(), None);
}

#[test]
fn test_players_alternate() {
    let state = play(&["A3-A2"]);
    assert_eq!(state.next_player(), Player::O);
    assert_eq!(state.last_move(), Some(mv("A3-A2")));

    let state = state.try_apply_move(mv("C1-C2")).unwrap();
    assert_eq!(state.next_player(), Player::X);
    assert_eq!(state.last_move(), Some(mv("C1-C2")));
}

#[test]
fn test_apply_move_leaves_original_untouched() {
    let state = GameState::new_game();
    let before: Vec<_> = Point::all().map(|p| state.board().get(p)).collect();

    for m in state.legal_moves() {
        let _ = state.apply_move(m).unwrap();
    }

    let after: Vec<_> = Point::all().map(|p| state.board().get(p)).collect();
    assert_eq!(before, after);
    assert_eq!(state, GameState::new_game());
}

// =============================================================================
// Scripted lines
// =============================================================================

#[test]
fn test_o_pawn_breaks_through() {
    // X opens the centre, O captures into it and walks onto X's home row.
    let state = play(&["B3-B2", "A1-B2", "A3-A2", "B2-B3"]);

    assert!(state.is_over());
    assert_eq!(state.board().get(Point::new(3, 2)), Some(Player::O));
    assert_eq!(state.winner(), Some(Player::O));
}

#[test]
fn test_x_captures_onto_goal_row() {
    let state = play(&["A3-A2", "C1-C2", "A2-B1"]);

    assert!(state.is_over());
    assert_eq!(state.board().pawn_count(Player::O), 2);
    assert_eq!(state.winner(), Some(Player::X));
}

#[test]
fn test_capture_removes_pawn() {
    let state = play(&["B3-B2", "A1-B2"]);

    assert_eq!(state.board().pawn_count(Player::X), 2);
    assert_eq!(state.board().pawn_count(Player::O), 3);
    assert_eq!(state.board().get(Point::new(2, 2)), Some(Player::O));
    assert_eq!(state.board().get(Point::new(1, 1)), None);
}

#[test]
fn test_illegal_move_rejected_without_side_effects() {
    let state = play(&["A3-A2"]);

    // X pawn, but O to move
    let result = state.try_apply_move(mv("A2-A1"));
    assert!(matches!(result, Err(Error::IllegalMove { player: Player::O, .. })));

    // Blocked straight ahead
    let result = state.try_apply_move(mv("A1-A2"));
    assert!(matches!(result, Err(Error::IllegalMove { .. })));

    assert_eq!(state.next_player(), Player::O);
}

// =============================================================================
// End conditions
// =============================================================================

#[test]
fn test_mover_without_moves_loses() {
    let state = position(
        &[("A2", Player::X), ("A1", Player::O), ("C1", Player::O)],
        Player::X,
    );

    assert!(state.legal_moves().is_empty());
    assert!(state.is_over());
    assert_eq!(state.winner(), Some(Player::O));
}

#[test]
fn test_side_without_pawns_ends_game() {
    let state = position(&[("B2", Player::O), ("C1", Player::O)], Player::X);

    assert_eq!(state.board().pawn_count(Player::X), 0);
    assert!(state.is_over());
    assert_eq!(state.winner(), Some(Player::O));
}

#[test]
fn test_goal_checked_on_every_square() {
    // Several pawns before the one on its goal row in board order.
    let state = position(
        &[
            ("A1", Player::O),
            ("B1", Player::O),
            ("C2", Player::X),
            ("A3", Player::X),
            ("C3", Player::O),
        ],
        Player::X,
    );

    assert!(state.is_over());
    assert_eq!(state.winner(), Some(Player::O));
}

#[test]
fn test_winner_on_unfinished_game_is_none() {
    let state = play(&["A3-A2", "C1-C2"]);
    assert!(!state.is_over());
    assert_eq!(state.winner(), None);
}

#[test]
fn test_render_after_moves() {
    let state = play(&["B3-B2", "A1-B2"]);
    let rendered = state.board().to_string();
    let lines: Vec<_> = rendered.lines().collect();

    assert_eq!(lines[1], "1    | O | O");
    assert_eq!(lines[2], "2    | O |  ");
    assert_eq!(lines[3], "3  X |   | X");
}
