//! Property tests over random play-outs.

use hexapawn::core::{GameState, Move, Player, Point};
use proptest::prelude::*;

/// Longest possible game: each of the six pawns can make one move short of
/// its goal row, and the next forward move ends the game.
const MAX_PLIES: usize = 7;

/// Follow `choices` (taken modulo the number of legal moves) from the
/// opening, returning every state visited.
fn line(choices: &[usize]) -> Vec<GameState> {
    let mut states = vec![GameState::new_game()];
    for &choice in choices {
        let state = *states.last().unwrap();
        if state.is_over() {
            break;
        }
        let moves = state.legal_moves();
        let mv = moves[choice % moves.len()];
        states.push(state.apply_move(mv).unwrap());
    }
    states
}

fn arbitrary_point() -> impl Strategy<Value = Point> {
    (-1i8..=5, -1i8..=5).prop_map(|(row, col)| Point::new(row, col))
}

fn arbitrary_player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::X), Just(Player::O)]
}

proptest! {
    #[test]
    fn prop_apply_move_never_mutates(choices in prop::collection::vec(any::<usize>(), 0..MAX_PLIES)) {
        for state in line(&choices) {
            let snapshot: Vec<_> = Point::all().map(|p| state.board().get(p)).collect();
            for mv in state.legal_moves() {
                let _ = state.apply_move(mv).unwrap();
            }
            let after: Vec<_> = Point::all().map(|p| state.board().get(p)).collect();
            prop_assert_eq!(snapshot, after);
        }
    }

    #[test]
    fn prop_legal_move_endpoints_on_grid(choices in prop::collection::vec(any::<usize>(), 0..MAX_PLIES)) {
        for state in line(&choices) {
            for mv in state.legal_moves() {
                prop_assert!(mv.from.is_on_grid());
                prop_assert!(mv.to.is_on_grid());
                prop_assert_eq!(mv.row_delta(), state.next_player().forward());
            }
        }
    }

    #[test]
    fn prop_legal_moves_idempotent(choices in prop::collection::vec(any::<usize>(), 0..MAX_PLIES)) {
        for state in line(&choices) {
            prop_assert_eq!(state.legal_moves(), state.legal_moves());
        }
    }

    #[test]
    fn prop_games_end_with_a_winner(choices in prop::collection::vec(any::<usize>(), MAX_PLIES + 1)) {
        let states = line(&choices);
        let last = states.last().unwrap();

        prop_assert!(last.is_over());
        prop_assert!(states.len() - 1 <= MAX_PLIES);
        prop_assert!(last.winner().is_some());
        // Only the final state is terminal
        prop_assert!(states[..states.len() - 1].iter().all(|s| !s.is_over()));
    }

    #[test]
    fn prop_pawn_counts_never_increase(choices in prop::collection::vec(any::<usize>(), 0..MAX_PLIES)) {
        let states = line(&choices);
        for pair in states.windows(2) {
            for player in Player::ALL {
                prop_assert!(pair[1].board().pawn_count(player) <= pair[0].board().pawn_count(player));
            }
        }
    }

    #[test]
    fn prop_validity_matches_generation(
        choices in prop::collection::vec(any::<usize>(), 0..MAX_PLIES),
        from in arbitrary_point(),
        to in arbitrary_point(),
        player in arbitrary_player(),
    ) {
        let mv = Move::new(from, to);
        for state in line(&choices) {
            let generated = state.find_moves(player).contains(&mv);
            prop_assert_eq!(state.is_valid_move(mv, player), generated);
        }
    }
}
