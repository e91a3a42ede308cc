//! Pseudo-legal pawn move generation.
//!
//! Pushes, double advances from the start row, diagonal captures and the
//! en-passant capture. A move onto the last rank is tagged as a promotion;
//! only one move per destination is emitted because promotion is always to
//! a queen.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::en_passant_victim;
use crate::moves::pawn_moves::pawn_attacks;

pub fn generate_pawn_moves(from: Square, state: &GameState, out: &mut Vec<Move>) {
    let side = state.side_to_move;
    let board = &state.board;
    let forward = side.forward();
    let promotes = |to: Square| to.row() == side.promotion_row();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty_at(one_step) {
            out.push(Move::quiet(from, one_step).with_promotion(promotes(one_step)));

            if from.row() == side.pawn_start_row() {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if board.is_empty_at(two_step) {
                        out.push(Move::double_pawn_advance(from, two_step));
                    }
                }
            }
        }
    }

    for to in pawn_attacks(side, from) {
        match board.piece_at(to) {
            Some(target) if target.color != side => {
                out.push(Move::quiet(from, to).with_promotion(promotes(to)));
            }
            None if state.en_passant_target == Some(to)
                && en_passant_victim(board, to, side).is_some() =>
            {
                out.push(Move::en_passant(from, to));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::{chess_types::*, game_state::GameState};
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square name")
    }

    fn moves_for(position: &str, from: &str) -> Vec<Move> {
        let game = GameState::from_position(position).expect("position parses");
        let mut out = Vec::new();
        generate_pawn_moves(sq(from), &game, &mut out);
        out
    }

    #[test]
    fn start_row_pawn_can_advance_one_or_two() {
        let moves = moves_for(crate::game_state::chess_rules::STARTING_POSITION, "e2");
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Move::quiet(sq("e2"), sq("e3"))));
        assert!(moves.contains(&Move::double_pawn_advance(sq("e2"), sq("e4"))));
    }

    #[test]
    fn blocked_pawn_has_no_push() {
        let moves = moves_for("4k3/8/8/8/8/4n3/4P3/4K3 w - -", "e2");
        assert!(moves.is_empty());

        let moves = moves_for("4k3/8/8/8/4n3/8/4P3/4K3 w - -", "e2");
        assert_eq!(moves, [Move::quiet(sq("e2"), sq("e3"))]);
    }

    #[test]
    fn en_passant_capture_is_offered_on_the_target_square() {
        let moves = moves_for("4k3/8/8/3pP3/8/8/8/4K3 w - d6", "e5");
        assert!(moves.contains(&Move::en_passant(sq("e5"), sq("d6"))));
        assert!(moves.contains(&Move::quiet(sq("e5"), sq("e6"))));
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn en_passant_needs_a_pawn_behind_the_target() {
        let moves = moves_for("4k3/8/8/4P3/8/8/8/4K3 w - d6", "e5");
        assert_eq!(moves, [Move::quiet(sq("e5"), sq("e6"))]);
    }

    #[test]
    fn last_rank_moves_are_tagged_as_promotions() {
        let moves = moves_for("1r2k3/P7/8/8/8/8/8/4K3 w - -", "a7");
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|mv| mv.promotion));
    }

    #[test]
    fn black_pawns_move_down_the_board() {
        let moves = moves_for("4k3/3p4/8/8/8/8/8/4K3 b - -", "d7");
        assert!(moves.contains(&Move::quiet(sq("d7"), sq("d6"))));
        assert!(moves.contains(&Move::double_pawn_advance(sq("d7"), sq("d5"))));
    }
}
