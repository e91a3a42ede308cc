//! Castling move generation.
//!
//! Ordinary king steps come straight from the attack set; this module only
//! adds the two castling moves when all of their preconditions hold.

use crate::game_state::chess_rules::CastlePath;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;

pub fn generate_castling_moves(king_from: Square, state: &GameState, out: &mut Vec<Move>) {
    let side = state.side_to_move;
    let enemy = side.opposite();
    let board = &state.board;
    let home_rook = Some(Piece::new(PieceKind::Rook, side));

    if board.piece_at(king_from) != Some(Piece::new(PieceKind::King, side)) {
        return;
    }

    // Cannot castle out of check.
    let mut king_attacked = None;

    for castle_side in CastleSide::BOTH {
        if !state.castling_rights.get(side, castle_side) {
            continue;
        }
        let Some(path) = CastlePath::for_side(side, castle_side) else {
            continue;
        };
        if king_from != path.king_from || board.piece_at(path.rook_from) != home_rook {
            continue;
        }

        let row = path.king_from.row();
        let clear = path
            .between
            .iter()
            .filter_map(|&col| Square::new(row, col))
            .all(|square| board.is_empty_at(square));
        if !clear {
            continue;
        }

        if *king_attacked.get_or_insert_with(|| is_square_attacked(king_from, enemy, board)) {
            return;
        }
        if is_square_attacked(path.king_transit, enemy, board)
            || is_square_attacked(path.king_to, enemy, board)
        {
            continue;
        }

        out.push(Move::castle(king_from, path.king_to, castle_side));
    }
}

#[cfg(test)]
mod tests {
    use super::generate_castling_moves;
    use crate::game_state::{chess_types::*, game_state::GameState};
    use crate::move_generation::legal_move_checks::king_square;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square name")
    }

    fn castles_from(position: &str, king_from: Square) -> Vec<Move> {
        let game = GameState::from_position(position).expect("position parses");
        let mut out = Vec::new();
        generate_castling_moves(king_from, &game, &mut out);
        out
    }

    fn castles(position: &str) -> Vec<Move> {
        let game = GameState::from_position(position).expect("position parses");
        let king = king_square(&game.board, game.side_to_move).expect("side to move has a king");
        castles_from(position, king)
    }

    #[test]
    fn both_sides_available_on_open_back_rank() {
        let moves = castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq -");
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Move::castle(sq("e1"), sq("g1"), CastleSide::KingSide)));
        assert!(moves.contains(&Move::castle(sq("e1"), sq("c1"), CastleSide::QueenSide)));

        let moves = castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq -");
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Move::castle(sq("e8"), sq("g8"), CastleSide::KingSide)));
    }

    #[test]
    fn no_castling_without_the_right() {
        assert!(castles("r3k2r/8/8/8/8/8/8/R3K2R w kq -").is_empty());
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R w K -").len(), 1);
    }

    #[test]
    fn no_castling_through_pieces() {
        assert!(castles("4k3/8/8/8/8/8/8/RN2K1NR w KQ -").is_empty());
        // b1 only has to be empty, not unattacked.
        assert_eq!(castles("1r2k3/8/8/8/8/8/8/R3K3 w Q -").len(), 1);
    }

    #[test]
    fn no_castling_out_of_or_through_check() {
        assert!(castles("4r1k1/8/8/8/8/8/8/R3K2R w KQ -").is_empty());
        assert!(castles("5rk1/8/8/8/8/8/8/4K2R w K -").is_empty());
        assert!(castles("6rk/8/8/8/8/8/8/4K2R w K -").is_empty());
        assert!(castles("3r2k1/8/8/8/8/8/8/R3K3 w Q -").is_empty());
    }

    #[test]
    fn no_castling_when_the_rook_is_gone() {
        assert!(castles("4k3/8/8/8/8/8/8/4K3 w KQ -").is_empty());
        assert!(castles("4k3/8/8/8/8/8/8/4K2r w K -").is_empty());
    }

    #[test]
    fn no_castling_when_the_king_left_home() {
        assert!(castles("4k3/8/8/8/8/8/8/R4K1R w KQ -").is_empty());
    }

    #[test]
    fn no_castling_from_a_home_square_without_the_king() {
        let position = "4k3/8/8/8/8/8/8/R4K1R w KQ -";
        assert!(castles_from(position, sq("e1")).is_empty());

        // A rook on the king's home square does not castle either.
        assert!(castles_from("4k3/8/8/8/8/8/8/R3RK2 w Q -", sq("e1")).is_empty());
    }
}
