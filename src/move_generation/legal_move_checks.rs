use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::attack_generator::piece_attacks;

/// Square of `color`'s king. A board without one is an invariant violation.
#[inline]
pub fn king_square(board: &Board, color: Color) -> ChessResult<Square> {
    board
        .pieces_of(color)
        .find(|(_, piece)| piece.kind == PieceKind::King)
        .map(|(square, _)| square)
        .ok_or_else(|| ChessErrors::invariant(format!("no {color} king on the board")))
}

#[inline]
pub fn is_in_check(board: &Board, color: Color) -> ChessResult<bool> {
    let king_sq = king_square(board, color)?;
    Ok(is_square_attacked(king_sq, color.opposite(), board))
}

/// True when any piece of `attacker_color` has `square` in its attack set.
pub fn is_square_attacked(square: Square, attacker_color: Color, board: &Board) -> bool {
    let occupancy = board.occupancy();
    let own = board.occupancy_of(attacker_color);

    board
        .pieces_of(attacker_color)
        .any(|(from, piece)| piece_attacks(piece, from, occupancy, own).contains(square))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::game_state::GameState;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square name")
    }

    #[test]
    fn starting_position_is_quiet() {
        let game = GameState::new_game().expect("starting position parses");
        assert_eq!(is_in_check(&game.board, Color::White), Ok(false));
        assert_eq!(is_in_check(&game.board, Color::Black), Ok(false));
        assert!(is_square_attacked(sq("f3"), Color::White, &game.board));
        assert!(!is_square_attacked(sq("e4"), Color::White, &game.board));
        assert!(is_square_attacked(sq("e6"), Color::Black, &game.board));
    }

    #[test]
    fn rook_on_open_file_gives_check() {
        let game = GameState::from_position("4r1k1/8/8/8/8/8/8/4K3 w - -")
            .expect("position parses");
        assert_eq!(is_in_check(&game.board, Color::White), Ok(true));
        assert!(is_square_attacked(sq("e1"), Color::Black, &game.board));
        assert!(!is_square_attacked(sq("d1"), Color::Black, &game.board));
    }

    #[test]
    fn interposed_piece_blocks_check() {
        let game = GameState::from_position("4r1k1/8/8/8/4N3/8/8/4K3 w - -")
            .expect("position parses");
        assert_eq!(is_in_check(&game.board, Color::White), Ok(false));
    }

    #[test]
    fn pawn_checks_diagonally_only() {
        let game = GameState::from_position("6k1/8/8/8/8/3p4/4K3/8 w - -")
            .expect("position parses");
        assert_eq!(is_in_check(&game.board, Color::White), Ok(true));

        let game = GameState::from_position("6k1/8/8/8/8/4p3/4K3/8 w - -")
            .expect("position parses");
        assert_eq!(is_in_check(&game.board, Color::White), Ok(false));
    }

    #[test]
    fn missing_king_is_an_invariant_violation() {
        let board = Board::empty();
        assert!(matches!(
            is_in_check(&board, Color::White),
            Err(ChessErrors::InvariantViolation { .. })
        ));
    }
}
