//! Pseudo-legal reach and attack sets.
//!
//! `attacks_from` answers "which squares does this piece hit" without regard
//! to the safety of its own king. `pseudo_legal_moves` builds on it and adds
//! the moves that are not attacks: pawn pushes, en-passant captures and
//! castling.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_king::generate_castling_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

/// Squares the piece on `square` attacks, as seen by `side`.
///
/// `side` replaces any notion of a shared "whose turn" flag: the set is empty
/// when `square` is empty or holds a piece of the other color. Sliders stop on
/// the first occupied square and include it only when it holds an enemy
/// piece. Pawn diagonals are always included; the square ahead never is.
pub fn attacks_from(square: Square, board: &Board, side: Color) -> SquareSet {
    match board.piece_at(square) {
        Some(piece) if piece.color == side => piece_attacks(
            piece,
            square,
            board.occupancy(),
            board.occupancy_of(side),
        ),
        _ => SquareSet::EMPTY,
    }
}

/// Attack set for a known piece with precomputed occupancies.
pub(crate) fn piece_attacks(
    piece: Piece,
    square: Square,
    occupancy: SquareSet,
    own: SquareSet,
) -> SquareSet {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color, square),
        PieceKind::Knight => knight_attacks(square).without(own),
        PieceKind::King => king_attacks(square).without(own),
        PieceKind::Bishop => bishop_attacks(square, occupancy).without(own),
        PieceKind::Rook => rook_attacks(square, occupancy).without(own),
        PieceKind::Queen => queen_attacks(square, occupancy).without(own),
    }
}

/// Every pseudo-legal move of the piece on `square` for the side to move.
///
/// Returns nothing for empty squares and for pieces of the side not to move.
pub fn pseudo_legal_moves(square: Square, state: &GameState) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    let Some(piece) = state.board.piece_at(square) else {
        return out;
    };
    if piece.color != state.side_to_move {
        return out;
    }

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(square, state, &mut out),
        PieceKind::King => {
            let targets = attacks_from(square, &state.board, piece.color);
            out.extend(targets.iter().map(|to| Move::quiet(square, to)));
            generate_castling_moves(square, state, &mut out);
        }
        _ => {
            let targets = attacks_from(square, &state.board, piece.color);
            out.extend(targets.iter().map(|to| Move::quiet(square, to)));
        }
    }

    out
}
