//! Move execution.
//!
//! `apply_move` updates the authoritative state for a move the legality
//! filter already accepted. `simulate_move` performs only the board part of
//! the same work on a scratch copy so the filter can test king safety.

use tracing::trace;

use crate::game_state::chess_rules::CastlePath;
use crate::game_state::{chess_types::*, game_state::GameState};

/// Applies a validated move in place. Does not flip the side to move.
///
/// Steps run in a fixed order: castling rook co-move, en-passant pawn
/// removal, en-passant target update, piece relocation, promotion, castling
/// rights. An illegal move leaves the state unspecified; nothing is checked.
pub fn apply_move(game_state: &mut GameState, mv: &Move) {
    let Some(moving) = game_state.board.piece_at(mv.from) else {
        trace!(%mv, "no piece on origin square, move ignored");
        return;
    };
    let prior_en_passant = game_state.en_passant_target;

    move_castling_rook(&mut game_state.board, moving, mv);
    remove_en_passant_victim(&mut game_state.board, moving, mv, prior_en_passant);

    game_state.en_passant_target = None;
    if moving.kind == PieceKind::Pawn && mv.from.row().abs_diff(mv.to.row()) == 2 {
        let skipped_row = (mv.from.row() + mv.to.row()) / 2;
        game_state.en_passant_target = Square::new(skipped_row, mv.from.col());
    }

    relocate_and_promote(&mut game_state.board, moving, mv);
    update_castling_rights(&mut game_state.castling_rights, moving, mv);
}

/// Board after `mv`, leaving the input untouched.
pub fn simulate_move(board: &Board, mv: &Move, en_passant_target: Option<Square>) -> Board {
    let mut scratch = board.clone();
    if let Some(moving) = scratch.piece_at(mv.from) {
        move_castling_rook(&mut scratch, moving, mv);
        remove_en_passant_victim(&mut scratch, moving, mv, en_passant_target);
        relocate_and_promote(&mut scratch, moving, mv);
    }
    scratch
}

/// Square of the pawn an en-passant capture onto `target` removes, provided an
/// enemy pawn actually stands there.
pub fn en_passant_victim(board: &Board, target: Square, mover: Color) -> Option<Square> {
    let behind = target.offset(-mover.forward(), 0)?;
    match board.piece_at(behind) {
        Some(piece) if piece.kind == PieceKind::Pawn && piece.color != mover => Some(behind),
        _ => None,
    }
}

fn move_castling_rook(board: &mut Board, moving: Piece, mv: &Move) {
    if moving.kind != PieceKind::King || mv.from.col().abs_diff(mv.to.col()) != 2 {
        return;
    }
    let side = if mv.to.col() > mv.from.col() {
        CastleSide::KingSide
    } else {
        CastleSide::QueenSide
    };
    if let Some(path) = CastlePath::for_side(moving.color, side) {
        board.relocate(path.rook_from, path.king_transit);
    }
}

fn remove_en_passant_victim(
    board: &mut Board,
    moving: Piece,
    mv: &Move,
    prior_en_passant: Option<Square>,
) {
    if moving.kind != PieceKind::Pawn || prior_en_passant != Some(mv.to) {
        return;
    }
    if let Some(victim) = en_passant_victim(board, mv.to, moving.color) {
        board.take(victim);
    }
}

fn relocate_and_promote(board: &mut Board, moving: Piece, mv: &Move) {
    board.relocate(mv.from, mv.to);
    if moving.kind == PieceKind::Pawn && mv.to.row() == moving.color.promotion_row() {
        board.set(mv.to, Some(Piece::new(PieceKind::Queen, moving.color)));
    }
}

fn update_castling_rights(rights: &mut CastlingRights, moving: Piece, mv: &Move) {
    if moving.kind == PieceKind::King {
        rights.revoke_all(moving.color);
    }

    if moving.kind == PieceKind::Rook {
        if let Some((color, side)) = CastlePath::right_for_rook_home(mv.from) {
            if color == moving.color {
                rights.revoke(color, side);
            }
        }
    }

    // A rook captured on its home corner takes its right with it.
    if let Some((color, side)) = CastlePath::right_for_rook_home(mv.to) {
        rights.revoke(color, side);
    }
}
