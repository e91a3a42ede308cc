//! Full legal move generation pipeline.
//!
//! Generates pseudo-legal moves per piece, simulates each on a scratch board
//! and drops the ones that leave the mover's own king in check.

use tracing::trace;

use crate::chess_errors::ChessResult;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::attack_generator::pseudo_legal_moves;
use crate::move_generation::legal_move_apply::simulate_move;
use crate::move_generation::legal_move_checks::is_in_check;

/// Legal moves of the piece on `square`. Empty for empty squares and for
/// pieces of the side not to move. Order is unspecified.
pub fn legal_moves(square: Square, game_state: &GameState) -> ChessResult<Vec<Move>> {
    let mover = game_state.side_to_move;
    let pseudo = pseudo_legal_moves(square, game_state);

    let mut legal = Vec::with_capacity(pseudo.len());
    for mv in pseudo {
        let scratch = simulate_move(&game_state.board, &mv, game_state.en_passant_target);

        // Illegal if own king is in check after move.
        if is_in_check(&scratch, mover)? {
            trace!(%mv, "discarded, leaves own king in check");
            continue;
        }

        legal.push(mv);
    }

    Ok(legal)
}

/// Legal moves of every piece belonging to the side to move.
pub fn all_legal_moves(game_state: &GameState) -> ChessResult<Vec<Move>> {
    let mut all = Vec::with_capacity(64);
    for (square, _) in game_state.board.pieces_of(game_state.side_to_move) {
        all.extend(legal_moves(square, game_state)?);
    }
    Ok(all)
}

/// Stops at the first piece that has a legal move.
pub fn has_any_legal_move(game_state: &GameState) -> ChessResult<bool> {
    for (square, _) in game_state.board.pieces_of(game_state.side_to_move) {
        if !legal_moves(square, game_state)?.is_empty() {
            return Ok(true);
        }
    }
    Ok(false)
}
