//! Core position state.
//!
//! `GameState` is the authoritative rules state: the board, whose turn it is,
//! castling rights and the en-passant target. Selection and other
//! presentation details live in the coordinator, not here.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_rules::STARTING_POSITION;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::utils::position_parser::parse_position;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Square>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::empty(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::NONE,
            en_passant_target: None,
        }
    }
}

impl GameState {
    pub fn new_game() -> ChessResult<Self> {
        parse_position(STARTING_POSITION)
    }

    #[inline]
    pub fn from_position(position: &str) -> ChessResult<Self> {
        parse_position(position)
    }

    #[inline]
    pub fn pass_turn(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Applies an already-validated move and hands the turn over.
    pub fn play(&mut self, mv: &Move) {
        apply_move(self, mv);
        self.pass_turn();
    }
}
