//! Perft: exhaustive leaf counting of the legal move tree.
//!
//! Used as a correctness oracle for the legality engine. Counts at the leaf
//! ply are broken down by move type the same way published perft tables are.
//! Promotions always go to a queen, so reference numbers only match at depths
//! where no promotion occurs.

use crate::chess_errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::{all_legal_moves, has_any_legal_move};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in all_legal_moves(game_state)? {
        let is_capture = game_state.board.piece_at(mv.to).is_some() || mv.en_passant_capture;
        let mut next = game_state.clone();
        next.play(&mv);

        if depth > 1 {
            total.merge(perft(&next, depth - 1)?);
            continue;
        }

        total.nodes += 1;
        total.captures += usize::from(is_capture);
        total.en_passant += usize::from(mv.en_passant_capture);
        total.castles += usize::from(mv.castle.is_some());
        total.promotions += usize::from(mv.promotion);
        if is_in_check(&next.board, next.side_to_move)? {
            total.checks += 1;
            if !has_any_legal_move(&next)? {
                total.checkmates += 1;
            }
        }
    }

    Ok(total)
}

/// Node counts per root move, as `(move text, nodes)`.
pub fn perft_divide(game_state: &GameState, depth: u8) -> ChessResult<Vec<(String, usize)>> {
    let mut out = Vec::new();
    for mv in all_legal_moves(game_state)? {
        let mut next = game_state.clone();
        next.play(&mv);
        let nodes = perft(&next, depth.saturating_sub(1))?.nodes;
        out.push((mv.to_string(), nodes));
    }
    out.sort();
    Ok(out)
}
