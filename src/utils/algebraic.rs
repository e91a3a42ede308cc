//! Square-name conversions.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and `Square`
//! values; used by the position parser, the command binary and tests.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert an algebraic square name (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(name: &str) -> ChessResult<Square> {
    let bytes = name.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::malformed(format!(
            "invalid algebraic square: {name}"
        )));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessErrors::malformed(format!(
            "invalid algebraic file: {}",
            file as char
        )));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::malformed(format!(
            "invalid algebraic rank: {}",
            rank as char
        )));
    }

    Square::new(rank - b'1', file - b'a')
        .ok_or_else(|| ChessErrors::malformed(format!("invalid algebraic square: {name}")))
}

/// Convert a square to its algebraic name (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}
