//! Canonical chess-rule constants.
//!
//! Holds the standard starting position string and the fixed home squares
//! that castling is defined against.

use crate::game_state::chess_types::{CastleSide, Color, Square};

/// Standard chess starting position in the position-string format.
pub const STARTING_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Column of the king at the start of the game.
pub const KING_HOME_COL: u8 = 4;

const KING_SIDE_BETWEEN: &[u8] = &[5, 6];
const QUEEN_SIDE_BETWEEN: &[u8] = &[1, 2, 3];

/// Castling geometry for one color and side, all on the color's home row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlePath {
    pub king_from: Square,
    pub king_to: Square,
    /// Square the king passes over; the rook lands here.
    pub king_transit: Square,
    pub rook_from: Square,
    /// Every square strictly between king and rook.
    pub between: &'static [u8],
}

impl CastlePath {
    /// Column of the rook's home corner for `side`.
    pub const fn rook_home_col(side: CastleSide) -> u8 {
        match side {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    pub fn for_side(color: Color, side: CastleSide) -> Option<Self> {
        let row = color.home_row();
        let (king_to, transit, between) = match side {
            CastleSide::KingSide => (6, 5, KING_SIDE_BETWEEN),
            CastleSide::QueenSide => (2, 3, QUEEN_SIDE_BETWEEN),
        };
        Some(Self {
            king_from: Square::new(row, KING_HOME_COL)?,
            king_to: Square::new(row, king_to)?,
            king_transit: Square::new(row, transit)?,
            rook_from: Square::new(row, Self::rook_home_col(side))?,
            between,
        })
    }

    /// Which castling right, if any, is tied to a rook standing on `square`.
    pub fn right_for_rook_home(square: Square) -> Option<(Color, CastleSide)> {
        let color = match square.row() {
            0 => Color::White,
            7 => Color::Black,
            _ => return None,
        };
        match square.col() {
            7 => Some((color, CastleSide::KingSide)),
            0 => Some((color, CastleSide::QueenSide)),
            _ => None,
        }
    }
}
