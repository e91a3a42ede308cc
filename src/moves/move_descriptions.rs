//! Candidate move descriptions.
//!
//! A `Move` carries its origin, destination and the special-move tags the
//! generator knows about. The executor re-derives castling and en-passant
//! effects from the board, so the tags are descriptive rather than commands.

use std::fmt;

use crate::game_state::chess_types::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub castle: Option<CastleSide>,
    pub en_passant_capture: bool,
    pub double_pawn_advance: bool,
    /// Pawn move onto the last rank; the executor always promotes to a queen.
    pub promotion: bool,
}

impl Move {
    #[inline]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            castle: None,
            en_passant_capture: false,
            double_pawn_advance: false,
            promotion: false,
        }
    }

    #[inline]
    pub const fn castle(from: Square, to: Square, side: CastleSide) -> Self {
        Self {
            castle: Some(side),
            ..Self::quiet(from, to)
        }
    }

    #[inline]
    pub const fn double_pawn_advance(from: Square, to: Square) -> Self {
        Self {
            double_pawn_advance: true,
            ..Self::quiet(from, to)
        }
    }

    #[inline]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Self {
            en_passant_capture: true,
            ..Self::quiet(from, to)
        }
    }

    #[inline]
    pub const fn with_promotion(self, promotion: bool) -> Self {
        Self { promotion, ..self }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if self.promotion {
            f.write_str("q")?;
        }
        Ok(())
    }
}
