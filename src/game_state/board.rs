//! 8x8 mailbox board.
//!
//! Cells are addressed by `Square`; each holds at most one `Piece`. The
//! occupancy helpers turn the grid into `SquareSet`s for the attack tables.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square, SquareSet};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    /// Puts `piece` on `square`, returning whatever was there.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(
            &mut self.cells[square.row() as usize][square.col() as usize],
            piece,
        )
    }

    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.set(square, None)
    }

    /// Moves whatever is on `from` to `to`, vacating `from`.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let piece = self.take(from);
        self.set(to, piece)
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// All occupied squares with their pieces, in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..64u8).filter_map(move |index| {
            let square = Square::from_index(index)?;
            self.piece_at(square).map(|piece| (square, piece))
        })
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn occupancy(&self) -> SquareSet {
        self.pieces().map(|(square, _)| square).collect()
    }

    pub fn occupancy_of(&self, color: Color) -> SquareSet {
        self.pieces_of(color).map(|(square, _)| square).collect()
    }

    pub fn count(&self, kind: PieceKind, color: Color) -> usize {
        self.pieces_of(color)
            .filter(|(_, piece)| piece.kind == kind)
            .count()
    }
}
