use crate::game_state::chess_types::{Square, SquareSet};
use crate::moves::rook_moves::slide;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[inline]
pub fn bishop_attacks(square: Square, occupancy: SquareSet) -> SquareSet {
    slide(square, &BISHOP_DIRECTIONS, occupancy)
}
