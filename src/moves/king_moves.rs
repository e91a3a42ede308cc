//! King attack table.
//!
//! Covers the eight one-step neighbours only; castling is generated by the
//! king move generator, never as an attack.

use crate::game_state::chess_types::{Square, SquareSet};
use crate::moves::knight_moves::set_if_valid;

pub const KING_ATTACKS: [u64; 64] = generate_king_attacks();

#[inline]
pub const fn king_attacks(square: Square) -> SquareSet {
    SquareSet(KING_ATTACKS[square.index() as usize])
}

const fn generate_king_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut attacks = 0u64;

        attacks |= set_if_valid(file - 1, rank - 1);
        attacks |= set_if_valid(file, rank - 1);
        attacks |= set_if_valid(file + 1, rank - 1);
        attacks |= set_if_valid(file - 1, rank);
        attacks |= set_if_valid(file + 1, rank);
        attacks |= set_if_valid(file - 1, rank + 1);
        attacks |= set_if_valid(file, rank + 1);
        attacks |= set_if_valid(file + 1, rank + 1);

        table[sq] = attacks;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::king_attacks;
    use crate::game_state::chess_types::Square;

    #[test]
    fn king_attacks_from_a1_has_three_targets() {
        let a1 = Square::new(0, 0).expect("a1");
        assert_eq!(king_attacks(a1).len(), 3);
    }

    #[test]
    fn king_attacks_from_e4_has_eight_targets() {
        let e4 = Square::new(3, 4).expect("e4");
        assert_eq!(king_attacks(e4).len(), 8);
    }
}
