use crate::game_state::chess_types::{Color, Square, SquareSet};

pub const WHITE_PAWN_ATTACKS: [u64; 64] = generate_white_pawn_attacks();
pub const BLACK_PAWN_ATTACKS: [u64; 64] = generate_black_pawn_attacks();

/// Diagonal capture squares of a pawn, whether or not anything stands there.
#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> SquareSet {
    match color {
        Color::White => SquareSet(WHITE_PAWN_ATTACKS[square.index() as usize]),
        Color::Black => SquareSet(BLACK_PAWN_ATTACKS[square.index() as usize]),
    }
}

const fn generate_white_pawn_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = sq % 8;
        let rank = sq / 8;
        let mut attacks = 0u64;

        if rank < 7 {
            if file > 0 {
                attacks |= 1u64 << (sq + 7);
            }
            if file < 7 {
                attacks |= 1u64 << (sq + 9);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

const fn generate_black_pawn_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = sq % 8;
        let rank = sq / 8;
        let mut attacks = 0u64;

        if rank > 0 {
            if file > 0 {
                attacks |= 1u64 << (sq - 9);
            }
            if file < 7 {
                attacks |= 1u64 << (sq - 7);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::pawn_attacks;
    use crate::game_state::chess_types::{Color, Square};

    fn names(color: Color, row: u8, col: u8) -> Vec<String> {
        let square = Square::new(row, col).expect("test square on the board");
        pawn_attacks(color, square)
            .iter()
            .map(|sq| sq.to_string())
            .collect()
    }

    #[test]
    fn white_pawn_attacks_from_e2() {
        assert_eq!(names(Color::White, 1, 4), ["d3", "f3"]);
    }

    #[test]
    fn black_pawn_attacks_from_a7() {
        assert_eq!(names(Color::Black, 6, 0), ["b6"]);
    }

    #[test]
    fn pawn_on_last_rank_attacks_nothing() {
        assert!(names(Color::White, 7, 3).is_empty());
    }
}
