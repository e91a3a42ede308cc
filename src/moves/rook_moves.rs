use crate::game_state::chess_types::{Square, SquareSet};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Squares a rook on `square` reaches, up to and including the first blocker
/// in each direction. Callers remove blockers of the rook's own color.
#[inline]
pub fn rook_attacks(square: Square, occupancy: SquareSet) -> SquareSet {
    slide(square, &ROOK_DIRECTIONS, occupancy)
}

pub(crate) fn slide(square: Square, directions: &[(i8, i8)], occupancy: SquareSet) -> SquareSet {
    directions
        .iter()
        .fold(SquareSet::EMPTY, |attacks, &(row_step, col_step)| {
            attacks.union(trace_ray(square, row_step, col_step, occupancy))
        })
}

fn trace_ray(square: Square, row_step: i8, col_step: i8, occupancy: SquareSet) -> SquareSet {
    let mut attacks = SquareSet::EMPTY;
    let mut cursor = square.offset(row_step, col_step);

    while let Some(target) = cursor {
        attacks.insert(target);

        if occupancy.contains(target) {
            break;
        }

        cursor = target.offset(row_step, col_step);
    }

    attacks
}

#[cfg(test)]
mod tests {
    use super::rook_attacks;
    use crate::game_state::chess_types::{Square, SquareSet};

    #[test]
    fn rook_on_empty_board_reaches_fourteen_squares() {
        let d4 = Square::new(3, 3).expect("d4");
        assert_eq!(rook_attacks(d4, SquareSet::EMPTY).len(), 14);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let a1 = Square::new(0, 0).expect("a1");
        let a4 = Square::new(3, 0).expect("a4");
        let a5 = Square::new(4, 0).expect("a5");
        let attacks = rook_attacks(a1, SquareSet::single(a4));

        assert!(attacks.contains(a4));
        assert!(!attacks.contains(a5));
        assert_eq!(attacks.len(), 3 + 7);
    }
}
