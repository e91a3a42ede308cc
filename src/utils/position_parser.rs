//! Position-string-to-GameState parser.
//!
//! Reads `<board> <turn> <castling> <enpassant>` with two optional trailing
//! FEN clock fields. The clocks are validated and dropped; nothing in the
//! rules engine depends on them.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_position(position: &str) -> ChessResult<GameState> {
    let mut parts = position.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessErrors::malformed("missing board layout"))?;
    let side_part = parts
        .next()
        .ok_or_else(|| ChessErrors::malformed("missing side-to-move"))?;
    let castling_part = parts
        .next()
        .ok_or_else(|| ChessErrors::malformed("missing castling rights"))?;
    let en_passant_part = parts
        .next()
        .ok_or_else(|| ChessErrors::malformed("missing en-passant square"))?;

    for (name, clock) in ["halfmove clock", "fullmove number"].into_iter().zip(&mut parts) {
        clock
            .parse::<u16>()
            .map_err(|_| ChessErrors::malformed(format!("invalid {name}: {clock}")))?;
    }
    if parts.next().is_some() {
        return Err(ChessErrors::malformed("position has extra trailing fields"));
    }

    let game_state = GameState {
        board: parse_board(board_part)?,
        side_to_move: parse_side_to_move(side_part)?,
        castling_rights: parse_castling_rights(castling_part)?,
        en_passant_target: parse_en_passant_square(en_passant_part)?,
    };

    for color in Color::BOTH {
        let kings = game_state.board.count(PieceKind::King, color);
        if kings != 1 {
            return Err(ChessErrors::malformed(format!(
                "{color} must have exactly one king, found {kings}"
            )));
        }
    }

    Ok(game_state)
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::malformed(format!(
            "board layout must contain 8 ranks, found {}",
            ranks.len()
        )));
    }

    let mut board = Board::empty();
    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        // The first rank in the string is rank 8.
        let row = 7 - rank_idx as u8;
        let mut col = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::malformed(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                col += empty_count as u8;
                if col > 8 {
                    break;
                }
                continue;
            }

            let piece = Piece::from_letter(ch).ok_or_else(|| {
                ChessErrors::malformed(format!("invalid piece character '{ch}'"))
            })?;

            let square = Square::new(row, col).ok_or_else(|| {
                ChessErrors::malformed(format!("rank {} has more than 8 squares", row + 1))
            })?;
            board.set(square, Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(ChessErrors::malformed(format!(
                "rank {} does not sum to 8 squares",
                row + 1
            )));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessErrors::malformed(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(CastlingRights::NONE);
    }

    let mut rights = CastlingRights::NONE;
    for ch in castling_part.chars() {
        let flag = match ch {
            'K' => &mut rights.white_king_side,
            'Q' => &mut rights.white_queen_side,
            'k' => &mut rights.black_king_side,
            'q' => &mut rights.black_queen_side,
            _ => {
                return Err(ChessErrors::malformed(format!(
                    "invalid castling rights character: {ch}"
                )))
            }
        };
        if *flag {
            return Err(ChessErrors::malformed(format!(
                "repeated castling rights character: {ch}"
            )));
        }
        *flag = true;
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)?;
    // Only a double advance creates a target, always on rank 3 or rank 6.
    if square.row() != 2 && square.row() != 5 {
        return Err(ChessErrors::malformed(format!(
            "en-passant square {square} is not on rank 3 or 6"
        )));
    }

    Ok(Some(square))
}

#[cfg(test)]
mod tests {
    use super::parse_position;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_rules::STARTING_POSITION;
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn assert_malformed(position: &str) {
        match parse_position(position) {
            Err(ChessErrors::MalformedInput { .. }) => {}
            other => panic!("expected malformed input for {position:?}, got {other:?}"),
        }
    }

    #[test]
    fn parse_starting_position() {
        let game_state = parse_position(STARTING_POSITION).expect("starting position should parse");

        assert_eq!(game_state.side_to_move, Color::White);
        assert_eq!(game_state.castling_rights, CastlingRights::ALL);
        assert_eq!(game_state.en_passant_target, None);

        let e1 = algebraic_to_square("e1").expect("e1");
        let d8 = algebraic_to_square("d8").expect("d8");
        assert_eq!(
            game_state.board.piece_at(e1),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            game_state.board.piece_at(d8),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
    }

    #[test]
    fn clocks_are_optional() {
        let game_state = parse_position("4k3/8/8/8/8/8/8/4K3 b Kq e3")
            .expect("position without clocks should parse");
        assert_eq!(game_state.side_to_move, Color::Black);
        assert!(game_state.castling_rights.white_king_side);
        assert!(game_state.castling_rights.black_queen_side);
        assert!(!game_state.castling_rights.white_queen_side);
        assert_eq!(
            game_state.en_passant_target,
            Some(algebraic_to_square("e3").expect("e3"))
        );
    }

    #[test]
    fn rejects_rank_that_does_not_sum_to_eight() {
        assert_malformed("4k3/8/8/8/8/8/8/4K2 w - -");
        assert_malformed("4k3/8/8/8/8/8/8/4K4 w - -");
        assert_malformed("4k3/8/8/8/8/8/8/44K3 w - -");
    }

    #[test]
    fn rejects_unknown_piece_letter() {
        assert_malformed("4k3/8/8/8/8/8/8/4K2X w - -");
    }

    #[test]
    fn rejects_bad_en_passant_token() {
        assert_malformed("4k3/8/8/8/8/8/8/4K3 w - e9");
        assert_malformed("4k3/8/8/8/8/8/8/4K3 w - none");
        assert_malformed("4k3/8/8/8/8/8/8/4K3 w - e4");
        assert_malformed("4k3/8/8/8/8/8/8/4K3 w - a1");
        assert!(parse_position("4k3/8/8/8/8/8/8/4K3 w - c6").is_ok());
    }

    #[test]
    fn rejects_repeated_castling_letters() {
        assert_malformed("r3k2r/8/8/8/8/8/8/R3K2R w KKq -");
        assert_malformed("r3k2r/8/8/8/8/8/8/R3K2R w KQkqq -");
        assert!(parse_position("r3k2r/8/8/8/8/8/8/R3K2R w qkQK -").is_ok());
    }

    #[test]
    fn rejects_bad_structure() {
        assert_malformed("");
        assert_malformed("4k3/8/8/8/8/8/4K3 w - -");
        assert_malformed("4k3/8/8/8/8/8/8/4K3 x - -");
        assert_malformed("4k3/8/8/8/8/8/8/4K3 w KX -");
        assert_malformed("4k3/8/8/8/8/8/8/4K3 w - - 0 1 extra");
        assert_malformed("4k3/8/8/8/8/8/8/4K3 w - - zero");
        assert_malformed("4k3/8/8/8/8/8/8/4K0 w - -");
    }

    #[test]
    fn rejects_missing_or_extra_kings() {
        assert_malformed("8/8/8/8/8/8/8/4K3 w - -");
        assert_malformed("4k3/8/8/8/8/8/8/3KK3 w - -");
    }
}
