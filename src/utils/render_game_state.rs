//! Plain-text board dump for diagnostics.
//!
//! Uses position-string letters so the output can be read back by eye
//! against a position string. Not a display surface; the command binary and
//! tests use it to show what the engine holds.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Render the board with rank 8 at the top.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in (0..8u8).rev() {
        out.push(char::from(b'1' + row));
        out.push(' ');

        for col in 0..8u8 {
            let cell = Square::new(row, col)
                .and_then(|square| game_state.board.piece_at(square))
                .map(Piece::letter)
                .unwrap_or('.');
            out.push(cell);

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + row));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h\n");
    let en_passant = game_state
        .en_passant_target
        .map(|square| square.to_string())
        .unwrap_or_else(|| "-".to_owned());
    out.push_str(&format!(
        "{} to move, castling {}, en passant {}",
        game_state.side_to_move, game_state.castling_rights, en_passant
    ));

    out
}
