//! Game outcome and status reporting.

use std::fmt;

use crate::game_state::chess_types::Color;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The contained color is checkmated.
    Checkmate(Color),
    Stalemate,
}

impl Outcome {
    pub const fn winner(self) -> Option<Color> {
        match self {
            Outcome::Checkmate(loser) => Some(loser.opposite()),
            Outcome::Stalemate => None,
        }
    }
}

/// Status of the side to move, as shown to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    ToMove(Color),
    Check(Color),
    Over(Outcome),
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::ToMove(color) => write!(f, "{color} to move."),
            GameStatus::Check(color) => write!(f, "{color} is in Check!"),
            GameStatus::Over(Outcome::Checkmate(loser)) => {
                write!(f, "Checkmate! {} wins.", loser.opposite())
            }
            GameStatus::Over(Outcome::Stalemate) => f.write_str("Stalemate! Game is a draw."),
        }
    }
}
