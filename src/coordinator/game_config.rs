//! Coordinator configuration.

use crate::game_state::chess_rules::STARTING_POSITION;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Position string the game starts from and `reset` returns to.
    pub start_position: String,
    /// Whether a piece with no legal moves can still be selected.
    pub select_immobile_pieces: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_position: STARTING_POSITION.to_owned(),
            select_immobile_pieces: true,
        }
    }
}

impl GameConfig {
    pub fn with_start_position(mut self, position: impl Into<String>) -> Self {
        self.start_position = position.into();
        self
    }

    pub fn with_immobile_selection(mut self, allowed: bool) -> Self {
        self.select_immobile_pieces = allowed;
        self
    }
}
