//! Turn-based interaction model.
//!
//! `GameCoordinator` exclusively owns the authoritative `GameState` together
//! with the presentation state a client needs: the current selection and its
//! cached legal moves. Every command runs to completion before returning;
//! nothing is shared and nothing suspends mid-transition.
//!
//! Phases:
//! - `NoSelection`: clicking an own piece selects it.
//! - `PieceSelected`: clicking a cached destination plays the move, clicking
//!   another own piece reselects, anything else deselects.
//! - `GameOver`: every click is ignored until `reset`.

use tracing::{debug, info, warn};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::coordinator::game_config::GameConfig;
use crate::coordinator::game_status::{GameStatus, Outcome};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::{has_any_legal_move, legal_moves};
use crate::utils::position_parser::parse_position;

/// A selected square and the legal moves cached for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub square: Square,
    pub moves: Vec<Move>,
}

impl Selection {
    pub fn move_to(&self, destination: Square) -> Option<Move> {
        self.moves.iter().copied().find(|mv| mv.to == destination)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    NoSelection,
    PieceSelected(Selection),
    GameOver(Outcome),
}

/// What a command did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickResult {
    /// A piece is now selected with this many legal moves.
    Selected { square: Square, moves: usize },
    Deselected,
    Moved(Move),
    /// Nothing changed.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct GameCoordinator {
    config: GameConfig,
    state: GameState,
    phase: Phase,
    in_check: bool,
}

impl GameCoordinator {
    /// Starts a game from the configured position. A malformed position
    /// aborts construction.
    pub fn new(config: GameConfig) -> ChessResult<Self> {
        let state = parse_position(&config.start_position)?;
        let mut coordinator = Self {
            config,
            state,
            phase: Phase::NoSelection,
            in_check: false,
        };
        coordinator.refresh_status()?;
        Ok(coordinator)
    }

    pub fn from_position(position: &str) -> ChessResult<Self> {
        Self::new(GameConfig::default().with_start_position(position))
    }

    /// Back to the configured start position.
    pub fn reset(&mut self) -> ChessResult<()> {
        self.state = parse_position(&self.config.start_position)?;
        self.phase = Phase::NoSelection;
        self.refresh_status()?;
        info!("game reset");
        Ok(())
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn selection(&self) -> Option<&Selection> {
        match &self.phase {
            Phase::PieceSelected(selection) => Some(selection),
            _ => None,
        }
    }

    /// `None` while the game is still running.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }

    pub fn status(&self) -> GameStatus {
        match self.outcome() {
            Some(outcome) => GameStatus::Over(outcome),
            None if self.in_check => GameStatus::Check(self.state.side_to_move),
            None => GameStatus::ToMove(self.state.side_to_move),
        }
    }

    /// Legal moves of the piece on `square`; nothing once the game is over.
    pub fn legal_moves_at(&self, square: Square) -> ChessResult<Vec<Move>> {
        if self.is_game_over() {
            return Ok(Vec::new());
        }
        legal_moves(square, &self.state)
    }

    /// Selects an own piece, or clears the selection for any other square.
    pub fn select_square(&mut self, square: Square) -> ChessResult<ClickResult> {
        if self.is_game_over() {
            return Ok(ClickResult::Ignored);
        }
        if !self.is_own_piece(square) {
            return Ok(self.deselect());
        }

        let moves = legal_moves(square, &self.state)?;
        if moves.is_empty() && !self.config.select_immobile_pieces {
            debug!(%square, "piece has no legal moves, not selectable");
            return Ok(self.deselect());
        }

        debug!(%square, moves = moves.len(), "piece selected");
        let result = ClickResult::Selected {
            square,
            moves: moves.len(),
        };
        self.phase = Phase::PieceSelected(Selection { square, moves });
        Ok(result)
    }

    /// A click on `square`, interpreted against the current phase.
    pub fn attempt_move(&mut self, square: Square) -> ChessResult<ClickResult> {
        let chosen = match &self.phase {
            Phase::GameOver(_) => return Ok(ClickResult::Ignored),
            Phase::NoSelection if !self.is_own_piece(square) => return Ok(ClickResult::Ignored),
            Phase::NoSelection => None,
            Phase::PieceSelected(selection) => selection.move_to(square),
        };

        match chosen {
            Some(mv) => {
                self.execute(mv)?;
                Ok(ClickResult::Moved(mv))
            }
            None => self.select_square(square),
        }
    }

    /// Plays `from` to `to` directly, bypassing selection.
    ///
    /// Fails with `IllegalMoveRequest`, leaving the game untouched, when the
    /// move is not legal in the current position.
    pub fn play_move(&mut self, from: Square, to: Square) -> ChessResult<Move> {
        let candidate = if self.is_game_over() {
            None
        } else {
            legal_moves(from, &self.state)?
                .into_iter()
                .find(|mv| mv.to == to)
        };

        let Some(mv) = candidate else {
            warn!(%from, %to, "rejected move request");
            return Err(ChessErrors::IllegalMoveRequest { from, to });
        };

        self.execute(mv)?;
        Ok(mv)
    }

    fn is_own_piece(&self, square: Square) -> bool {
        matches!(self.state.board.piece_at(square), Some(piece) if piece.color == self.state.side_to_move)
    }

    fn deselect(&mut self) -> ClickResult {
        if matches!(self.phase, Phase::PieceSelected(_)) {
            debug!("selection cleared");
            self.phase = Phase::NoSelection;
            ClickResult::Deselected
        } else {
            ClickResult::Ignored
        }
    }

    fn execute(&mut self, mv: Move) -> ChessResult<()> {
        let mover = self.state.side_to_move;
        apply_move(&mut self.state, &mv);
        self.state.pass_turn();
        self.phase = Phase::NoSelection;
        debug!(%mv, %mover, "move applied");
        self.refresh_status()
    }

    /// Re-evaluates check and terminal status for the side to move.
    fn refresh_status(&mut self) -> ChessResult<()> {
        let side = self.state.side_to_move;
        self.in_check = is_in_check(&self.state.board, side)?;

        if !has_any_legal_move(&self.state)? {
            let outcome = if self.in_check {
                Outcome::Checkmate(side)
            } else {
                Outcome::Stalemate
            };
            info!(?outcome, "game over");
            self.phase = Phase::GameOver(outcome);
        }

        Ok(())
    }
}
