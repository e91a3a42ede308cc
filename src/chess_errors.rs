//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type of the crate. Variants map onto the
//! three failure modes of the engine:
//! - `MalformedInput`: a position string could not be turned into a state.
//!   Setup is aborted; no partial state is ever returned.
//! - `IllegalMoveRequest`: a caller asked for a move that is not legal in the
//!   current position. The state is left untouched.
//! - `InvariantViolation`: the engine reached a state that correct parsing and
//!   execution cannot produce (for example a side without a king). This is a
//!   logic bug and is propagated to the caller instead of being papered over.

use thiserror::Error;

use crate::game_state::chess_types::Square;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// The position string is not well formed.
    #[error("malformed position: {reason}")]
    MalformedInput { reason: String },

    /// The requested move is not in the legal move list.
    #[error("illegal move request: {from} to {to}")]
    IllegalMoveRequest { from: Square, to: Square },

    /// An internal consistency rule was broken.
    #[error("invariant violation: {reason}")]
    InvariantViolation { reason: String },
}

impl ChessErrors {
    pub fn malformed(reason: impl Into<String>) -> Self {
        ChessErrors::MalformedInput {
            reason: reason.into(),
        }
    }

    pub fn invariant(reason: impl Into<String>) -> Self {
        ChessErrors::InvariantViolation {
            reason: reason.into(),
        }
    }
}

/// Result alias for rules-engine operations.
pub type ChessResult<T> = Result<T, ChessErrors>;

#[cfg(test)]
mod tests {
    use super::ChessErrors;
    use crate::game_state::chess_types::Square;

    #[test]
    fn messages_name_the_offending_squares() {
        let err = ChessErrors::IllegalMoveRequest {
            from: Square::new(1, 4).expect("e2"),
            to: Square::new(4, 4).expect("e5"),
        };
        assert_eq!(err.to_string(), "illegal move request: e2 to e5");
        assert_eq!(
            ChessErrors::malformed("rank 3 has 9 squares").to_string(),
            "malformed position: rank 3 has 9 squares"
        );
    }
}
