//! Crate root module declarations for the chess rules engine.
//!
//! Exposes the position model, the legality engine (attack generation, check
//! detection, legality filtering, move execution), the game coordinator that
//! drives a game turn by turn, and parsing/diagnostic helpers.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod attack_generator;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_moves_king;
    pub mod legal_moves_pawn;
    pub mod perft;
}

pub mod coordinator {
    pub mod game_config;
    pub mod game_coordinator;
    pub mod game_status;
}

pub mod utils {
    pub mod algebraic;
    pub mod position_parser;
    pub mod render_game_state;
}
