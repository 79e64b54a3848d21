#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod types;
pub mod geometry;
pub mod rules;
pub mod board;
pub mod state;
pub mod render;
pub mod game;

pub mod engine {
    pub mod apply;
    pub mod rough;
    pub mod score;
}

pub mod solver;

// Re-exports: stable minimal API surface for external callers
pub use crate::board::Board;
pub use crate::engine::apply::apply_move;
pub use crate::engine::rough::rough_outcome;
pub use crate::engine::score::{terminal_outcome, terminal_value, winner};
pub use crate::error::{Error, Result};
pub use crate::game::{Controller, Game};
pub use crate::rules::Rules;
pub use crate::solver::{choose_move, SearchResult, Strategy};
pub use crate::state::{is_over, legal_moves, GameState};
pub use crate::types::{Family, Move, Owner};
