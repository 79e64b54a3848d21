use serde::{Deserialize, Serialize};

use crate::engine::apply::play;
use crate::engine::rough::rough_outcome;
use crate::state::GameState;
use crate::types::Move;

pub mod enumerate;
pub mod iterative;
pub mod negamax;
pub mod parallel;

pub use enumerate::reachable_states;
pub use iterative::{IterativeSearch, SearchNode};
pub use negamax::negamax;

/// Outcome of an exhaustive search from one root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// `None` when the root is already finished.
    pub best_move: Option<Move>,
    /// Root value from the side to move's perspective.
    pub value: i8,
    /// States visited, root included.
    pub nodes: u64,
}

/// Automatic move pickers. All of them only ever return enumerator output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    RoughOutcome,
    RecursiveMinimax,
    IterativeMinimax,
    ParallelMinimax,
}

impl Strategy {
    /// Exhaustive search result, `None` for the shallow rough-outcome strategy.
    pub fn search(self, state: &GameState) -> Option<SearchResult> {
        match self {
            Strategy::RoughOutcome => None,
            Strategy::RecursiveMinimax => Some(negamax::search_root(state)),
            Strategy::IterativeMinimax => Some(iterative::search_root(state)),
            Strategy::ParallelMinimax => Some(parallel::search_root(state)),
        }
    }
}

/// Move chosen by `strategy`, `None` once the game is over.
pub fn choose_move(strategy: Strategy, state: &GameState) -> Option<Move> {
    match strategy {
        Strategy::RoughOutcome => rough_outcome_move(state),
        other => other.search(state).and_then(|r| r.best_move),
    }
}

/// Shallow strategy: the move leaving the opponent the lowest rough outcome.
/// Ties go to the first such move in enumeration order.
pub fn rough_outcome_move(state: &GameState) -> Option<Move> {
    first_max(
        state
            .legal_moves()
            .into_iter()
            .map(|mv| (mv, -rough_outcome(&play(state, mv)))),
    )
    .map(|(mv, _)| mv)
}

/// Highest-valued entry; on ties the earliest one wins.
pub(crate) fn first_max(scored: impl IntoIterator<Item = (Move, i8)>) -> Option<(Move, i8)> {
    scored.into_iter().fold(None, |best, (mv, v)| match best {
        Some((_, b)) if v <= b => best,
        _ => Some((mv, v)),
    })
}
