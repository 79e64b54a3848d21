use log::debug;

use crate::engine::apply::play;
use crate::engine::score::terminal_value;
use crate::state::GameState;

use super::{first_max, SearchResult};

/// Exact negamax value of `state` from the side to move's perspective.
/// Full-depth, no pruning: +1 win, -1 loss.
pub fn negamax(state: &GameState) -> i8 {
    let mut nodes = 0u64;
    negamax_counted(state, &mut nodes)
}

pub(crate) fn negamax_counted(state: &GameState, nodes: &mut u64) -> i8 {
    *nodes += 1;
    if state.is_over() {
        return terminal_value(state);
    }
    state
        .legal_moves()
        .into_iter()
        .map(|mv| -negamax_counted(&play(state, mv), nodes))
        .max()
        // a running game always has an unclaimed cell: a full board captures every line
        .unwrap_or_else(|| terminal_value(state))
}

/// Pick the first move (layout order) whose negated child value equals the
/// best value. `best_move` is `None` at a finished root.
pub fn search_root(state: &GameState) -> SearchResult {
    let mut nodes = 1u64;
    if state.is_over() {
        return SearchResult {
            best_move: None,
            value: terminal_value(state),
            nodes,
        };
    }

    let best = first_max(
        state
            .legal_moves()
            .into_iter()
            .map(|mv| (mv, -negamax_counted(&play(state, mv), &mut nodes))),
    );
    debug!("[negamax] searched {nodes} nodes, best={best:?}");

    match best {
        Some((mv, value)) => SearchResult {
            best_move: Some(mv),
            value,
            nodes,
        },
        None => SearchResult {
            best_move: None,
            value: terminal_value(state),
            nodes,
        },
    }
}
