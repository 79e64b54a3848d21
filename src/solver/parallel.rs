use log::debug;
use rayon::prelude::*;

use crate::engine::apply::play;
use crate::engine::score::terminal_value;
use crate::state::GameState;
use crate::types::Move;

use super::negamax::negamax_counted;
use super::{first_max, SearchResult};

/// Root fan-out over rayon: each root child is searched independently with the
/// recursive engine. Results are collected in enumeration order and the
/// first maximal move wins, so the choice matches the sequential engines.
pub fn search_root(state: &GameState) -> SearchResult {
    if state.is_over() {
        return SearchResult {
            best_move: None,
            value: terminal_value(state),
            nodes: 1,
        };
    }

    let scored: Vec<(Move, i8, u64)> = state
        .legal_moves()
        .into_par_iter()
        .map(|mv| {
            let mut nodes = 0u64;
            let v = -negamax_counted(&play(state, mv), &mut nodes);
            (mv, v, nodes)
        })
        .collect();

    let nodes = 1 + scored.iter().map(|&(_, _, n)| n).sum::<u64>();
    let best = first_max(scored.iter().map(|&(mv, v, _)| (mv, v)));
    debug!("[parallel] {} root branches, {nodes} nodes, best={best:?}", scored.len());

    SearchResult {
        best_move: best.map(|(mv, _)| mv),
        value: best.map_or_else(|| terminal_value(state), |(_, v)| v),
        nodes,
    }
}
