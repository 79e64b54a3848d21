use std::hash::BuildHasherDefault;

use hashbrown::HashSet as HbHashSet;
use log::debug;

use crate::engine::apply::play;
use crate::state::GameState;

type FastHasher = BuildHasherDefault<ahash::AHasher>;
type FastSet = HbHashSet<GameState, FastHasher>;

/// Every distinct state reachable from `root` by legal play, `root` included,
/// in depth-first discovery order (children visited in enumeration order).
pub fn reachable_states(root: &GameState) -> Vec<GameState> {
    let mut visited = FastSet::default();
    let mut order = Vec::new();
    let mut stack = vec![*root];
    while let Some(state) = stack.pop() {
        if !visited.insert(state) {
            continue;
        }
        order.push(state);
        // Reverse so the first enumerated child is expanded first
        for mv in state.legal_moves().into_iter().rev() {
            let ns = play(&state, mv);
            if !visited.contains(&ns) {
                stack.push(ns);
            }
        }
    }
    debug!("[enumerate] {} reachable states", order.len());
    order
}
