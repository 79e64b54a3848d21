//! Negamax without native recursion: an explicit LIFO of node ids over an
//! arena-owned search tree. Each node is popped twice: once to expand it
//! (children pushed above it) and once, after every child subtree has been
//! drained, to fold the children's scores.
//!
//! Children are appended to the end of the arena and expanded last-in
//! first-out, so when a node folds its whole subtree sits at the tail of the
//! arena. Folding a non-root node truncates that tail: the arena holds one
//! path of sibling sets (bounded by depth times branching), never the tree.

use log::debug;

use crate::engine::apply::play;
use crate::engine::score::terminal_value;
use crate::state::GameState;
use crate::types::Move;

use super::SearchResult;

pub type NodeId = usize;

pub const ROOT: NodeId = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unvisited,
    Expanded,
    Scored,
}

#[derive(Debug, Clone)]
pub struct SearchNode {
    pub state: GameState,
    /// Move that produced this node from its parent; `None` for the root.
    pub mv: Option<Move>,
    /// Children in enumeration order. Populated once on expansion and
    /// released again when a non-root node folds.
    pub children: Vec<NodeId>,
    pub score: Option<i8>,
}

impl SearchNode {
    #[inline]
    fn new(state: GameState, mv: Option<Move>) -> Self {
        Self {
            state,
            mv,
            children: Vec::new(),
            score: None,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        match (self.score, self.children.is_empty()) {
            (Some(_), _) => Phase::Scored,
            (None, true) => Phase::Unvisited,
            (None, false) => Phase::Expanded,
        }
    }
}

/// Search tree rooted at one state. Nodes are created lazily by [`run`](Self::run);
/// after a run only the root and its scored children remain.
#[derive(Debug, Clone)]
pub struct IterativeSearch {
    nodes: Vec<SearchNode>,
    // States created so far, root included
    visited: u64,
    // Largest arena length seen
    peak: usize,
}

impl IterativeSearch {
    pub fn new(root: GameState) -> Self {
        Self {
            nodes: vec![SearchNode::new(root, None)],
            visited: 1,
            peak: 1,
        }
    }

    #[inline]
    pub fn root(&self) -> &SearchNode {
        &self.nodes[ROOT]
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes created over the whole run; matches the recursive engine's count.
    #[inline]
    pub fn visited(&self) -> u64 {
        self.visited
    }

    /// High-water mark of the arena length.
    #[inline]
    pub fn peak_len(&self) -> usize {
        self.peak
    }

    /// Drive the stack until the root is scored. Calling it again is a no-op.
    pub fn run(&mut self) {
        let mut stack: Vec<NodeId> = vec![ROOT];
        while let Some(id) = stack.pop() {
            match self.nodes[id].phase() {
                Phase::Scored => {}
                Phase::Unvisited => {
                    let state = self.nodes[id].state;
                    let moves = state.legal_moves();
                    if moves.is_empty() {
                        self.nodes[id].score = Some(terminal_value(&state));
                        continue;
                    }
                    let first = self.nodes.len();
                    for mv in moves {
                        self.nodes.push(SearchNode::new(play(&state, mv), Some(mv)));
                    }
                    self.visited += (self.nodes.len() - first) as u64;
                    self.peak = self.peak.max(self.nodes.len());
                    let children: Vec<NodeId> = (first..self.nodes.len()).collect();
                    stack.push(id);
                    stack.extend_from_slice(&children);
                    self.nodes[id].children = children;
                }
                Phase::Expanded => {
                    let score = self.nodes[id]
                        .children
                        .iter()
                        .map(|&c| {
                            let child = self.nodes[c].score;
                            debug_assert!(child.is_some(), "child {c} folded before being scored");
                            -child.unwrap_or(0)
                        })
                        .max();
                    self.nodes[id].score = score;
                    if id != ROOT {
                        self.release_children(id);
                    }
                }
            }
        }
        debug!(
            "[iterative] visited {} nodes, peak arena {}",
            self.visited, self.peak
        );
    }

    // The children of `id` and all their descendants are the arena tail.
    fn release_children(&mut self, id: NodeId) {
        let children = std::mem::take(&mut self.nodes[id].children);
        if let Some(&first) = children.first() {
            debug_assert!(first > id, "children are appended after their parent");
            self.nodes.truncate(first);
        }
    }

    /// First root child, in enumeration order, whose negated score equals the root score.
    pub fn best_move(&self) -> Option<Move> {
        let root_score = self.root().score?;
        self.root()
            .children
            .iter()
            .map(|&c| &self.nodes[c])
            .find(|child| child.score.map(|s| -s) == Some(root_score))
            .and_then(|child| child.mv)
    }

    pub fn result(&self) -> SearchResult {
        SearchResult {
            best_move: self.best_move(),
            value: self.root().score.unwrap_or_else(|| terminal_value(&self.root().state)),
            nodes: self.visited,
        }
    }
}

pub fn search_root(state: &GameState) -> SearchResult {
    let mut search = IterativeSearch::new(*state);
    search.run();
    search.result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rules;
    use crate::types::Owner;

    #[test]
    fn every_node_ends_scored() {
        let state = GameState::new(Rules::new(2, Owner::P1).unwrap()).unwrap();
        let state = crate::apply_move(&state, Move::new(0)).unwrap();
        let state = crate::apply_move(&state, Move::new(1)).unwrap();
        let mut search = IterativeSearch::new(state);
        search.run();
        for id in 0..search.len() {
            assert_eq!(search.node(id).phase(), Phase::Scored, "node {id}");
        }
    }

    #[test]
    fn children_follow_enumeration_order() {
        let state = GameState::new(Rules::new(2, Owner::P1).unwrap()).unwrap();
        let mut search = IterativeSearch::new(state);
        search.run();
        let moves: Vec<Option<Move>> = search
            .root()
            .children
            .iter()
            .map(|&c| search.node(c).mv)
            .collect();
        let expected: Vec<Option<Move>> = state.legal_moves().into_iter().map(Some).collect();
        assert_eq!(moves, expected);
    }

    #[test]
    fn folded_subtrees_are_released() {
        let state = GameState::new(Rules::new(2, Owner::P1).unwrap()).unwrap();
        let mut search = IterativeSearch::new(state);
        search.run();
        assert_eq!(search.visited(), 6992);
        // root plus its seven children are all that is left
        assert_eq!(search.len(), 8);
        for &c in &search.root().children {
            let child = search.node(c);
            assert_eq!(child.phase(), Phase::Scored);
            assert!(child.children.is_empty(), "child {c} still holds its subtree");
        }
        // one sibling set per ply at most: 1 + 7 + 6 + ... + 1
        assert!(search.peak_len() <= 29, "peak arena {}", search.peak_len());
    }

    #[test]
    fn terminal_root_has_no_children() {
        let state = GameState::new(Rules::new(1, Owner::P1).unwrap()).unwrap();
        let state = crate::apply_move(&state, Move::new(0)).unwrap();
        let result = search_root(&state);
        assert_eq!(result.best_move, None);
        assert_eq!(result.value, -1);
        assert_eq!(result.nodes, 1);
    }
}
