use crate::board::Board;
use crate::error::{Error, Result};
use crate::geometry::line_threshold;
use crate::state::GameState;
use crate::types::{Family, Move, Owner};

/// Latch every still-uncaptured ley-line whose owned-cell count meets the
/// threshold. Counts are recomputed from scratch for all three families;
/// lines that already carry a tag are never rewritten.
pub fn resolve_captures(board: &mut Board) {
    let layout = board.layout();
    for family in Family::all() {
        for (idx, cells) in layout.lines(family).iter().enumerate() {
            if board.line(family, idx).is_some() {
                continue;
            }
            let threshold = line_threshold(cells.len());
            let (p1, p2) = board.line_counts(family, idx);
            if p1 >= threshold {
                board.set_line(family, idx, Some(Owner::P1));
            } else if p2 >= threshold {
                board.set_line(family, idx, Some(Owner::P2));
            }
        }
    }
}

/// Successor state for a move already known to be legal (enumerator output).
#[inline]
pub(crate) fn play(state: &GameState, mv: Move) -> GameState {
    debug_assert!(state.is_legal(mv), "play() given illegal move {mv}");
    let mut ns = *state;
    ns.board.set(mv.cell, Some(state.next));
    resolve_captures(&mut ns.board);
    ns.next = ns.next.other();
    ns
}

/// Apply a move as a pure transform: returns a new GameState on success.
/// The side to move claims the cell; the input state is left untouched.
pub fn apply_move(state: &GameState, mv: Move) -> Result<GameState> {
    if !state.is_legal(mv) {
        return Err(Error::InvalidMove {
            letter: mv.letter(),
        });
    }
    Ok(play(state, mv))
}
