use log::warn;

use crate::error::{Error, Result};
use crate::state::GameState;
use crate::types::Owner;

/// Turn-relative winner: once the game is over, the player NOT to move won
/// (the capture that ended the game was the previous move).
#[inline]
pub fn winner(state: &GameState) -> Option<Owner> {
    if state.is_over() {
        Some(state.next.other())
    } else {
        None
    }
}

/// Winner of a finished game, checked against the capture counts.
///
/// `Ok(None)` while the game is running. Fails with
/// [`Error::UnreachableState`] when the game is over but the turn-relative
/// winner does not hold the game-over threshold. Legal play never reaches
/// that case because only the mover's counts change on a move.
pub fn terminal_outcome(state: &GameState) -> Result<Option<Owner>> {
    let Some(w) = winner(state) else {
        return Ok(None);
    };
    if state.has_threshold(w) {
        Ok(Some(w))
    } else {
        Err(Error::UnreachableState {
            winner: w,
            captured: state.captured(w),
            threshold: state.game_over_threshold(),
        })
    }
}

/// Exact value of a finished game from the side to move's perspective:
/// -1 when the opponent won, 0 for the unreachable draw case (reported, not
/// propagated) and for positions that are not over.
pub fn terminal_value(state: &GameState) -> i8 {
    match terminal_outcome(state) {
        Ok(Some(w)) if w == state.next => 1,
        Ok(Some(_)) => -1,
        Ok(None) => 0,
        Err(e) => {
            warn!("[score] scoring as draw: {e}");
            0
        }
    }
}
