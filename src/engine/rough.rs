use crate::engine::apply::play;
use crate::state::GameState;

/// Two-ply estimate in [-1, 1] of what the side to move can guarantee.
///
/// - finished game: -1 (the side to move already lost)
/// - some move ends the game in the mover's favour: 1
/// - every move allows an immediately winning reply: -1
/// - otherwise 0
pub fn rough_outcome(state: &GameState) -> i8 {
    if state.is_over() {
        return -1;
    }
    let me = state.next;
    let moves = state.legal_moves();
    let mut refuted = 0usize;
    for &mv in &moves {
        let ns = play(state, mv);
        if ns.has_threshold(me) {
            return 1;
        }
        let opp = ns.next;
        let has_winning_reply = ns
            .legal_moves()
            .into_iter()
            .any(|reply| play(&ns, reply).has_threshold(opp));
        if has_winning_reply {
            refuted += 1;
        }
    }
    if refuted == moves.len() {
        -1
    } else {
        0
    }
}
