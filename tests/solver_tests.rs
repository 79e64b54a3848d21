use stonehenge::solver::{
    iterative, negamax, parallel, reachable_states, rough_outcome_move, IterativeSearch,
};
use stonehenge::{
    apply_move, choose_move, legal_moves, rough_outcome, GameState, Move, Owner, Rules, Strategy,
};

fn state_after(size: u8, first: Owner, letters: &str) -> GameState {
    let mut state = GameState::new(Rules::new(size, first).expect("rules")).expect("state");
    for c in letters.chars() {
        state = apply_move(&state, Move::from_letter(c).expect("letter")).expect("apply_move");
    }
    state
}

fn letter(mv: Option<Move>) -> Option<char> {
    mv.map(Move::letter)
}

#[test]
fn opening_values_from_empty_board() {
    // size 1: any first claim wins; A is first in layout order
    let res = negamax::search_root(&state_after(1, Owner::P1, ""));
    assert_eq!(letter(res.best_move), Some('A'));
    assert_eq!(res.value, 1);
    assert_eq!(res.nodes, 4);

    // size 2: first player wins, A again
    let res = negamax::search_root(&state_after(2, Owner::P1, ""));
    assert_eq!(letter(res.best_move), Some('A'));
    assert_eq!(res.value, 1);
    assert_eq!(res.nodes, 6992);
}

#[test]
fn known_midgame_positions() {
    // (size, moves played, best move, value, nodes)
    let cases = [
        (2u8, "A", 'B', -1i8, 983u64),
        (2, "AB", 'C', 1, 129),
        (2, "D", 'A', -1, 1093),
        (2, "DA", 'G', 1, 182),
        (2, "AD", 'B', 1, 134),
        (3, "AFKD", 'C', 1, 37565),
        (3, "ABCDE", 'F', -1, 3578),
    ];
    for (size, played, best, value, nodes) in cases {
        let state = state_after(size, Owner::P1, played);
        for res in [
            negamax::search_root(&state),
            iterative::search_root(&state),
            parallel::search_root(&state),
        ] {
            assert_eq!(letter(res.best_move), Some(best), "size {size} after {played}");
            assert_eq!(res.value, value, "size {size} after {played}");
            assert_eq!(res.nodes, nodes, "size {size} after {played}");
        }
    }
}

#[test]
fn terminal_root_returns_no_move() {
    let state = state_after(2, Owner::P1, "ABCDE");
    for res in [
        negamax::search_root(&state),
        iterative::search_root(&state),
        parallel::search_root(&state),
    ] {
        assert_eq!(res.best_move, None);
        assert_eq!(res.value, -1);
        assert_eq!(res.nodes, 1);
    }
    assert_eq!(choose_move(Strategy::RoughOutcome, &state), None);
}

/// Recursive, iterative and parallel engines agree on every reachable state.
#[test]
fn engines_agree_on_all_reachable_states() {
    for size in [1u8, 2] {
        for first in [Owner::P1, Owner::P2] {
            let root = state_after(size, first, "");
            for state in reachable_states(&root) {
                let rec = negamax::search_root(&state);
                let it = iterative::search_root(&state);
                let par = parallel::search_root(&state);
                assert_eq!(rec, it, "recursive vs iterative at {state:?}");
                assert_eq!(rec, par, "recursive vs parallel at {state:?}");
            }
        }
    }
}

#[test]
fn reachable_state_counts() {
    assert_eq!(reachable_states(&state_after(1, Owner::P1, "")).len(), 4);
    let states = reachable_states(&state_after(2, Owner::P2, ""));
    assert_eq!(states.len(), 2135);
    assert_eq!(states.iter().filter(|s| s.is_over()).count(), 837);
    assert_eq!(states.iter().filter(|s| negamax::negamax(s) == 1).count(), 997);
}

/// value(s) == max over moves of -value(child) for every running state.
#[test]
fn negamax_recurrence_holds() {
    let root = state_after(2, Owner::P1, "");
    for state in reachable_states(&root) {
        let moves = legal_moves(&state);
        if moves.is_empty() {
            assert_eq!(negamax::negamax(&state), -1);
            continue;
        }
        let best = moves
            .into_iter()
            .map(|mv| -negamax::negamax(&apply_move(&state, mv).unwrap()))
            .max()
            .unwrap();
        assert_eq!(negamax::negamax(&state), best);
    }
}

#[test]
fn iterative_tree_matches_recursive_child_values() {
    let state = state_after(2, Owner::P1, "D");
    let mut search = IterativeSearch::new(state);
    search.run();
    for &child in &search.root().children {
        let node = search.node(child);
        let mv = node.mv.expect("child move");
        let expected = negamax::negamax(&apply_move(&state, mv).unwrap());
        assert_eq!(node.score, Some(expected), "child {mv}");
    }
    assert_eq!(search.visited(), negamax::search_root(&state).nodes);
    assert_eq!(search.len(), 1 + search.root().children.len());
}

#[test]
fn iterative_arena_stays_bounded_by_depth() {
    let state = state_after(3, Owner::P1, "AFKD");
    let mut search = IterativeSearch::new(state);
    search.run();
    assert_eq!(search.visited(), 37565);
    // at most one sibling set per remaining ply: 1 + 8 + 7 + ... + 1
    assert!(search.peak_len() <= 37, "peak arena {}", search.peak_len());
}

#[test]
fn rough_outcome_estimates() {
    assert_eq!(rough_outcome(&state_after(1, Owner::P1, "")), 1);
    assert_eq!(rough_outcome(&state_after(2, Owner::P1, "")), 0);
    assert_eq!(rough_outcome(&state_after(2, Owner::P1, "AB")), 1);
    assert_eq!(rough_outcome(&state_after(2, Owner::P1, "AD")), 1);
    assert_eq!(rough_outcome(&state_after(2, Owner::P1, "DA")), 0);
    // finished game: the side to move already lost
    assert_eq!(rough_outcome(&state_after(2, Owner::P1, "ABCDE")), -1);
}

/// Moves of `state` after which the opponent can end the game at once.
fn refuted_moves(state: &GameState) -> Vec<char> {
    legal_moves(state)
        .into_iter()
        .filter(|&mv| {
            let ns = apply_move(state, mv).unwrap();
            legal_moves(&ns)
                .into_iter()
                .any(|reply| apply_move(&ns, reply).unwrap().has_threshold(ns.next))
        })
        .map(Move::letter)
        .collect()
}

#[test]
fn rough_outcome_every_move_refuted_in_running_game() {
    // p2 to move holding one line against three; every claim lets p1 finish
    let state = state_after(2, Owner::P1, "ABC");
    assert!(!state.is_over());
    assert_eq!((state.captured(Owner::P1), state.captured(Owner::P2)), (3, 1));
    assert_eq!(refuted_moves(&state), vec!['D', 'E', 'F', 'G']);
    assert_eq!(rough_outcome(&state), -1);
}

#[test]
fn rough_outcome_some_moves_refuted_is_even() {
    let state = state_after(2, Owner::P1, "A");
    assert_eq!(refuted_moves(&state), vec!['B', 'C', 'D']);
    assert_eq!(rough_outcome(&state), 0);
}

#[test]
fn rough_outcome_losing_running_states() {
    let root = state_after(2, Owner::P1, "");
    let losing: Vec<GameState> = reachable_states(&root)
        .into_iter()
        .filter(|s| !s.is_over() && rough_outcome(s) == -1)
        .collect();
    assert_eq!(losing.len(), 282);
    for state in &losing {
        assert_eq!(refuted_moves(state).len(), legal_moves(state).len(), "{state:?}");
    }
}

#[test]
fn rough_outcome_move_prefers_first_maximal() {
    let cases = [
        ("", 'A'),
        ("A", 'E'),
        ("AB", 'C'),
        ("D", 'A'),
        ("DA", 'G'),
        ("AD", 'B'),
    ];
    for (played, best) in cases {
        let state = state_after(2, Owner::P1, played);
        assert_eq!(letter(rough_outcome_move(&state)), Some(best), "after {played}");
    }
}

#[test]
fn rough_self_play_size_two() {
    let mut state = state_after(2, Owner::P1, "");
    let mut played = String::new();
    while let Some(mv) = choose_move(Strategy::RoughOutcome, &state) {
        played.push(mv.letter());
        state = apply_move(&state, mv).unwrap();
    }
    assert_eq!(played, "AECBD");
    assert_eq!(state.captured(Owner::P1), 5);
}

#[test]
fn minimax_self_play_is_deterministic() {
    for strategy in [
        Strategy::RecursiveMinimax,
        Strategy::IterativeMinimax,
        Strategy::ParallelMinimax,
    ] {
        let mut state = state_after(2, Owner::P2, "");
        let mut played = String::new();
        while let Some(mv) = choose_move(strategy, &state) {
            played.push(mv.letter());
            state = apply_move(&state, mv).unwrap();
        }
        assert_eq!(played, "ABCDE", "{strategy:?}");
        assert_eq!(stonehenge::winner(&state), Some(Owner::P2));
    }
}
