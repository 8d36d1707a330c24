//! Perft (performance test) for move generator validation.
//!
//! Perft counts the leaf nodes of the legal move tree to a given depth, which
//! can be compared against published values. Promotions always produce a
//! queen here, so only depths without promotions match those values.

use crate::GameState;

/// Counts the leaf nodes at the given depth.
pub fn perft(state: &GameState, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = state.all_legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|m| {
            let mut next = state.clone();
            next.execute_move(m);
            perft(&next, depth - 1)
        })
        .sum()
}

/// Perft split by root move, sorted by move text.
///
/// Useful to find which branch disagrees with a reference count.
pub fn perft_divide(state: &GameState, depth: u32) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = state
        .all_legal_moves()
        .into_iter()
        .map(|m| {
            let mut next = state.clone();
            next.execute_move(m);
            let nodes = if depth > 1 { perft(&next, depth - 1) } else { 1 };
            (m.to_string(), nodes)
        })
        .collect();

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
