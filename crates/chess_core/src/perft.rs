use crate::board::GameState;

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`.
pub fn perft(state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = state.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        state.apply_move(mv);
        nodes += perft(state, depth - 1);
        state.undo_move();
    }
    nodes
}
