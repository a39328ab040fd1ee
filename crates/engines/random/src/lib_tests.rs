use super::*;

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::new();
    let state = GameState::new();

    let result = engine.search(&state, 1);

    let best = result.best_move.expect("startpos has moves");
    let mut probe = state.clone();
    assert!(probe.legal_moves().contains(&best));
}

#[test]
fn random_engine_seed_is_reproducible() {
    let state = GameState::new();
    let a: Vec<_> = (0..5)
        .scan(RandomEngine::seeded(9), |e, _| e.search(&state, 1).best_move)
        .collect();
    let b: Vec<_> = (0..5)
        .scan(RandomEngine::seeded(9), |e, _| e.search(&state, 1).best_move)
        .collect();
    assert_eq!(a.len(), 5);
    assert_eq!(a, b);
}

#[test]
fn random_engine_handles_checkmate() {
    let mut engine = RandomEngine::new();
    let state =
        GameState::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1")
            .unwrap();

    let result = engine.search(&state, 1);

    assert!(result.best_move.is_none());
}

#[test]
fn random_engine_handles_stalemate() {
    let mut engine = RandomEngine::new();
    let state = GameState::from_fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1").unwrap();

    let result = engine.search(&state, 1);

    assert!(result.best_move.is_none());
}
