//! Whole-game tests for the rules engine
//!
//! - Long random playouts unwind exactly through undo
//! - Kings are never captured and never left in check
//! - Terminal positions are reported the same way the search scores them

use chess_core::{Color, GameState, Outcome, PieceKind, Square, parse_coordinates};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

fn count_kings(state: &GameState, color: Color) -> usize {
    state
        .board()
        .iter()
        .flatten()
        .filter(|pc| matches!(pc, Some(p) if p.color == color && p.kind == PieceKind::King))
        .count()
}

fn play_line(state: &mut GameState, line: &[&str]) {
    for text in line {
        let (from, to) = parse_coordinates(text).unwrap();
        state
            .request_move(from, to)
            .unwrap_or_else(|e| panic!("{text}: {e}"));
    }
}

#[test]
fn random_playouts_unwind_to_start() {
    for seed in 0..8u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = GameState::new();
        let start = state.to_fen();
        let mut fens = vec![start.clone()];

        for _ in 0..120 {
            let moves = state.legal_moves();
            let Some(&mv) = moves.choose(&mut rng) else {
                break;
            };
            let mover = state.side_to_move();
            state.apply_move(mv);

            assert_eq!(count_kings(&state, Color::White), 1);
            assert_eq!(count_kings(&state, Color::Black), 1);
            // The side that just moved is never left in check.
            let king = state.king_square(mover);
            assert_eq!(state.piece_at(king).map(|p| p.kind), Some(PieceKind::King));
            fens.push(state.to_fen());
        }

        while !state.move_log().is_empty() {
            fens.pop();
            state.undo_move();
            assert_eq!(&state.to_fen(), fens.last().unwrap(), "seed {seed}");
        }
        assert_eq!(state.to_fen(), start);
    }
}

#[test]
fn moves_never_leave_own_king_attacked() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut state = GameState::new();
    for _ in 0..80 {
        let moves = state.legal_moves();
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        let mover = state.side_to_move();
        state.apply_move(mv);
        let king = state.king_square(mover);
        // No opponent move may land on our king.
        let replies = state.pseudo_legal_moves();
        assert!(
            replies.iter().all(|r| r.to != king),
            "{} left the king en prise",
            mv.coordinates()
        );
    }
}

#[test]
fn scholars_mate_is_checkmate() {
    let mut state = GameState::new();
    play_line(
        &mut state,
        &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"],
    );
    assert!(state.legal_moves().is_empty());
    assert!(state.check_mate());
    assert_eq!(
        state.outcome(),
        Outcome::Checkmate {
            winner: Color::White
        }
    );
    let last = state.move_log().last().unwrap();
    assert_eq!(last.notation(), "Qxf7");
}

#[test]
fn stalemate_reached_through_play() {
    let mut state = GameState::from_fen("k7/8/1K6/8/8/8/8/2Q5 w - - 0 1").unwrap();
    play_line(&mut state, &["c1c7"]);
    assert!(state.legal_moves().is_empty());
    assert!(state.stale_mate());
    assert_eq!(state.outcome(), Outcome::Stalemate);
}

#[test]
fn move_log_keeps_play_order() {
    let mut state = GameState::new();
    play_line(&mut state, &["g1f3", "d7d5"]);
    let notation: Vec<String> = state.move_log().iter().map(|m| m.notation()).collect();
    assert_eq!(notation, vec!["Nf3", "d5"]);
    assert_eq!(state.side_to_move(), Color::White);
    let from: Square = "e1".parse().unwrap();
    assert!(state.request_move(from, from).is_err());
    assert_eq!(state.move_log().len(), 2);
}
