//! Fixed-depth minimax with alpha-beta pruning.
//!
//! White maximizes and black minimizes. The state is mutated in place with
//! `apply_move`/`undo_move` on the way down and back up, so the recursion
//! depth equals the search depth.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::board::GameState;
use crate::eval::{CHECKMATE, STALEMATE, evaluate};
use crate::moves::Move;
use crate::types::Color;

pub const DEFAULT_DEPTH: u8 = 4;

/// Larger than any reachable score, including mate scores.
const INFINITY: i32 = CHECKMATE * 2;

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Best root move (None only if the root move list was empty)
    pub best_move: Option<Move>,
    /// Minimax score from white's perspective
    pub score: i32,
    /// Number of nodes visited
    pub nodes: u64,
}

/// Per-search state. The root best move lives here rather than in any
/// shared slot, so separate searches never interfere.
#[derive(Debug, Clone)]
pub struct SearchContext {
    max_depth: u8,
    pruning: bool,
    rng: Option<StdRng>,
    nodes: u64,
    best_move: Option<Move>,
}

impl SearchContext {
    /// Alpha-beta search with an entropy-seeded shuffle of every move list.
    pub fn new(depth: u8) -> Self {
        Self {
            max_depth: depth.max(1),
            pruning: true,
            rng: Some(StdRng::from_entropy()),
            nodes: 0,
            best_move: None,
        }
    }

    /// Reproducible shuffle order.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Some(StdRng::seed_from_u64(seed));
        self
    }

    /// Keep move lists in generation order.
    pub fn without_shuffle(mut self) -> Self {
        self.rng = None;
        self
    }

    /// Plain minimax: alpha and beta stay at their initial bounds.
    pub fn without_pruning(mut self) -> Self {
        self.pruning = false;
        self
    }

    pub fn depth(&self) -> u8 {
        self.max_depth
    }

    /// Search from `state`, whose legal moves must be `legal_moves`.
    ///
    /// The state is restored on return, but its cached check/mate flags are
    /// cleared; regenerate legal moves before reading them.
    pub fn run(&mut self, state: &mut GameState, legal_moves: &[Move]) -> SearchOutcome {
        debug_assert!(
            !legal_moves.is_empty(),
            "search called without legal moves; check for mate or stalemate first"
        );
        self.nodes = 0;
        self.best_move = None;
        if legal_moves.is_empty() {
            return SearchOutcome {
                best_move: None,
                score: 0,
                nodes: 0,
            };
        }

        let maximizing = state.side_to_move() == Color::White;
        let score = self.minimax(
            state,
            legal_moves.to_vec(),
            self.max_depth,
            -INFINITY,
            INFINITY,
            maximizing,
        );

        debug!(
            depth = self.max_depth,
            nodes = self.nodes,
            score,
            best = ?self.best_move.map(|mv| mv.notation()),
            "search finished"
        );

        SearchOutcome {
            best_move: self.best_move,
            score,
            nodes: self.nodes,
        }
    }

    fn minimax(
        &mut self,
        state: &mut GameState,
        mut moves: Vec<Move>,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return evaluate(state.board());
        }
        if moves.is_empty() {
            // Flags were refreshed when the parent generated `moves`.
            // Sooner mates score further from zero.
            return if state.check_mate() {
                let mate = CHECKMATE + depth as i32;
                if maximizing { -mate } else { mate }
            } else {
                STALEMATE
            };
        }

        if let Some(rng) = self.rng.as_mut() {
            moves.shuffle(rng);
        }

        let mut best = if maximizing { -INFINITY } else { INFINITY };
        for mv in moves {
            state.apply_move(mv);
            let replies = if depth > 1 {
                state.legal_moves()
            } else {
                Vec::new()
            };
            let score = self.minimax(state, replies, depth - 1, alpha, beta, !maximizing);
            state.undo_move();

            let improved = if maximizing { score > best } else { score < best };
            if improved {
                best = score;
                if depth == self.max_depth {
                    self.best_move = Some(mv);
                }
            }

            if self.pruning {
                if maximizing {
                    alpha = alpha.max(score);
                } else {
                    beta = beta.min(score);
                }
                if beta <= alpha {
                    break;
                }
            }
        }
        best
    }
}

/// Pick a move for the side to move. `legal_moves` must be the current,
/// non-empty legal move list of `state`.
pub fn find_best_move(state: &mut GameState, legal_moves: &[Move], depth: u8) -> Option<Move> {
    SearchContext::new(depth).run(state, legal_moves).best_move
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
