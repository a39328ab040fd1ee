//! Minimax Chess Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over the material and
//! piece-square evaluation in `chess_core`.

use chess_core::{Engine, GameState, Move, SearchContext, SearchResult, DEFAULT_DEPTH};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, SeedableRng};
use tracing::warn;


/// Chess engine wrapping the alpha-beta search.
///
/// A seeded engine is reproducible: the root shuffle and the random
/// fallback both draw from the seed.
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    depth: u8,
    seed: Option<u64>,
    /// Node counter for statistics
    nodes: u64,
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            seed: None,
            nodes: 0,
        }
    }

    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth.max(1);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Uniformly random pick from `moves`, reproducible when seeded.
    fn fallback_move(&self, moves: &[Move]) -> Option<Move> {
        match self.seed {
            Some(seed) => moves.choose(&mut StdRng::seed_from_u64(seed)).copied(),
            None => moves.choose(&mut thread_rng()).copied(),
        }
    }
}

impl Engine for MinimaxEngine {
    /// Searches to `depth` plies; a depth of 0 means the engine's own
    /// configured depth.
    fn search(&mut self, state: &GameState, depth: u8) -> SearchResult {
        let depth = if depth == 0 { self.depth } else { depth };
        let mut state = state.clone();
        let moves = state.legal_moves();
        if moves.is_empty() {
            self.nodes = 0;
            return SearchResult {
                best_move: None,
                score: 0,
                depth,
                nodes: 0,
            };
        }

        let mut ctx = SearchContext::new(depth);
        if let Some(seed) = self.seed {
            ctx = ctx.with_seed(seed);
        }
        let outcome = ctx.run(&mut state, &moves);
        self.nodes = outcome.nodes;

        // The root always improves on -INFINITY, so this only guards the
        // caller contract of never passing on a position that has moves.
        let best_move = outcome.best_move.or_else(|| {
            warn!(depth, "search produced no move, playing a random one");
            self.fallback_move(&moves)
        });

        SearchResult {
            best_move,
            score: outcome.score,
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn author(&self) -> &str {
        "ML-chess"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
