pub mod board;
pub mod castling;
pub mod error;
pub mod eval;
pub mod fen;
pub mod movegen;
pub mod moves;
pub mod perft;
pub mod search;
pub mod types;
pub mod worker;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use castling::*;
pub use error::ChessError;
pub use eval::{CHECKMATE, STALEMATE, evaluate};
pub use movegen::{Check, Pin, PinsAndChecks};
pub use moves::*;
pub use perft::perft;
pub use search::{DEFAULT_DEPTH, SearchContext, SearchOutcome, find_best_move};
pub use types::*;
pub use worker::{SearchHandle, spawn_search};

// =============================================================================
// Engine trait, implemented by all move pickers (minimax, random, etc.)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation score in centipawns, positive favors white
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
}

/// Trait that all chess engines must implement.
///
/// Lets the driver swap between the minimax engine and the random baseline.
pub trait Engine: Send {
    /// Choose a move for the side to move in `state`.
    ///
    /// # Arguments
    /// * `state` - The current game state (left untouched)
    /// * `depth` - Search depth in plies; 0 means the engine's configured
    ///   depth, and engines without a search ignore it
    ///
    /// # Returns
    /// SearchResult containing best move, score, and statistics
    fn search(&mut self, state: &GameState, depth: u8) -> SearchResult;

    /// Returns the engine's name for display
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "chess_core"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
