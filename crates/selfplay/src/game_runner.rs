//! Game runner for engine-vs-engine play

use chess_core::{Color, Engine, GameState, Outcome};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::{side_name, SelfPlayConfig};

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    Checkmate,
    Stalemate,
    /// Ply cap reached with the game still going
    PlyLimit,
    /// An engine returned no move or an illegal one
    Forfeit,
}

/// Summary of one finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    /// Moves in display notation, in play order
    pub moves: Vec<String>,
    /// `1-0`, `0-1`, `1/2-1/2`, or `*` for an unfinished game
    pub result: String,
    pub termination: Termination,
    pub final_fen: String,
}

impl GameRecord {
    pub fn plies(&self) -> usize {
        self.moves.len()
    }
}

fn result_text(winner: Option<Color>) -> &'static str {
    match winner {
        Some(Color::White) => "1-0",
        Some(Color::Black) => "0-1",
        None => "1/2-1/2",
    }
}

/// Plays engines against each other from a starting position.
#[derive(Debug, Clone)]
pub struct GameRunner {
    max_plies: u32,
}

impl GameRunner {
    pub fn new(max_plies: u32) -> Self {
        Self { max_plies }
    }

    pub fn from_config(config: &SelfPlayConfig) -> Self {
        Self::new(config.max_plies)
    }

    /// Play a game from the standard starting position.
    pub fn play(&self, white: &mut dyn Engine, black: &mut dyn Engine) -> GameRecord {
        self.play_from(GameState::new(), white, black)
    }

    /// Play a game from `state` until mate, stalemate or the ply cap.
    pub fn play_from(
        &self,
        mut state: GameState,
        white: &mut dyn Engine,
        black: &mut dyn Engine,
    ) -> GameRecord {
        white.new_game();
        black.new_game();

        let mut moves = Vec::new();
        let mut ended = None;

        for _ply in 0..self.max_plies {
            let legal = state.legal_moves();
            if legal.is_empty() {
                break;
            }

            let mover = state.side_to_move();
            let engine: &mut dyn Engine = match mover {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };
            let result = engine.search(&state, 0);

            let Some(mv) = result.best_move.and_then(|mv| legal.iter().find(|m| **m == mv)) else {
                warn!(
                    engine = engine.name(),
                    side = side_name(mover),
                    "engine returned no legal move, forfeiting"
                );
                ended = Some((Termination::Forfeit, Some(mover.other())));
                break;
            };
            moves.push(mv.notation());
            state.apply_move(*mv);
        }

        let (termination, winner) = match ended {
            Some(ended) => ended,
            None => {
                state.legal_moves();
                match state.outcome() {
                    Outcome::Checkmate { winner } => (Termination::Checkmate, Some(winner)),
                    Outcome::Stalemate => (Termination::Stalemate, None),
                    Outcome::Ongoing => (Termination::PlyLimit, None),
                }
            }
        };
        let result = if termination == Termination::PlyLimit {
            "*"
        } else {
            result_text(winner)
        };

        let record = GameRecord {
            white: white.name().to_string(),
            black: black.name().to_string(),
            moves,
            result: result.to_string(),
            termination,
            final_fen: state.to_fen(),
        };
        info!(
            white = %record.white,
            black = %record.black,
            result = %record.result,
            termination = ?record.termination,
            plies = record.plies(),
            "game finished"
        );
        record
    }
}

#[cfg(test)]
#[path = "game_runner_tests.rs"]
mod game_runner_tests;
