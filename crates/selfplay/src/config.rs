//! Driver configuration loaded from TOML

use std::path::{Path, PathBuf};

use chess_core::{Color, Engine, DEFAULT_DEPTH};
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("max_plies must be at least 1")]
    ZeroPlies,
    #[error("{side} minimax player needs a depth of at least 1")]
    ZeroDepth { side: &'static str },
    #[error("{side} is a human player; use the play command")]
    HumanPlayer { side: &'static str },
    #[error("console play needs exactly one human player, found {0}")]
    HumanCount(usize),
}

/// Who picks the moves for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    #[default]
    Minimax,
    Random,
    Human,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub kind: PlayerKind,
    /// Search depth in plies (minimax only)
    pub depth: u8,
    /// Fixed seed for reproducible games
    pub seed: Option<u64>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            kind: PlayerKind::Minimax,
            depth: DEFAULT_DEPTH,
            seed: None,
        }
    }
}

impl PlayerConfig {
    pub fn minimax(depth: u8) -> Self {
        Self {
            kind: PlayerKind::Minimax,
            depth,
            seed: None,
        }
    }

    pub fn random() -> Self {
        Self {
            kind: PlayerKind::Random,
            ..Self::default()
        }
    }

    pub fn human() -> Self {
        Self {
            kind: PlayerKind::Human,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the engine for this player. Human players have none.
    pub fn build_engine(&self, side: Color) -> Result<Box<dyn Engine>, ConfigError> {
        match self.kind {
            PlayerKind::Minimax => {
                let mut engine = MinimaxEngine::new().with_depth(self.depth);
                if let Some(seed) = self.seed {
                    engine = engine.with_seed(seed);
                }
                Ok(Box::new(engine))
            }
            PlayerKind::Random => Ok(Box::new(match self.seed {
                Some(seed) => RandomEngine::seeded(seed),
                None => RandomEngine::new(),
            })),
            PlayerKind::Human => Err(ConfigError::HumanPlayer {
                side: side_name(side),
            }),
        }
    }
}

/// Top-level config file.
///
/// ```toml
/// max_plies = 200
///
/// [white]
/// kind = "minimax"
/// depth = 3
///
/// [black]
/// kind = "random"
/// seed = 7
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlayConfig {
    /// Game is abandoned after this many plies
    pub max_plies: u32,
    pub white: PlayerConfig,
    pub black: PlayerConfig,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            white: PlayerConfig::default(),
            black: PlayerConfig::random(),
        }
    }
}

impl SelfPlayConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_plies == 0 {
            return Err(ConfigError::ZeroPlies);
        }
        for side in [Color::White, Color::Black] {
            let player = self.player(side);
            if player.kind == PlayerKind::Minimax && player.depth == 0 {
                return Err(ConfigError::ZeroDepth {
                    side: side_name(side),
                });
            }
        }
        Ok(())
    }

    pub fn player(&self, side: Color) -> &PlayerConfig {
        match side {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    /// Console game with a human on `human` and a minimax engine opposite.
    pub fn console(human: Color, depth: u8) -> Self {
        let mut config = Self {
            white: PlayerConfig::human(),
            black: PlayerConfig::human(),
            ..Self::default()
        };
        match human {
            Color::White => config.black = PlayerConfig::minimax(depth),
            Color::Black => config.white = PlayerConfig::minimax(depth),
        }
        config
    }

    /// Split a console config into the human's side and the opposing engine.
    pub fn console_setup(&self) -> Result<ConsoleSetup, ConfigError> {
        let human = self.human_side()?;
        let opponent = self.player(human.other());
        Ok(ConsoleSetup {
            human,
            engine: opponent.build_engine(human.other())?,
            depth: opponent.depth,
        })
    }

    /// The side a human plays in console mode, which needs exactly one.
    pub fn human_side(&self) -> Result<Color, ConfigError> {
        let humans: Vec<Color> = [Color::White, Color::Black]
            .into_iter()
            .filter(|&side| self.player(side).kind == PlayerKind::Human)
            .collect();
        match humans.as_slice() {
            [side] => Ok(*side),
            _ => Err(ConfigError::HumanCount(humans.len())),
        }
    }
}

/// Players for a console session.
pub struct ConsoleSetup {
    pub human: Color,
    pub engine: Box<dyn Engine>,
    /// Search depth handed to the engine each turn
    pub depth: u8,
}

pub fn side_name(side: Color) -> &'static str {
    match side {
        Color::White => "white",
        Color::Black => "black",
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
