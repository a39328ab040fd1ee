//! Self-play CLI
//!
//! Run engine-vs-engine games or play against the engine on the console.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chess_core::{Color, DEFAULT_DEPTH};
use clap::{Parser, Subcommand};
use selfplay::{ConsoleGame, GameRunner, SelfPlayConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "selfplay", version, about = "Minimax chess engine driver")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play one engine-vs-engine game
    Run {
        /// TOML config; built-in defaults when omitted
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print the game record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Play against the engine on the console
    Play {
        /// TOML config with exactly one `kind = "human"` player; replaces --depth and --black
        #[arg(long, conflicts_with_all = ["depth", "black"])]
        config: Option<PathBuf>,
        /// Engine search depth in plies
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: u8,
        /// Take the black pieces
        #[arg(long)]
        black: bool,
    },
}

fn run(config: Option<PathBuf>, json: bool) -> Result<()> {
    let config = match config {
        Some(path) => SelfPlayConfig::load(&path)?,
        None => SelfPlayConfig::default(),
    };
    let mut white = config.white.build_engine(Color::White)?;
    let mut black = config.black.build_engine(Color::Black)?;

    let record = GameRunner::from_config(&config).play(white.as_mut(), black.as_mut());

    if json {
        let text = serde_json::to_string_pretty(&record).context("serializing game record")?;
        println!("{text}");
    } else {
        println!("=== {} vs {} ===", record.white, record.black);
        for (i, pair) in record.moves.chunks(2).enumerate() {
            println!("{:>3}. {}", i + 1, pair.join(" "));
        }
        println!("Result: {} ({:?})", record.result, record.termination);
        println!("Final: {}", record.final_fen);
    }
    Ok(())
}

fn play(config: Option<PathBuf>, depth: u8, black: bool) -> Result<()> {
    let config = match config {
        Some(path) => SelfPlayConfig::load(&path)?,
        None => {
            let human = if black { Color::Black } else { Color::White };
            SelfPlayConfig::console(human, depth.max(1))
        }
    };
    let setup = config.console_setup()?;

    let stdin = io::stdin();
    let mut game = ConsoleGame::new(setup.engine, setup.human, setup.depth, stdin.lock(), io::stdout());
    game.run().context("console session failed")?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Run { config, json } => run(config, json),
        Command::Play {
            config,
            depth,
            black,
        } => play(config, depth, black),
    }
}
