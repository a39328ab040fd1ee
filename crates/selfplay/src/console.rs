//! Console play: a human against one engine on a text board

use std::io::{self, BufRead, Write};
use std::time::Duration;

use chess_core::{parse_coordinates, spawn_search, Color, Engine, GameState, Outcome};
use tracing::{debug, trace};

use crate::config::side_name;

/// How often a progress dot is printed while the engine searches.
const PROGRESS_INTERVAL: Duration = Duration::from_millis(250);

/// Render the board with rank 8 at the top, `.` for empty squares.
pub fn render_board(state: &GameState) -> String {
    let mut out = String::new();
    for (row, rank) in state.board().iter().enumerate() {
        out.push(char::from(b'8' - row as u8));
        out.push(' ');
        for (col, square) in rank.iter().enumerate() {
            if col > 0 {
                out.push(' ');
            }
            out.push(square.map_or('.', |pc| pc.to_char()));
        }
        out.push('\n');
    }
    out.push_str("  a b c d e f g h\n");
    out
}

/// Interactive game loop over any reader/writer pair.
///
/// Input is one command per line: a coordinate move such as `e2e4`,
/// `undo` to take back the last full turn, or `quit`.
pub struct ConsoleGame<R, W> {
    state: GameState,
    human: Color,
    engine: Option<Box<dyn Engine>>,
    depth: u8,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleGame<R, W> {
    pub fn new(engine: Box<dyn Engine>, human: Color, depth: u8, input: R, output: W) -> Self {
        Self {
            state: GameState::new(),
            human,
            engine: Some(engine),
            depth,
            input,
            output,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run until the game ends, the human quits, or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "\n{}", render_board(&self.state))?;

            if self.state.legal_moves().is_empty() {
                let text = match self.state.outcome() {
                    Outcome::Checkmate { winner } => format!("Checkmate, {} wins", side_name(winner)),
                    _ => "Stalemate".to_string(),
                };
                writeln!(self.output, "{text}")?;
                return Ok(());
            }

            if self.state.side_to_move() == self.human {
                if !self.human_turn()? {
                    return Ok(());
                }
            } else if !self.engine_turn()? {
                return Ok(());
            }
        }
    }

    /// Returns false when the session should end.
    fn human_turn(&mut self) -> io::Result<bool> {
        loop {
            write!(self.output, "{} to move> ", side_name(self.human))?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(false);
            }
            match line.trim() {
                "" => continue,
                "quit" | "exit" => return Ok(false),
                "undo" => {
                    self.undo_turn();
                    return Ok(true);
                }
                text => match parse_coordinates(text)
                    .and_then(|(from, to)| self.state.request_move(from, to))
                {
                    Ok(mv) => {
                        writeln!(self.output, "You play {mv}")?;
                        return Ok(true);
                    }
                    Err(e) => {
                        trace!(input = text, "rejected console input");
                        writeln!(self.output, "{e}")?;
                    }
                },
            }
        }
    }

    /// Take back moves until it is the human's turn again, undoing at
    /// least one of the human's moves when there is one.
    fn undo_turn(&mut self) {
        if self.state.move_log().is_empty() {
            return;
        }
        self.state.undo_move();
        if self.state.side_to_move() != self.human && !self.state.move_log().is_empty() {
            self.state.undo_move();
        }
    }

    fn engine_turn(&mut self) -> io::Result<bool> {
        let Some(engine) = self.engine.take() else {
            return Ok(false);
        };
        write!(self.output, "{} is thinking", engine.name())?;
        self.output.flush()?;

        let mut handle = spawn_search(engine, self.state.clone(), self.depth)?;
        while handle.poll(PROGRESS_INTERVAL).is_none() && handle.is_running() {
            write!(self.output, ".")?;
            self.output.flush()?;
        }
        writeln!(self.output)?;
        let (result, engine) = handle.wait();
        self.engine = Some(engine);
        debug!(nodes = result.nodes, score = result.score, "engine reply");

        let played = result
            .best_move
            .and_then(|mv| self.state.request_move(mv.from, mv.to).ok());
        match played {
            Some(mv) => {
                writeln!(self.output, "Engine plays {mv}")?;
                Ok(true)
            }
            None => {
                writeln!(self.output, "Engine has no move, you win")?;
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod console_tests;
