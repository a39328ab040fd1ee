use super::*;
use crate::config::SelfPlayConfig;
use chess_core::SearchResult;
use random_engine::RandomEngine;
use std::io::Cursor;
use std::time::Duration;

/// Random mover that takes its time.
struct SlowEngine(RandomEngine);

impl Engine for SlowEngine {
    fn search(&mut self, state: &GameState, depth: u8) -> SearchResult {
        std::thread::sleep(Duration::from_millis(600));
        self.0.search(state, depth)
    }

    fn name(&self) -> &str {
        "Slow"
    }
}

fn run_session(human: Color, input: &str) -> (GameState, String) {
    let engine = Box::new(RandomEngine::seeded(3));
    let mut output = Vec::new();
    let mut game = ConsoleGame::new(engine, human, 1, Cursor::new(input.to_string()), &mut output);
    game.run().unwrap();
    let state = game.state().clone();
    drop(game);
    (state, String::from_utf8(output).unwrap())
}

#[test]
fn test_render_start_position() {
    let text = render_board(&GameState::new());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "8 r n b q k b n r");
    assert_eq!(lines[4], "4 . . . . . . . .");
    assert_eq!(lines[7], "1 R N B Q K B N R");
    assert_eq!(lines[8], "  a b c d e f g h");
}

#[test]
fn test_human_move_then_engine_reply() {
    let (state, out) = run_session(Color::White, "e2e4\nquit\n");
    assert_eq!(state.move_log().len(), 2);
    assert_eq!(state.move_log()[0].coordinates(), "e2e4");
    assert!(out.contains("You play e4"));
    assert!(out.contains("Engine plays"));
}

#[test]
fn test_illegal_input_is_reported_and_ignored() {
    let (state, out) = run_session(Color::White, "e2e5\nhello\nquit\n");
    assert!(state.move_log().is_empty());
    assert!(out.contains("illegal move e2e5"));
    assert!(out.contains("hello"));
}

#[test]
fn test_undo_takes_back_full_turn() {
    let (state, _) = run_session(Color::White, "e2e4\nundo\nquit\n");
    assert!(state.move_log().is_empty());
}

#[test]
fn test_engine_opens_when_human_is_black() {
    let (state, out) = run_session(Color::Black, "");
    assert_eq!(state.move_log().len(), 1);
    assert_eq!(state.move_log()[0].piece_moved.color, Color::White);
    assert!(out.contains("black to move> "));
}

#[test]
fn test_progress_dots_while_engine_thinks() {
    let engine = Box::new(SlowEngine(RandomEngine::seeded(1)));
    let mut output = Vec::new();
    let mut game = ConsoleGame::new(engine, Color::Black, 1, Cursor::new(String::new()), &mut output);
    game.run().unwrap();
    assert_eq!(game.state().move_log().len(), 1);
    drop(game);
    let out = String::from_utf8(output).unwrap();
    assert!(out.contains("Slow is thinking."), "{out}");
}

#[test]
fn test_session_from_config_file_players() {
    let config = SelfPlayConfig::from_toml_str(
        "[white]\nkind = \"human\"\n\n[black]\nkind = \"random\"\nseed = 5\n",
    )
    .unwrap();
    let setup = config.console_setup().unwrap();
    let mut output = Vec::new();
    let mut game = ConsoleGame::new(
        setup.engine,
        setup.human,
        setup.depth,
        Cursor::new("d2d4\nquit\n".to_string()),
        &mut output,
    );
    game.run().unwrap();
    let log = game.state().move_log().to_vec();
    drop(game);
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].coordinates(), "d2d4");
    assert_eq!(log[1].piece_moved.color, Color::Black);
    assert!(String::from_utf8(output).unwrap().contains("Random v1.0 is thinking"));
}
