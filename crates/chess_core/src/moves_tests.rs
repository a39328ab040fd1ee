use super::*;
use crate::board::GameState;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn test_equality_ignores_annotations() {
    let state = GameState::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1").unwrap();
    let annotated = Move::new(sq("e4"), sq("d5"), state.board());
    assert!(annotated.is_capture());

    let mut bare = annotated;
    bare.piece_captured = None;
    bare.is_en_passant = true;
    assert_eq!(annotated, bare);

    let other = Move::new(sq("e4"), sq("e5"), state.board());
    assert_ne!(annotated, other);
}

#[test]
fn test_notation() {
    let state = GameState::from_fen("r3k3/1P6/8/3p4/4P3/5N2/8/4K2R w K - 0 1").unwrap();
    let board = state.board();
    assert_eq!(Move::new(sq("e4"), sq("e5"), board).notation(), "e5");
    assert_eq!(Move::new(sq("e4"), sq("d5"), board).notation(), "exd5");
    assert_eq!(Move::new(sq("f3"), sq("d4"), board).notation(), "Nd4");
    assert_eq!(Move::new(sq("f3"), sq("d4"), board).to_string(), "Nd4");
    assert_eq!(Move::new(sq("b7"), sq("b8"), board).notation(), "b8=Q");
    assert_eq!(Move::new(sq("b7"), sq("a8"), board).notation(), "bxa8=Q");
    assert_eq!(Move::castle(sq("e1"), sq("g1"), board).notation(), "O-O");
}

#[test]
fn test_coordinates_round_trip() {
    let board = *GameState::new().board();
    let mv = Move::new(sq("g1"), sq("f3"), &board);
    assert_eq!(mv.coordinates(), "g1f3");
    assert_eq!(parse_coordinates("g1f3").unwrap(), (sq("g1"), sq("f3")));
    assert_eq!(parse_coordinates(" e7e8q ").unwrap(), (sq("e7"), sq("e8")));
}

#[test]
fn test_parse_coordinates_rejects_garbage() {
    assert!(parse_coordinates("e2").is_err());
    assert!(parse_coordinates("e2e9").is_err());
    assert!(parse_coordinates("z2e4").is_err());
    assert!(parse_coordinates("e2e4e6").is_err());
}

#[test]
fn test_parse_coordinates_only_queen_suffix() {
    assert_eq!(parse_coordinates("e7e8Q").unwrap(), (sq("e7"), sq("e8")));
    assert_eq!(
        parse_coordinates("e2e4z"),
        Err(ChessError::InvalidMoveText("e2e4z".to_string()))
    );
    assert!(parse_coordinates("e7e8n").is_err());
}

#[test]
fn test_en_passant_constructor_records_victim() {
    let state = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
    let mv = Move::en_passant(sq("e5"), sq("d6"), state.board());
    assert!(mv.is_en_passant);
    assert_eq!(mv.en_passant_victim(), sq("d5"));
    assert_eq!(mv.piece_captured, Some(Piece::new(Color::Black, PieceKind::Pawn)));
    assert_eq!(mv.notation(), "exd6");
}
