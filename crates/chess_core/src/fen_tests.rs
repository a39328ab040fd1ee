use super::*;

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[test]
fn test_startpos_matches_fen() {
    let pos = GameState::from_fen(START_FEN).unwrap();
    assert_eq!(pos.board(), GameState::new().board());
    assert_eq!(GameState::new().to_fen(), START_FEN);
}

#[test]
fn test_fen_fields_parsed() {
    let pos = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
    assert_eq!(pos.side_to_move(), Color::White);
    assert_eq!(pos.castling_rights(), CastlingRights::none());
    assert_eq!(pos.en_passant_target(), Some("d6".parse().unwrap()));
    assert_eq!(pos.king_square(Color::White), "e1".parse().unwrap());
    assert_eq!(pos.king_square(Color::Black), "e8".parse().unwrap());
}

#[test]
fn test_fen_round_trip_after_moves() {
    let mut pos = GameState::new();
    pos.request_move("e2".parse().unwrap(), "e4".parse().unwrap())
        .unwrap();
    assert_eq!(
        pos.to_fen(),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    );
}

#[test]
fn test_fen_rejects_missing_king() {
    let err = GameState::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1").unwrap_err();
    assert_eq!(
        err,
        ChessError::KingCount {
            color: Color::Black,
            found: 0
        }
    );
}

#[test]
fn test_fen_rejects_two_kings() {
    let err = GameState::from_fen("4k3/8/8/8/8/8/8/3KK3 w - - 0 1").unwrap_err();
    assert!(matches!(
        err,
        ChessError::KingCount {
            color: Color::White,
            found: 2
        }
    ));
}

#[test]
fn test_fen_rejects_garbage() {
    assert!(GameState::from_fen("").is_err());
    assert!(GameState::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq -").is_err());
    assert!(GameState::from_fen("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -").is_err());
    assert!(GameState::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq -").is_err());
    assert!(GameState::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KX -").is_err());
}
