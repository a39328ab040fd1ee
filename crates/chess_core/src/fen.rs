//! Forsyth-Edwards Notation, used for test fixtures and diagnostics.

use crate::board::{GameState, Setup};
use crate::castling::CastlingRights;
use crate::error::ChessError;
use crate::types::*;

impl Setup {
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let invalid = |why: &str| ChessError::InvalidFen(format!("{why} in {fen:?}"));

        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(invalid("expected at least 4 fields"));
        }

        let mut board = [None; 64];
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(invalid("expected 8 ranks"));
        }
        // FEN lists rank 8 first, which is row 0.
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as usize;
                } else {
                    let pc = Piece::from_char(ch).ok_or_else(|| invalid("bad piece letter"))?;
                    if col >= 8 {
                        return Err(invalid("too many files"));
                    }
                    board[row * 8 + col] = Some(pc);
                    col += 1;
                }
                if col > 8 {
                    return Err(invalid("too many files"));
                }
            }
            if col != 8 {
                return Err(invalid("not enough files"));
            }
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(invalid("bad side to move")),
        };

        let castling =
            CastlingRights::from_fen(parts[2]).ok_or_else(|| invalid("bad castling field"))?;

        let en_passant = match parts[3] {
            "-" => None,
            s => Some(s.parse().map_err(|_| invalid("bad en-passant square"))?),
        };

        Ok(Setup {
            board,
            side_to_move,
            castling,
            en_passant,
        })
    }
}

impl GameState {
    /// Parse a FEN string. Halfmove and fullmove counters are accepted and ignored.
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        GameState::from_setup(Setup::from_fen(fen)?)
    }

    pub fn to_fen(&self) -> String {
        let mut s = String::new();
        for row in 0..8 {
            let mut empty = 0;
            for col in 0..8 {
                match self.board[row][col] {
                    Some(pc) => {
                        if empty > 0 {
                            s.push_str(&empty.to_string());
                            empty = 0;
                        }
                        s.push(pc.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                s.push_str(&empty.to_string());
            }
            if row < 7 {
                s.push('/');
            }
        }

        let side = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .en_passant_target()
            .map(|sq| sq.to_string())
            .unwrap_or_else(|| "-".to_string());
        let fullmove = 1 + self.move_log().len() / 2;

        format!(
            "{s} {side} {} {ep} 0 {fullmove}",
            self.castling_rights().to_fen()
        )
    }
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
