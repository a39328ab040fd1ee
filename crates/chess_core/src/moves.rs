//! The single-ply move record.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::ChessError;
use crate::types::*;

/// One ply, fully annotated by the generator.
///
/// Identity is the (origin, destination) pair only: a move typed in as two
/// squares compares equal to the annotated entry in the legal move list.
#[derive(Clone, Copy, Debug)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece_moved: Piece,
    pub piece_captured: Option<Piece>,
    pub is_en_passant: bool,
    pub is_castle: bool,
    pub is_pawn_promotion: bool,
}

impl Move {
    /// Ordinary move or capture; captured piece and promotion are read off the board.
    ///
    /// Panics if `from` is empty.
    pub fn new(from: Square, to: Square, board: &Board) -> Self {
        let piece_moved = board[from.row as usize][from.col as usize]
            .expect("move origin must hold a piece");
        let is_pawn_promotion =
            piece_moved.kind == PieceKind::Pawn && to.row == piece_moved.color.promotion_row();
        Self {
            from,
            to,
            piece_moved,
            piece_captured: board[to.row as usize][to.col as usize],
            is_en_passant: false,
            is_castle: false,
            is_pawn_promotion,
        }
    }

    /// En-passant capture. The captured pawn sits beside the destination,
    /// on the origin's row.
    pub fn en_passant(from: Square, to: Square, board: &Board) -> Self {
        let mut mv = Move::new(from, to, board);
        mv.piece_captured = board[from.row as usize][to.col as usize];
        mv.is_en_passant = true;
        mv
    }

    pub fn castle(from: Square, to: Square, board: &Board) -> Self {
        let mut mv = Move::new(from, to, board);
        mv.is_castle = true;
        mv
    }

    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// Square of the pawn removed by an en-passant capture.
    pub fn en_passant_victim(&self) -> Square {
        Square::new(self.from.row, self.to.col)
    }

    pub fn is_king_side_castle(&self) -> bool {
        self.is_castle && self.to.col > self.from.col
    }

    /// Origin and destination as text, e.g. `e2e4`.
    pub fn coordinates(&self) -> String {
        format!("{}{}", self.from, self.to)
    }

    /// Human-readable notation: `Nf3`, `exd5`, `e8=Q`, `O-O`.
    pub fn notation(&self) -> String {
        if self.is_castle {
            return if self.is_king_side_castle() {
                "O-O".to_string()
            } else {
                "O-O-O".to_string()
            };
        }

        let mut s = String::new();
        if self.piece_moved.kind == PieceKind::Pawn {
            if self.is_capture() {
                s.push(self.from.file_char());
            }
        } else {
            s.push(self.piece_moved.kind.letter());
        }
        if self.is_capture() {
            s.push('x');
        }
        s.push_str(&self.to.to_string());
        if self.is_pawn_promotion {
            s.push_str("=Q");
        }
        s
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}

/// Parse `e2e4`-style input into an (origin, destination) pair.
/// A trailing `q`/`Q` is tolerated, since promotion is always to a queen.
pub fn parse_coordinates(text: &str) -> Result<(Square, Square), ChessError> {
    let text = text.trim();
    let valid_len = match text.len() {
        4 => true,
        5 => matches!(text.as_bytes()[4], b'q' | b'Q'),
        _ => false,
    };
    if !valid_len || !text.is_ascii() {
        return Err(ChessError::InvalidMoveText(text.to_string()));
    }
    let from = text[0..2]
        .parse()
        .map_err(|_| ChessError::InvalidMoveText(text.to_string()))?;
    let to = text[2..4]
        .parse()
        .map_err(|_| ChessError::InvalidMoveText(text.to_string()))?;
    Ok((from, to))
}

#[cfg(test)]
#[path = "moves_tests.rs"]
mod moves_tests;
