//! Static evaluation: material plus piece-square tables, from white's point of view.

use crate::types::*;

/// Score for a side that has been mated.
pub const CHECKMATE: i32 = 100_000;
pub const STALEMATE: i32 = 0;

/// Centipawns per piece-square table unit.
pub const POSITION_WEIGHT: i32 = 10;

/// Material values in centipawns.
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
const PIECE_VALUES: [i32; 6] = [100, 300, 300, 500, 1000, 0];

type Table = [[i32; 8]; 8];

// Tables are laid out from white's side: row 0 is the far (black) back rank.

const KNIGHT_TABLE: Table = [
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
];

const BISHOP_TABLE: Table = [
    [4, 3, 2, 1, 1, 2, 3, 4],
    [3, 4, 3, 2, 2, 3, 4, 3],
    [2, 3, 4, 3, 3, 4, 3, 2],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [2, 3, 4, 3, 3, 4, 3, 2],
    [3, 4, 3, 2, 2, 3, 4, 3],
    [4, 3, 2, 1, 1, 2, 3, 4],
];

const ROOK_TABLE: Table = [
    [4, 3, 4, 4, 4, 4, 3, 4],
    [4, 4, 4, 4, 4, 4, 4, 4],
    [1, 1, 2, 3, 3, 2, 1, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 1, 2, 2, 2, 2, 1, 1],
    [4, 4, 4, 4, 4, 4, 4, 4],
    [4, 3, 4, 4, 4, 4, 3, 4],
];

const QUEEN_TABLE: Table = [
    [1, 1, 1, 3, 1, 1, 1, 1],
    [1, 2, 3, 3, 3, 1, 1, 1],
    [1, 4, 3, 3, 3, 4, 2, 1],
    [1, 2, 3, 3, 3, 2, 2, 1],
    [1, 2, 3, 3, 3, 2, 2, 1],
    [1, 4, 3, 3, 3, 4, 2, 1],
    [1, 1, 2, 3, 3, 1, 1, 1],
    [1, 1, 1, 3, 1, 1, 1, 1],
];

const KING_TABLE: Table = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 0, 0, 0, 0, 1, 1],
    [2, 3, 2, 0, 0, 1, 3, 2],
];

const WHITE_PAWN_TABLE: Table = [
    [8, 8, 8, 8, 8, 8, 8, 8],
    [8, 8, 8, 8, 8, 8, 8, 8],
    [5, 6, 6, 7, 7, 6, 6, 5],
    [2, 3, 3, 5, 5, 3, 3, 2],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 1, 2, 3, 3, 2, 1, 1],
    [1, 1, 1, 0, 0, 1, 1, 1],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const BLACK_PAWN_TABLE: Table = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 1, 0, 0, 1, 1, 1],
    [1, 1, 2, 3, 3, 2, 1, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [2, 3, 3, 5, 5, 3, 3, 2],
    [5, 6, 6, 7, 7, 6, 6, 5],
    [8, 8, 8, 8, 8, 8, 8, 8],
    [8, 8, 8, 8, 8, 8, 8, 8],
];

pub fn piece_value(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind as usize]
}

/// Piece-square table entry for `pc` standing on `sq`, in table units.
pub fn square_bonus(pc: Piece, sq: Square) -> i32 {
    let col = sq.col as usize;
    // Shared tables are mirrored by row for black.
    let row = match pc.color {
        Color::White => sq.row as usize,
        Color::Black => 7 - sq.row as usize,
    };
    match pc.kind {
        PieceKind::Pawn => match pc.color {
            Color::White => WHITE_PAWN_TABLE[sq.row as usize][col],
            Color::Black => BLACK_PAWN_TABLE[sq.row as usize][col],
        },
        PieceKind::Knight => KNIGHT_TABLE[row][col],
        PieceKind::Bishop => BISHOP_TABLE[row][col],
        PieceKind::Rook => ROOK_TABLE[row][col],
        PieceKind::Queen => QUEEN_TABLE[row][col],
        PieceKind::King => KING_TABLE[row][col],
    }
}

/// Evaluates the board in centipawns.
///
/// - Positive = good for white
/// - Negative = good for black
///
/// Mate and stalemate are not detected here; the search scores those nodes.
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0i32;
    for (row, rank) in board.iter().enumerate() {
        for (col, square) in rank.iter().enumerate() {
            let Some(pc) = *square else {
                continue;
            };
            let sq = Square::new(row as u8, col as u8);
            let v = piece_value(pc.kind) + POSITION_WEIGHT * square_bonus(pc, sq);
            score += match pc.color {
                Color::White => v,
                Color::Black => -v,
            };
        }
    }
    score
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
