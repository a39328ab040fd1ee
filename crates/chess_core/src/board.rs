use tracing::trace;

use crate::castling::{CastleSide, CastlingRights};
use crate::error::ChessError;
use crate::movegen::{Check, Pin};
use crate::moves::Move;
use crate::types::*;

/// Position description used to build a [`GameState`] from a fixture.
#[derive(Clone, Debug)]
pub struct Setup {
    /// Reading order: index 0 is a8, index 63 is h1.
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

/// Authoritative game state plus reversible history.
///
/// `in_check`, `check_mate`, `stale_mate`, `pins` and `checks` are caches
/// filled by [`GameState::legal_moves`]; applying or undoing a move clears
/// them until legal moves are generated again.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) white_king: Square,
    pub(crate) black_king: Square,
    move_log: Vec<Move>,
    castling_log: Vec<CastlingRights>,
    en_passant_log: Vec<Option<Square>>,
    pub(crate) in_check: bool,
    pub(crate) check_mate: bool,
    pub(crate) stale_mate: bool,
    pub(crate) pins: Vec<Pin>,
    pub(crate) checks: Vec<Check>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard initial position, white to move.
    pub fn new() -> Self {
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        let mut board: [Option<Piece>; 64] = [None; 64];
        for (col, &kind) in back.iter().enumerate() {
            board[col] = Some(Piece::new(Color::Black, kind));
            board[8 + col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            board[48 + col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            board[56 + col] = Some(Piece::new(Color::White, kind));
        }
        let setup = Setup {
            board,
            side_to_move: Color::White,
            castling: CastlingRights::all(),
            en_passant: None,
        };
        Self::from_setup(setup).expect("initial position has both kings")
    }

    /// Build a state from a fixture, checking there is exactly one king per color.
    pub fn from_setup(setup: Setup) -> Result<Self, ChessError> {
        let mut board: Board = [[None; 8]; 8];
        let mut kings: [Vec<Square>; 2] = [Vec::new(), Vec::new()];
        for (idx, pc) in setup.board.iter().enumerate() {
            let sq = Square::from_index(idx);
            board[sq.row as usize][sq.col as usize] = *pc;
            if let Some(pc) = pc {
                if pc.kind == PieceKind::King {
                    let slot = match pc.color {
                        Color::White => 0,
                        Color::Black => 1,
                    };
                    kings[slot].push(sq);
                }
            }
        }
        for (slot, color) in [(0, Color::White), (1, Color::Black)] {
            if kings[slot].len() != 1 {
                return Err(ChessError::KingCount {
                    color,
                    found: kings[slot].len(),
                });
            }
        }

        Ok(Self {
            board,
            side_to_move: setup.side_to_move,
            white_king: kings[0][0],
            black_king: kings[1][0],
            move_log: Vec::new(),
            castling_log: vec![setup.castling],
            en_passant_log: vec![setup.en_passant],
            in_check: false,
            check_mate: false,
            stale_mate: false,
            pins: Vec::new(),
            checks: Vec::new(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq.row as usize][sq.col as usize]
    }

    fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.board[sq.row as usize][sq.col as usize] = pc;
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn king_square(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    pub(crate) fn set_king_square(&mut self, color: Color, sq: Square) {
        match color {
            Color::White => self.white_king = sq,
            Color::Black => self.black_king = sq,
        }
    }

    pub fn castling_rights(&self) -> CastlingRights {
        *self
            .castling_log
            .last()
            .expect("castling history keeps its initial snapshot")
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        *self
            .en_passant_log
            .last()
            .expect("en-passant history keeps its initial snapshot")
    }

    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    /// Valid only after [`GameState::legal_moves`] for the current position.
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    /// Valid only after [`GameState::legal_moves`] for the current position.
    pub fn check_mate(&self) -> bool {
        self.check_mate
    }

    /// Valid only after [`GameState::legal_moves`] for the current position.
    pub fn stale_mate(&self) -> bool {
        self.stale_mate
    }

    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Game result as of the last legal move generation.
    pub fn outcome(&self) -> Outcome {
        if self.check_mate {
            Outcome::Checkmate {
                winner: self.side_to_move.other(),
            }
        } else if self.stale_mate {
            Outcome::Stalemate
        } else {
            Outcome::Ongoing
        }
    }

    fn clear_derived(&mut self) {
        self.in_check = false;
        self.check_mate = false;
        self.stale_mate = false;
        self.pins.clear();
        self.checks.clear();
    }

    /// Play `mv` forward. The move must come from the current legal move list.
    pub fn apply_move(&mut self, mv: Move) {
        debug_assert_eq!(
            self.piece_at(mv.from),
            Some(mv.piece_moved),
            "move {} does not match the board",
            mv.coordinates()
        );
        let mover = mv.piece_moved.color;

        self.set_piece(mv.from, None);
        self.set_piece(mv.to, Some(mv.piece_moved));

        if mv.piece_moved.kind == PieceKind::King {
            self.set_king_square(mover, mv.to);
        }

        if mv.is_pawn_promotion {
            self.set_piece(mv.to, Some(Piece::new(mover, PieceKind::Queen)));
        }

        if mv.is_en_passant {
            self.set_piece(mv.en_passant_victim(), None);
        }

        let en_passant = if mv.piece_moved.kind == PieceKind::Pawn
            && mv.from.row.abs_diff(mv.to.row) == 2
        {
            Some(Square::new((mv.from.row + mv.to.row) / 2, mv.from.col))
        } else {
            None
        };

        if mv.is_castle {
            let (rook_from, rook_to) = castle_rook_columns(mv.is_king_side_castle());
            let row = mv.to.row;
            let rook = self.piece_at(Square::new(row, rook_from));
            self.set_piece(Square::new(row, rook_from), None);
            self.set_piece(Square::new(row, rook_to), rook);
        }

        let mut rights = self.castling_rights();
        match mv.piece_moved.kind {
            PieceKind::King => rights.revoke_all(mover),
            PieceKind::Rook if mv.from.row == mover.back_row() => {
                if let Some(side) = rook_home_side(mv.from.col) {
                    rights.revoke(mover, side);
                }
            }
            _ => {}
        }
        if let Some(captured) = mv.piece_captured {
            if captured.kind == PieceKind::Rook
                && !mv.is_en_passant
                && mv.to.row == captured.color.back_row()
            {
                if let Some(side) = rook_home_side(mv.to.col) {
                    rights.revoke(captured.color, side);
                }
            }
        }

        self.castling_log.push(rights);
        self.en_passant_log.push(en_passant);
        self.side_to_move = self.side_to_move.other();
        self.move_log.push(mv);
        self.clear_derived();
    }

    /// Take back the last move. Does nothing on an empty history.
    pub fn undo_move(&mut self) {
        let Some(mv) = self.move_log.pop() else {
            return;
        };
        let mover = mv.piece_moved.color;

        self.set_piece(mv.from, Some(mv.piece_moved));
        if mv.is_en_passant {
            self.set_piece(mv.to, None);
            self.set_piece(mv.en_passant_victim(), mv.piece_captured);
        } else {
            self.set_piece(mv.to, mv.piece_captured);
        }

        if mv.piece_moved.kind == PieceKind::King {
            self.set_king_square(mover, mv.from);
        }

        if mv.is_castle {
            let (rook_from, rook_to) = castle_rook_columns(mv.is_king_side_castle());
            let row = mv.to.row;
            let rook = self.piece_at(Square::new(row, rook_to));
            self.set_piece(Square::new(row, rook_to), None);
            self.set_piece(Square::new(row, rook_from), rook);
        }

        debug_assert!(self.castling_log.len() > 1 && self.en_passant_log.len() > 1);
        self.castling_log.pop();
        self.en_passant_log.pop();
        self.side_to_move = mover;
        self.clear_derived();
    }

    /// Look up the legal move with this origin and destination.
    pub fn find_move(&mut self, from: Square, to: Square) -> Option<Move> {
        self.legal_moves()
            .into_iter()
            .find(|mv| mv.from == from && mv.to == to)
    }

    /// Apply the legal move matching `from`/`to`, or leave the state untouched.
    pub fn request_move(&mut self, from: Square, to: Square) -> Result<Move, ChessError> {
        match self.find_move(from, to) {
            Some(mv) => {
                self.apply_move(mv);
                Ok(mv)
            }
            None => {
                trace!(%from, %to, "rejected move request");
                Err(ChessError::IllegalMove { from, to })
            }
        }
    }
}

/// (rook origin column, rook destination column) for a castle.
fn castle_rook_columns(king_side: bool) -> (u8, u8) {
    if king_side { (7, 5) } else { (0, 3) }
}

fn rook_home_side(col: u8) -> Option<CastleSide> {
    if col == CastlingRights::rook_column(CastleSide::KingSide) {
        Some(CastleSide::KingSide)
    } else if col == CastlingRights::rook_column(CastleSide::QueenSide) {
        Some(CastleSide::QueenSide)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
