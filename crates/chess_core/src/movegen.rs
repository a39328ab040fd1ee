use crate::board::GameState;
use crate::moves::Move;
use crate::types::*;

/// A friendly piece pinned to its king. `dir` points from the king toward the pinner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pin {
    pub square: Square,
    pub dir: (i8, i8),
}

/// An enemy piece giving check. `dir` points from the king toward the checker
/// (for knights it is the knight offset).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Check {
    pub square: Square,
    pub dir: (i8, i8),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PinsAndChecks {
    pub in_check: bool,
    pub pins: Vec<Pin>,
    pub checks: Vec<Check>,
}

impl GameState {
    /// Generate all legal moves for the side to move and refresh the cached
    /// check, pin, checkmate and stalemate fields.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let us = self.side_to_move;
        let PinsAndChecks {
            in_check,
            pins,
            checks,
        } = self.pins_and_checks(self.king_square(us), true);

        let resolving = match checks.as_slice() {
            [check] => self.check_resolving_squares(*check),
            _ => Vec::new(),
        };

        let mut moves = Vec::with_capacity(64);
        for mv in self.pseudo_legal_moves() {
            if mv.piece_moved.kind == PieceKind::King {
                // Castles are fully vetted during generation.
                if mv.is_castle || !self.scan(mv.to, us, false).in_check {
                    moves.push(mv);
                }
                continue;
            }
            if checks.len() > 1 {
                continue;
            }
            if let Some(pin) = pins.iter().find(|p| p.square == mv.from) {
                if !moves_along(mv, pin.dir) {
                    continue;
                }
            }
            if let [check] = checks.as_slice() {
                let captures_checker =
                    mv.is_en_passant && mv.en_passant_victim() == check.square;
                if !resolving.contains(&mv.to) && !captures_checker {
                    continue;
                }
            }
            if mv.is_en_passant && self.en_passant_exposes_king(mv) {
                continue;
            }
            moves.push(mv);
        }

        self.in_check = in_check;
        self.pins = pins;
        self.checks = checks;
        self.check_mate = moves.is_empty() && in_check;
        self.stale_mate = moves.is_empty() && !in_check;
        moves
    }

    /// Moves that obey each piece's movement rule, ignoring king safety.
    /// Castles are only emitted when fully legal.
    pub fn pseudo_legal_moves(&self) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        for row in 0..8u8 {
            for col in 0..8u8 {
                let from = Square::new(row, col);
                let pc = match self.piece_at(from) {
                    Some(p) if p.color == self.side_to_move => p,
                    _ => continue,
                };
                match pc.kind {
                    PieceKind::Pawn => self.pawn_moves(from, pc.color, &mut out),
                    PieceKind::Knight => self.step_moves(from, pc.color, &KNIGHT_OFFSETS, &mut out),
                    PieceKind::Bishop => self.slider_moves(from, pc.color, &DIAGONAL, &mut out),
                    PieceKind::Rook => self.slider_moves(from, pc.color, &ORTHOGONAL, &mut out),
                    PieceKind::Queen => {
                        self.slider_moves(from, pc.color, &ALL_DIRECTIONS, &mut out)
                    }
                    PieceKind::King => {
                        self.step_moves(from, pc.color, &ALL_DIRECTIONS, &mut out);
                        self.castle_moves(from, pc.color, &mut out);
                    }
                }
            }
        }
        out
    }

    /// Pins on and checks against the side to move's king, looking out from
    /// `square`. With `is_king_square == false` the square is a candidate
    /// destination for the king, and the king's current square counts as empty.
    pub fn pins_and_checks(&self, square: Square, is_king_square: bool) -> PinsAndChecks {
        self.scan(square, self.side_to_move, is_king_square)
    }

    pub(crate) fn scan(&self, square: Square, us: Color, is_king_square: bool) -> PinsAndChecks {
        let them = us.other();
        let mut result = PinsAndChecks::default();

        for (i, &dir) in ALL_DIRECTIONS.iter().enumerate() {
            let orthogonal = i < 4;
            let mut candidate: Option<Square> = None;
            let mut cur = square;
            let mut distance = 0;
            while let Some(next) = cur.offset(dir.0, dir.1) {
                cur = next;
                distance += 1;
                let Some(pc) = self.piece_at(cur) else {
                    continue;
                };
                if pc.color == us {
                    if !is_king_square && pc.kind == PieceKind::King {
                        continue;
                    }
                    if candidate.is_some() {
                        break;
                    }
                    candidate = Some(cur);
                    continue;
                }

                let attacks = match pc.kind {
                    PieceKind::Rook => orthogonal,
                    PieceKind::Bishop => !orthogonal,
                    PieceKind::Queen => true,
                    // An enemy pawn attacks the square its forward diagonal lands on.
                    PieceKind::Pawn => distance == 1 && !orthogonal && dir.0 == -them.forward(),
                    PieceKind::King => distance == 1,
                    PieceKind::Knight => false,
                };
                if attacks {
                    match candidate {
                        Some(pinned) => result.pins.push(Pin {
                            square: pinned,
                            dir,
                        }),
                        None => {
                            result.in_check = true;
                            result.checks.push(Check { square: cur, dir });
                        }
                    }
                }
                break;
            }
        }

        for &(dr, dc) in &KNIGHT_OFFSETS {
            if let Some(sq) = square.offset(dr, dc) {
                if self.piece_at(sq) == Some(Piece::new(them, PieceKind::Knight)) {
                    result.in_check = true;
                    result.checks.push(Check {
                        square: sq,
                        dir: (dr, dc),
                    });
                }
            }
        }

        result
    }

    /// Destinations that capture the checker or, for a slider, block its ray.
    fn check_resolving_squares(&self, check: Check) -> Vec<Square> {
        let is_knight = self
            .piece_at(check.square)
            .is_some_and(|pc| pc.kind == PieceKind::Knight);
        if is_knight {
            return vec![check.square];
        }
        let mut squares = Vec::with_capacity(7);
        let mut cur = self.king_square(self.side_to_move);
        while let Some(next) = cur.offset(check.dir.0, check.dir.1) {
            squares.push(next);
            if next == check.square {
                break;
            }
            cur = next;
        }
        squares
    }

    /// Both pawns leave the rank on an en-passant capture, which can uncover
    /// a rook or queen the pin scan never sees.
    fn en_passant_exposes_king(&mut self, mv: Move) -> bool {
        let us = mv.piece_moved.color;
        self.apply_move(mv);
        let exposed = self.scan(self.king_square(us), us, true).in_check;
        self.undo_move();
        exposed
    }

    fn pawn_moves(&self, from: Square, color: Color, out: &mut Vec<Move>) {
        let fwd = color.forward();

        if let Some(one) = from.offset(fwd, 0) {
            if self.piece_at(one).is_none() {
                out.push(Move::new(from, one, &self.board));
                if from.row == color.pawn_start_row() {
                    if let Some(two) = from.offset(2 * fwd, 0) {
                        if self.piece_at(two).is_none() {
                            out.push(Move::new(from, two, &self.board));
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            let Some(to) = from.offset(fwd, dc) else {
                continue;
            };
            match self.piece_at(to) {
                Some(pc) if pc.color != color => out.push(Move::new(from, to, &self.board)),
                Some(_) => {}
                None if self.en_passant_target() == Some(to) => {
                    let victim = Square::new(from.row, to.col);
                    if self.piece_at(victim) == Some(Piece::new(color.other(), PieceKind::Pawn)) {
                        out.push(Move::en_passant(from, to, &self.board));
                    }
                }
                None => {}
            }
        }
    }

    /// Knight and king steps: fixed offsets onto empty or enemy squares.
    fn step_moves(&self, from: Square, color: Color, offsets: &[(i8, i8)], out: &mut Vec<Move>) {
        for &(dr, dc) in offsets {
            if let Some(to) = from.offset(dr, dc) {
                match self.piece_at(to) {
                    Some(pc) if pc.color == color => {}
                    _ => out.push(Move::new(from, to, &self.board)),
                }
            }
        }
    }

    fn slider_moves(&self, from: Square, color: Color, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
        for &(dr, dc) in dirs {
            let mut cur = from;
            while let Some(to) = cur.offset(dr, dc) {
                match self.piece_at(to) {
                    None => out.push(Move::new(from, to, &self.board)),
                    Some(pc) if pc.color != color => {
                        out.push(Move::new(from, to, &self.board));
                        break;
                    }
                    Some(_) => break,
                }
                cur = to;
            }
        }
    }

    fn castle_moves(&self, from: Square, color: Color, out: &mut Vec<Move>) {
        let row = color.back_row();
        if from != Square::new(row, 4) || self.scan(from, color, true).in_check {
            return;
        }
        let rights = self.castling_rights();
        let rook = Some(Piece::new(color, PieceKind::Rook));
        let empty = |cols: &[u8]| cols.iter().all(|&c| self.piece_at(Square::new(row, c)).is_none());
        let safe = |cols: &[u8]| {
            cols.iter()
                .all(|&c| !self.scan(Square::new(row, c), color, false).in_check)
        };

        let king_side = match color {
            Color::White => rights.white_king_side,
            Color::Black => rights.black_king_side,
        };
        if king_side
            && self.piece_at(Square::new(row, 7)) == rook
            && empty(&[5, 6])
            && safe(&[5, 6])
        {
            out.push(Move::castle(from, Square::new(row, 6), &self.board));
        }

        let queen_side = match color {
            Color::White => rights.white_queen_side,
            Color::Black => rights.black_queen_side,
        };
        if queen_side
            && self.piece_at(Square::new(row, 0)) == rook
            && empty(&[1, 2, 3])
            && safe(&[3, 2])
        {
            out.push(Move::castle(from, Square::new(row, 2), &self.board));
        }
    }
}

/// True if the move stays on the line through `dir` (either way along it).
fn moves_along(mv: Move, dir: (i8, i8)) -> bool {
    let dr = mv.to.row as i8 - mv.from.row as i8;
    let dc = mv.to.col as i8 - mv.from.col as i8;
    dr * dir.1 == dc * dir.0
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
