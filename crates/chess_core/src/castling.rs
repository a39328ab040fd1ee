use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

/// Castling availability for both colors. Along forward play a right is only
/// ever cleared; undo restores earlier snapshots from the history stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CastlingRights {
    pub white_king_side: bool,
    pub black_king_side: bool,
    pub white_queen_side: bool,
    pub black_queen_side: bool,
}

impl CastlingRights {
    pub fn all() -> Self {
        Self {
            white_king_side: true,
            black_king_side: true,
            white_queen_side: true,
            black_queen_side: true,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn allows(&self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => self.white_king_side,
            (Color::White, CastleSide::QueenSide) => self.white_queen_side,
            (Color::Black, CastleSide::KingSide) => self.black_king_side,
            (Color::Black, CastleSide::QueenSide) => self.black_queen_side,
        }
    }

    pub fn revoke(&mut self, color: Color, side: CastleSide) {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => self.white_king_side = false,
            (Color::White, CastleSide::QueenSide) => self.white_queen_side = false,
            (Color::Black, CastleSide::KingSide) => self.black_king_side = false,
            (Color::Black, CastleSide::QueenSide) => self.black_queen_side = false,
        }
    }

    pub fn revoke_all(&mut self, color: Color) {
        self.revoke(color, CastleSide::KingSide);
        self.revoke(color, CastleSide::QueenSide);
    }

    /// Rook home column for the given side.
    pub fn rook_column(side: CastleSide) -> u8 {
        match side {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// FEN castling field, `-` when nothing is available.
    pub fn to_fen(&self) -> String {
        let mut s = String::new();
        if self.white_king_side {
            s.push('K');
        }
        if self.white_queen_side {
            s.push('Q');
        }
        if self.black_king_side {
            s.push('k');
        }
        if self.black_queen_side {
            s.push('q');
        }
        if s.is_empty() {
            s.push('-');
        }
        s
    }

    pub fn from_fen(field: &str) -> Option<Self> {
        let mut rights = Self::none();
        if field == "-" {
            return Some(rights);
        }
        for c in field.chars() {
            match c {
                'K' => rights.white_king_side = true,
                'Q' => rights.white_queen_side = true,
                'k' => rights.black_king_side = true,
                'q' => rights.black_queen_side = true,
                _ => return None,
            }
        }
        Some(rights)
    }
}
