use super::piece::{Color, Piece};
use super::square::Square;
use crate::error::GameError;
use std::fmt;

pub const START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// 8x8 grid of optional pieces, indexed `[row][col]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self { Self::startpos() }
}

impl Board {
    pub fn empty() -> Self { Self { grid: [[None; 8]; 8] } }

    pub fn startpos() -> Self {
        let mut board = Self::empty();
        let back = START_PLACEMENT.split('/').next().unwrap_or_default();
        for (col, c) in back.chars().enumerate() {
            board.grid[0][col] = Piece::from_char(c);
            board.grid[7][col] = Piece::from_char(c.to_ascii_uppercase());
            board.grid[1][col] = Piece::from_char('p');
            board.grid[6][col] = Piece::from_char('P');
        }
        board
    }

    /// Parses the piece-placement field of a FEN string. Ranks are listed
    /// from row 0 (rank 8) down to row 7 (rank 1).
    pub fn from_placement(s: &str) -> Result<Self, GameError> {
        let field = s.split_whitespace().next().unwrap_or("");
        let ranks: Vec<&str> = field.split('/').collect();
        if ranks.len() != 8 {
            return Err(GameError::InvalidPlacement(format!("expected 8 ranks, got {}", ranks.len())));
        }
        let mut board = Self::empty();
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for c in rank.chars() {
                if let Some(d) = c.to_digit(10) {
                    if d == 0 || d > 8 { return Err(GameError::InvalidPlacement(format!("bad run length '{c}'"))); }
                    col += d as usize;
                } else {
                    let piece = Piece::from_char(c)
                        .ok_or_else(|| GameError::InvalidPlacement(format!("unknown piece '{c}'")))?;
                    if col >= 8 { return Err(GameError::InvalidPlacement(format!("rank {} overflows", 8 - row))); }
                    board.grid[row][col] = Some(piece);
                    col += 1;
                }
            }
            if col != 8 {
                return Err(GameError::InvalidPlacement(format!("rank {} has {} files", 8 - row, col)));
            }
        }
        Ok(board)
    }

    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(64);
        for (row, rank) in self.grid.iter().enumerate() {
            if row > 0 { out.push('/'); }
            let mut run = 0u8;
            for cell in rank {
                match cell {
                    Some(p) => {
                        if run > 0 { out.push((b'0' + run) as char); run = 0; }
                        out.push(p.to_char());
                    }
                    None => run += 1,
                }
            }
            if run > 0 { out.push((b'0' + run) as char); }
        }
        out
    }

    pub fn get(&self, sq: Square) -> Option<Piece> { self.grid[sq.row()][sq.col()] }

    pub fn set(&mut self, sq: Square, piece: Option<Piece>) { self.grid[sq.row()][sq.col()] = piece; }

    /// Moves whatever stands on `from` onto `to`, returning the piece that was
    /// on `to` before.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.grid[from.row()][from.col()].take();
        std::mem::replace(&mut self.grid[to.row()][to.col()], moving)
    }

    /// Occupied squares with their pieces, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] { &self.grid }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, rank) in self.grid.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for cell in rank {
                write!(f, "{}", cell.map(|p| p.to_char()).unwrap_or('.'))?;
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefgh")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceKind;

    #[test]
    fn startpos_matches_standard_layout() {
        let b = Board::startpos();
        assert_eq!(b.placement(), START_PLACEMENT);
        assert_eq!(b.pieces().count(), 32);
        let e1 = "e1".parse::<Square>().unwrap();
        assert_eq!(b.get(e1), Some(Piece::new(PieceKind::King, Color::White)));
        let d8 = "d8".parse::<Square>().unwrap();
        assert_eq!(b.get(d8), Some(Piece::new(PieceKind::Queen, Color::Black)));
        assert_eq!(b.pieces_of(Color::Black).count(), 16);
    }

    #[test]
    fn placement_parses_and_prints() {
        let s = "4k3/8/8/3p4/4P3/8/8/4K3";
        let b = Board::from_placement(s).unwrap();
        assert_eq!(b.placement(), s);
        assert_eq!(b.get(Square::new(4, 4).unwrap()), Some(Piece::new(PieceKind::Pawn, Color::White)));
        // Trailing FEN fields are ignored.
        assert_eq!(Board::from_placement(&format!("{s} w - - 0 1")).unwrap(), b);
    }

    #[test]
    fn malformed_placement_is_rejected() {
        assert!(Board::from_placement("8/8/8").is_err());
        assert!(Board::from_placement("9/8/8/8/8/8/8/8").is_err());
        assert!(Board::from_placement("7/8/8/8/8/8/8/8").is_err());
        assert!(Board::from_placement("x7/8/8/8/8/8/8/8").is_err());
        assert!(Board::from_placement("ppppppppp/8/8/8/8/8/8/8").is_err());
    }

    #[test]
    fn relocate_returns_displaced_piece() {
        let mut b = Board::startpos();
        let from = Square::new(6, 4).unwrap();
        let to = Square::new(1, 4).unwrap();
        let taken = b.relocate(from, to);
        assert_eq!(taken, Some(Piece::new(PieceKind::Pawn, Color::Black)));
        assert_eq!(b.get(from), None);
        assert_eq!(b.get(to), Some(Piece::new(PieceKind::Pawn, Color::White)));
    }
}
