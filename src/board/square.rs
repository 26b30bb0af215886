use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A board coordinate. Row 0 is black's home rank (algebraic rank 8),
/// row 7 is white's (rank 1); column 0 is file `a`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawSquare")]
pub struct Square {
    row: u8,
    col: u8,
}

// Unchecked wire form; only becomes a `Square` through `Square::new`.
#[derive(Deserialize)]
struct RawSquare {
    row: i32,
    col: i32,
}

impl TryFrom<RawSquare> for Square {
    type Error = GameError;

    fn try_from(raw: RawSquare) -> Result<Self, Self::Error> { Square::new(raw.row, raw.col) }
}

impl Square {
    pub fn new(row: i32, col: i32) -> Result<Self, GameError> {
        Self::try_new(row, col).ok_or(GameError::SquareOutOfRange { row, col })
    }

    fn try_new(row: i32, col: i32) -> Option<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self { row: row as u8, col: col as u8 })
        } else {
            None
        }
    }

    pub fn row(self) -> usize { self.row as usize }
    pub fn col(self) -> usize { self.col as usize }

    /// Shifted square, or `None` when the step leaves the board.
    pub fn offset(self, dr: i32, dc: i32) -> Option<Self> {
        Self::try_new(self.row as i32 + dr, self.col as i32 + dc)
    }

    pub fn is_light(self) -> bool { (self.row + self.col) % 2 == 0 }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = 8 - self.row;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = GameError;

    // Accepts algebraic `e2` or grid coordinates `6,4` / `6 4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let b = t.as_bytes();
        if b.len() == 2 && b[0].is_ascii_alphabetic() {
            let f = b[0].to_ascii_lowercase();
            let r = b[1];
            if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
                return Err(GameError::InvalidSquare(s.to_string()));
            }
            return Self::new(8 - (r - b'0') as i32, (f - b'a') as i32);
        }
        let parts: Vec<&str> = t.split(|c: char| c == ',' || c.is_whitespace()).filter(|p| !p.is_empty()).collect();
        if parts.len() != 2 { return Err(GameError::InvalidSquare(s.to_string())); }
        let row = parts[0].parse::<i32>().map_err(|_| GameError::InvalidSquare(s.to_string()))?;
        let col = parts[1].parse::<i32>().map_err(|_| GameError::InvalidSquare(s.to_string()))?;
        Self::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algebraic_maps_onto_rows_from_the_top() {
        let e2: Square = "e2".parse().unwrap();
        assert_eq!((e2.row(), e2.col()), (6, 4));
        assert_eq!(e2.to_string(), "e2");
        let a8 = Square::new(0, 0).unwrap();
        assert_eq!(a8.to_string(), "a8");
    }

    #[test]
    fn grid_coordinates_parse_with_comma_or_space() {
        assert_eq!("6,4".parse::<Square>().unwrap(), Square::new(6, 4).unwrap());
        assert_eq!(" 1 3 ".parse::<Square>().unwrap(), Square::new(1, 3).unwrap());
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert_eq!(Square::new(8, 0), Err(GameError::SquareOutOfRange { row: 8, col: 0 }));
        assert_eq!(Square::new(0, -1), Err(GameError::SquareOutOfRange { row: 0, col: -1 }));
        assert!("i1".parse::<Square>().is_err());
        assert!("e9".parse::<Square>().is_err());
        assert!("9,0".parse::<Square>().is_err());
        assert!("e".parse::<Square>().is_err());
    }

    #[test]
    fn deserialize_goes_through_range_check() {
        let ok: Square = serde_json::from_str(r#"{"row":6,"col":4}"#).unwrap();
        assert_eq!(ok.to_string(), "e2");
        let back: Square = serde_json::from_str(&serde_json::to_string(&ok).unwrap()).unwrap();
        assert_eq!(back, ok);
        let err = serde_json::from_str::<Square>(r#"{"row":9,"col":0}"#).unwrap_err();
        assert!(err.to_string().contains("off the board"), "{err}");
        assert!(serde_json::from_str::<Square>(r#"{"row":0,"col":-1}"#).is_err());
    }

    #[test]
    fn offset_drops_off_board_steps() {
        let h1 = Square::new(7, 7).unwrap();
        assert_eq!(h1.offset(1, 0), None);
        assert_eq!(h1.offset(-1, -2), Some(Square::new(6, 5).unwrap()));
    }

    #[test]
    fn shade_alternates() {
        assert!(Square::new(0, 0).unwrap().is_light());
        assert!(!Square::new(0, 1).unwrap().is_light());
        assert_eq!(Square::all().count(), 64);
    }
}
