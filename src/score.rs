use crate::board::Color;
use serde::Serialize;

/// Material captured by each side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Scores {
    pub white: u32,
    pub black: u32,
}

impl Scores {
    pub fn get(&self, color: Color) -> u32 {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    pub fn credit(&mut self, color: Color, value: u32) {
        match color {
            Color::White => self.white += value,
            Color::Black => self.black += value,
        }
    }
}
