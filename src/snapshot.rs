use crate::board::{Color, Square};
use crate::game::Game;
use crate::movegen::Destination;
use crate::score::Scores;
use serde::Serialize;

/// Read-only view of a game for front ends that want structured output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub placement: String,
    /// Eight strings of FEN letters, `.` for empty, row 0 first.
    pub rows: Vec<String>,
    pub turn: Color,
    pub scores: Scores,
    pub selection: Option<String>,
    pub quiet: Vec<String>,
    pub captures: Vec<String>,
}

impl Snapshot {
    pub fn of(game: &Game) -> Self {
        let board = game.board();
        let rows: Vec<String> = board
            .rows()
            .iter()
            .map(|rank| rank.iter().map(|c| c.map(|p| p.to_char()).unwrap_or('.')).collect::<String>())
            .collect();
        let (caps, quiet): (Vec<&Destination>, Vec<&Destination>) = game.highlights().iter().partition(|d| d.is_capture());
        let names = |v: Vec<&Destination>| -> Vec<String> { v.iter().map(|d| d.square.to_string()).collect() };
        Self {
            placement: board.placement(),
            rows,
            turn: game.turn(),
            scores: game.scores(),
            selection: game.selection().map(|s: Square| s.to_string()),
            quiet: names(quiet),
            captures: names(caps),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> { serde_json::to_string(self) }
}
