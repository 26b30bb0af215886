use crate::board::{Board, Color, Piece, PieceKind, Square};
use crate::error::GameError;
use crate::movegen::{destinations, Destination};
use crate::score::Scores;
use log::{debug, info};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub square: Square,
    pub piece: Piece,
    pub destinations: Vec<Destination>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CaptureEvent {
    pub by: Color,
    pub captured: PieceKind,
    pub from: Square,
    pub to: Square,
    pub value: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum GameEvent {
    Capture(CaptureEvent),
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppliedMove {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
}

/// Undrained events kept by a `Game`; older ones are dropped first.
pub const MAX_PENDING_EVENTS: usize = 256;

/// What a click did to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Selected(Square),
    Deselected,
    Moved(AppliedMove),
    Ignored,
}

/// Game state plus the click-driven selection state machine. Only this type
/// mutates the board, turn, scores and selection.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
    scores: Scores,
    selection: Option<Selection>,
    events: Vec<GameEvent>,
}

impl Default for Game {
    fn default() -> Self { Self::new() }
}

impl Game {
    pub fn new() -> Self { Self::from_position(Board::startpos(), Color::White) }

    pub fn from_position(board: Board, turn: Color) -> Self {
        Self { board, turn, scores: Scores::default(), selection: None, events: Vec::new() }
    }

    pub fn board(&self) -> &Board { &self.board }
    pub fn turn(&self) -> Color { self.turn }
    pub fn scores(&self) -> Scores { self.scores }
    pub fn selection(&self) -> Option<Square> { self.selection.as_ref().map(|s| s.square) }

    /// Cached destinations of the current selection, empty when idle.
    pub fn highlights(&self) -> &[Destination] {
        self.selection.as_ref().map(|s| s.destinations.as_slice()).unwrap_or(&[])
    }

    /// Drains capture and reset notifications accumulated since the last call.
    /// Front ends should call this after every interaction; at most
    /// `MAX_PENDING_EVENTS` of the newest events are held in between.
    pub fn take_events(&mut self) -> Vec<GameEvent> { std::mem::take(&mut self.events) }

    fn emit(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            let excess = self.events.len() + 1 - MAX_PENDING_EVENTS;
            self.events.drain(..excess);
        }
        self.events.push(event);
    }

    /// Raw-coordinate entry point; off-board coordinates are rejected and
    /// leave the game untouched.
    pub fn on_square_clicked(&mut self, row: i32, col: i32) -> Result<ClickOutcome, GameError> {
        let sq = Square::new(row, col)?;
        Ok(self.click(sq))
    }

    pub fn click(&mut self, sq: Square) -> ClickOutcome {
        if let Some(sel) = &self.selection {
            if sel.square == sq {
                debug!("deselect {sq}");
                self.selection = None;
                return ClickOutcome::Deselected;
            }
            if sel.destinations.iter().any(|d| d.square == sq) {
                let (from, piece) = (sel.square, sel.piece);
                self.selection = None;
                let applied = self.apply_move(piece, from, sq);
                self.turn = self.turn.opposite();
                return ClickOutcome::Moved(applied);
            }
        }
        match self.board.get(sq) {
            Some(piece) if piece.color == self.turn => {
                let dests = destinations(&self.board, sq, piece);
                debug!("select {sq} ({} {}), {} destinations", piece.color, piece.kind.name(), dests.len());
                self.selection = Some(Selection { square: sq, piece, destinations: dests });
                ClickOutcome::Selected(sq)
            }
            _ => {
                debug!("ignored click on {sq}");
                ClickOutcome::Ignored
            }
        }
    }

    fn apply_move(&mut self, piece: Piece, from: Square, to: Square) -> AppliedMove {
        let captured = self.board.relocate(from, to);
        if let Some(victim) = captured {
            let value = victim.kind.value();
            self.scores.credit(self.turn, value);
            info!("{} {} takes {} on {to} (+{value})", self.turn, piece.kind.name(), victim.kind.name());
            self.emit(GameEvent::Capture(CaptureEvent { by: self.turn, captured: victim.kind, from, to, value }));
        } else {
            info!("{} {} {from}-{to}", self.turn, piece.kind.name());
        }
        AppliedMove { piece, from, to, captured }
    }

    pub fn on_reset(&mut self) {
        info!("reset");
        self.board = Board::startpos();
        self.turn = Color::White;
        self.scores = Scores::default();
        self.selection = None;
        self.emit(GameEvent::Reset);
    }
}
