// Two-player same-device chess: simplified move generation plus a
// click-driven game controller and a terminal front end.
pub mod board;
pub mod chat;
pub mod error;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod render;
pub mod score;
pub mod session;
pub mod snapshot;

pub use board::{Board, Color, Piece, PieceKind, Square};
pub use error::GameError;
pub use game::{ClickOutcome, Game, GameEvent};
pub use movegen::{destinations, Destination, MoveKind};
pub use score::Scores;
