pub mod piece;
pub mod position;
pub mod square;

pub use piece::{Color, Piece, PieceKind};
pub use position::{Board, START_PLACEMENT};
pub use square::Square;
