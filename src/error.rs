use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("square ({row}, {col}) is off the board")]
    SquareOutOfRange { row: i32, col: i32 },
    #[error("invalid square: {0:?}")]
    InvalidSquare(String),
    #[error("invalid placement: {0}")]
    InvalidPlacement(String),
}
