use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Board shape does not fit the coordinate range")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
