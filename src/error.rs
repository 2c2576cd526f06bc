use crate::position::Position;

/// Errors raised by the board engine and the turn controller.
///
/// Every variant is recoverable: the board and game state are left
/// untouched whenever one of these is returned.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A coordinate lies outside `0..=7`.
    #[error("position {0} is off the board")]
    OutOfBounds(Position),

    /// The target is occupied or captures nothing.
    #[error("illegal move at {0}")]
    IllegalMove(Position),

    #[error("the game is already over")]
    GameOver,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ParsePositionError {
    #[error("expected a move like [row,col], got `{0}`")]
    Malformed(String),

    #[error("invalid coordinate `{0}`")]
    InvalidCoordinate(String),
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("unknown color `{0}`, expected black or white")]
pub struct ParseColorError(pub String);

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("expected 8 rows, found {0}")]
    RowCount(usize),

    #[error("row {row} has {len} cells, expected 8")]
    RowLength { row: usize, len: usize },

    #[error("unexpected character `{ch}` in row {row}")]
    UnknownCell { row: usize, ch: char },
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown argument `{0}`")]
    UnknownArgument(String),

    #[error("missing value for `{0}`")]
    MissingValue(String),

    #[error("invalid value `{value}` for `{flag}`")]
    InvalidValue { flag: String, value: String },

    #[error("invalid color for `{flag}`")]
    InvalidColor {
        flag: String,
        #[source]
        source: ParseColorError,
    },
}
