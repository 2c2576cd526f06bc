use std::fmt;
use std::str::FromStr;

use crate::board::BOARD_SIZE;
use crate::error::ParsePositionError;

/// A `(row, col)` coordinate. Coordinates are signed so that positions
/// stepped off the edge of the board remain representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }

    pub fn from_index(index: usize) -> Self {
        Position {
            row: (index / BOARD_SIZE) as i32,
            col: (index % BOARD_SIZE) as i32,
        }
    }

    /// Row-major index, or `None` when off the board.
    pub fn to_index(&self) -> Option<usize> {
        if self.is_valid() {
            Some(self.row as usize * BOARD_SIZE + self.col as usize)
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        let size = BOARD_SIZE as i32;
        (0..size).contains(&self.row) && (0..size).contains(&self.col)
    }

    /// Steps by `(dr, dc)`. Saturates at the `i32` limits, which are
    /// off the board anyway.
    pub fn offset(&self, (dr, dc): (i32, i32)) -> Position {
        Position::new(self.row.saturating_add(dr), self.col.saturating_add(dc))
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Position::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.row, self.col)
    }
}

/// Accepts `[r,c]`, `r,c` or `r c`. Range is not checked here; the board
/// reports off-board coordinates as `OutOfBounds`.
impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = match (trimmed.strip_prefix('['), trimmed.strip_suffix(']')) {
            (Some(_), Some(_)) if trimmed.len() >= 2 => &trimmed[1..trimmed.len() - 1],
            (None, None) => trimmed,
            _ => return Err(ParsePositionError::Malformed(trimmed.to_string())),
        };

        let parts: Vec<&str> = if inner.contains(',') {
            inner.split(',').map(str::trim).collect()
        } else {
            inner.split_whitespace().collect()
        };
        if parts.len() != 2 {
            return Err(ParsePositionError::Malformed(trimmed.to_string()));
        }

        let parse = |part: &str| {
            part.parse::<i32>()
                .map_err(|_| ParsePositionError::InvalidCoordinate(part.to_string()))
        };
        Ok(Position::new(parse(parts[0])?, parse(parts[1])?))
    }
}
