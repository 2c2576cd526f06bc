use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::error::{GameError, ParseBoardError};
use crate::position::Position;

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// The eight unit steps, every `(dr, dc)` in {-1,0,1}² except `(0, 0)`.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Occupancy of one square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Color),
}

impl Cell {
    pub fn color(&self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(color) => Some(*color),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn to_char(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(color) => color.to_char(),
        }
    }
}

/// How a square looks to the side scanning for captures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Occupant {
    Mine,
    Opponent,
    /// Off the board or empty: a capture line cannot continue through it.
    Boundary,
}

/// The 8x8 Reversi grid.
///
/// During play a square only ever goes from `Empty` to `Occupied`, after
/// which flips toggle its color in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates the starting position: white on (3,3) and (4,4), black on
    /// (3,4) and (4,3).
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.cells[3][3] = Cell::Occupied(Color::White);
        board.cells[4][4] = Cell::Occupied(Color::White);
        board.cells[3][4] = Cell::Occupied(Color::Black);
        board.cells[4][3] = Cell::Occupied(Color::Black);
        board
    }

    /// A board with no pieces at all. Useful for composing positions.
    pub fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Board { cells }
    }

    pub fn is_valid_position(&self, pos: Position) -> bool {
        pos.is_valid()
    }

    pub fn get_cell(&self, pos: Position) -> Result<Cell, GameError> {
        if !pos.is_valid() {
            return Err(GameError::OutOfBounds(pos));
        }
        Ok(self.cells[pos.row as usize][pos.col as usize])
    }

    pub fn is_occupied(&self, pos: Position) -> Result<bool, GameError> {
        Ok(!self.get_cell(pos)?.is_empty())
    }

    /// Classifies `pos` from the point of view of `color`.
    pub fn color_at(&self, pos: Position, color: Color) -> Occupant {
        match self.get_cell(pos) {
            Ok(Cell::Occupied(c)) if c == color => Occupant::Mine,
            Ok(Cell::Occupied(_)) => Occupant::Opponent,
            Ok(Cell::Empty) | Err(_) => Occupant::Boundary,
        }
    }

    /// Walks from `pos` along `direction` collecting opponent pieces.
    ///
    /// Returns the collected positions only when the run is closed by a
    /// piece of `color`; an edge, an empty square or an immediate own piece
    /// yields `None`, as does an off-board start. The walk takes at most
    /// `BOARD_SIZE - 1` steps.
    pub fn captures_in_direction(
        &self,
        pos: Position,
        color: Color,
        direction: (i32, i32),
    ) -> Option<Vec<Position>> {
        if !pos.is_valid() {
            return None;
        }

        let mut captured = Vec::new();
        let mut current = pos;

        for _ in 1..BOARD_SIZE {
            current = current.offset(direction);
            match self.color_at(current, color) {
                Occupant::Opponent => captured.push(current),
                Occupant::Mine if captured.is_empty() => return None,
                Occupant::Mine => return Some(captured),
                Occupant::Boundary => return None,
            }
        }

        None
    }

    #[cfg_attr(feature = "hotpath", hotpath::measure)]
    pub fn is_legal_move(&self, pos: Position, color: Color) -> bool {
        match self.get_cell(pos) {
            Ok(Cell::Empty) => DIRECTIONS
                .iter()
                .any(|&dir| self.captures_in_direction(pos, color, dir).is_some()),
            _ => false,
        }
    }

    /// All legal placements for `color` in row-major order.
    #[cfg_attr(feature = "hotpath", hotpath::measure)]
    pub fn legal_moves(&self, color: Color) -> Vec<Position> {
        (0..NUM_SQUARES)
            .map(Position::from_index)
            .filter(|&pos| self.is_legal_move(pos, color))
            .collect()
    }

    /// Places a piece for `color` and flips every captured line.
    ///
    /// Returns the flipped positions. On error the board is unchanged.
    #[cfg_attr(feature = "hotpath", hotpath::measure)]
    pub fn apply_move(&mut self, pos: Position, color: Color) -> Result<Vec<Position>, GameError> {
        if !pos.is_valid() {
            return Err(GameError::OutOfBounds(pos));
        }
        if !self.is_legal_move(pos, color) {
            return Err(GameError::IllegalMove(pos));
        }

        // Collect every line before mutating so later directions see the
        // pre-move board.
        let flips: Vec<Position> = DIRECTIONS
            .iter()
            .filter_map(|&dir| self.captures_in_direction(pos, color, dir))
            .flatten()
            .collect();

        self.set(pos, Cell::Occupied(color));
        for &flipped in &flips {
            self.set(flipped, Cell::Occupied(color));
        }

        Ok(flips)
    }

    /// Pieces of `color` across all 64 squares.
    pub fn piece_count(&self, color: Color) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.color() == Some(color))
            .count()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    pub fn has_any_move(&self, color: Color) -> bool {
        !self.legal_moves(color).is_empty()
    }

    pub fn is_game_over(&self) -> bool {
        !self.has_any_move(Color::Black) && !self.has_any_move(Color::White)
    }

    /// Every square with its cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        (0..NUM_SQUARES).map(move |idx| {
            let pos = Position::from_index(idx);
            (pos, self.cells[idx / BOARD_SIZE][idx % BOARD_SIZE])
        })
    }

    fn set(&mut self, pos: Position, cell: Cell) {
        if let Some(idx) = pos.to_index() {
            self.cells[idx / BOARD_SIZE][idx % BOARD_SIZE] = cell;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses an 8-line diagram of `.`, `B` and `W`. Whitespace inside a row and
/// blank lines are ignored.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .collect::<Vec<_>>()
            })
            .filter(|row| !row.is_empty())
            .collect();

        if rows.len() != BOARD_SIZE {
            return Err(ParseBoardError::RowCount(rows.len()));
        }

        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in rows.iter().enumerate() {
            if row.len() != BOARD_SIZE {
                return Err(ParseBoardError::RowLength {
                    row: r,
                    len: row.len(),
                });
            }
            for (c, &ch) in row.iter().enumerate() {
                cells[r][c] = match ch {
                    '.' => Cell::Empty,
                    other => match Color::from_char(other) {
                        Some(color) => Cell::Occupied(color),
                        None => return Err(ParseBoardError::UnknownCell { row: r, ch: other }),
                    },
                };
            }
        }

        Ok(Board { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Column numbers
        write!(f, " ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {}", col)?;
        }
        writeln!(f)?;

        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{}", row)?;
            for cell in cells {
                write!(f, " {}", cell.to_char())?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
