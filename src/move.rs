use crate::color::Color;
use crate::position::Position;

/// One entry in a game record: a placement or a forced pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Place { color: Color, pos: Position },
    Pass { color: Color },
}

impl Move {
    pub fn place(color: Color, pos: Position) -> Self {
        Move::Place { color, pos }
    }

    pub fn pass(color: Color) -> Self {
        Move::Pass { color }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass { .. })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Place { color, pos } => write!(f, "{} {}", color, pos),
            Move::Pass { color } => write!(f, "{} pass", color),
        }
    }
}
