use crate::color::Color;

/// Final piece tallies of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOutcome {
    pub black: usize,
    pub white: usize,
}

impl GameOutcome {
    pub fn new(black: usize, white: usize) -> Self {
        GameOutcome { black, white }
    }

    /// White wins only with strictly more pieces. A tie is awarded to Black;
    /// use [`GameOutcome::is_tie`] to tell the two apart.
    pub fn winner(&self) -> Color {
        if self.white > self.black {
            Color::White
        } else {
            Color::Black
        }
    }

    pub fn is_tie(&self) -> bool {
        self.black == self.white
    }

    pub fn count(&self, color: Color) -> usize {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} wins ({} black, {} white)",
            self.winner(),
            self.black,
            self.white
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_needs_strict_majority() {
        assert_eq!(GameOutcome::new(30, 34).winner(), Color::White);
        assert_eq!(GameOutcome::new(34, 30).winner(), Color::Black);
    }

    #[test]
    fn test_tie_goes_to_black() {
        let outcome = GameOutcome::new(32, 32);
        assert!(outcome.is_tie());
        assert_eq!(outcome.winner(), Color::Black);
    }

    #[test]
    fn test_count_by_color() {
        let outcome = GameOutcome::new(10, 20);
        assert_eq!(outcome.count(Color::White), 20);
        assert_eq!(outcome.count(Color::Black), 10);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            GameOutcome::new(40, 24).to_string(),
            "Black wins (40 black, 24 white)"
        );
    }
}
