use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;

/// The two sides of a Reversi game. Black always moves first.
///
/// The discriminants are the values the Python bindings exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Color {
    Black = 1,
    White = -1,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    pub fn opposite(&self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::White => "White",
        }
    }

    /// Diagram glyph, as read by the board parser.
    pub fn to_char(&self) -> char {
        self.name().as_bytes()[0] as char
    }

    pub fn from_char(c: char) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|color| color.to_char().eq_ignore_ascii_case(&c))
    }

    pub fn from_int(i: i8) -> Option<Color> {
        Color::ALL.into_iter().find(|color| *color as i8 == i)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the full name or its initial, in any case.
impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Color::ALL
            .into_iter()
            .find(|color| {
                color.name().eq_ignore_ascii_case(s)
                    || (s.len() == 1 && color.name()[..1].eq_ignore_ascii_case(s))
            })
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_an_involution() {
        for color in Color::ALL {
            assert_ne!(color.opposite(), color);
            assert_eq!(color.opposite().opposite(), color);
        }
    }

    #[test]
    fn test_char_roundtrip() {
        assert_eq!(Color::from_char(Color::Black.to_char()), Some(Color::Black));
        assert_eq!(Color::White.to_char(), 'W');
        assert_eq!(Color::from_char('w'), Some(Color::White));
        assert_eq!(Color::from_char('.'), None);
    }

    #[test]
    fn test_int_values() {
        assert_eq!(Color::from_int(1), Some(Color::Black));
        assert_eq!(Color::from_int(-1), Some(Color::White));
        assert_eq!(Color::from_int(0), None);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("White".parse::<Color>(), Ok(Color::White));
        assert_eq!(" black ".parse::<Color>(), Ok(Color::Black));
        assert_eq!("b".parse::<Color>(), Ok(Color::Black));
        assert_eq!(
            "red".parse::<Color>(),
            Err(ParseColorError("red".to_string()))
        );
        assert_eq!(
            "bl".parse::<Color>(),
            Err(ParseColorError("bl".to_string()))
        );
    }
}
