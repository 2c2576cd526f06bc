use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::Board;
use crate::color::Color;
use crate::position::Position;

/// Picks a placement for `color` on `board`.
///
/// Implementations return `None` only when `color` has no legal move.
pub trait MoveStrategy {
    fn select_move(&mut self, board: &Board, color: Color) -> Option<Position>;
}

/// Always plays the first legal move in row-major order.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstLegalStrategy;

impl MoveStrategy for FirstLegalStrategy {
    fn select_move(&mut self, board: &Board, color: Color) -> Option<Position> {
        board.legal_moves(color).first().copied()
    }
}

/// Uniformly random choice among the legal moves.
#[derive(Debug)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        Self::seeded(rand::random())
    }

    /// Reproducible move sequence for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        RandomStrategy {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveStrategy for RandomStrategy {
    fn select_move(&mut self, board: &Board, color: Color) -> Option<Position> {
        board.legal_moves(color).choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_legal_is_row_major_first() {
        let board = Board::new();
        assert_eq!(
            FirstLegalStrategy.select_move(&board, Color::Black),
            Some(Position::new(2, 3))
        );
    }

    #[test]
    fn test_random_only_picks_legal_moves() {
        let board = Board::new();
        let mut strategy = RandomStrategy::seeded(7);

        for _ in 0..50 {
            let mv = strategy.select_move(&board, Color::White).unwrap();
            assert!(board.is_legal_move(mv, Color::White));
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = Board::new();
        let mut a = RandomStrategy::seeded(42);
        let mut b = RandomStrategy::seeded(42);

        for _ in 0..20 {
            assert_eq!(
                a.select_move(&board, Color::Black),
                b.select_move(&board, Color::Black)
            );
        }
    }

    #[test]
    fn test_no_move_yields_none() {
        let board: Board = "
            B W . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            "
        .parse()
        .unwrap();

        assert_eq!(
            RandomStrategy::seeded(1).select_move(&board, Color::White),
            None
        );
        assert_eq!(FirstLegalStrategy.select_move(&board, Color::White), None);
    }
}
