use reversi_engine::board::{Board, Cell};
use reversi_engine::color::Color;
use reversi_engine::game::Game;
use reversi_engine::r#move::Move;
use reversi_engine::strategy::{MoveStrategy, RandomStrategy};

/// Plays a full seeded game, checking board invariants after every step.
fn checked_playout(seed: u64) -> Game {
    let mut game = Game::new();
    let mut strategy = RandomStrategy::seeded(seed);

    while !game.is_over() {
        if game.advance_if_no_move() {
            continue;
        }

        let color = game.current_turn();
        let before = *game.board();
        let moves = game.legal_moves();
        assert_eq!(moves, game.legal_moves());

        let pos = strategy.select_move(game.board(), color).unwrap();
        assert!(moves.contains(&pos));

        let flipped = game.attempt_move(pos).unwrap();
        let after = game.board();

        assert!(!flipped.is_empty());
        assert_eq!(after.occupied_count(), before.occupied_count() + 1);
        assert_eq!(
            after.piece_count(color),
            before.piece_count(color) + flipped.len() + 1
        );
        assert_eq!(
            after.piece_count(color.opposite()),
            before.piece_count(color.opposite()) - flipped.len()
        );

        for (p, cell) in before.cells() {
            if let Cell::Occupied(_) = cell {
                assert_ne!(after.get_cell(p).unwrap(), Cell::Empty);
            }
        }
        assert_eq!(game.current_turn(), color.opposite());
    }

    game
}

#[test]
fn random_games_respect_invariants() {
    for seed in 0..25 {
        let game = checked_playout(seed);
        let outcome = game.outcome().unwrap();
        let board = game.board();

        assert_eq!(outcome.black, board.piece_count(Color::Black));
        assert_eq!(outcome.white, board.piece_count(Color::White));
        assert!(outcome.black + outcome.white <= 64);
        assert_eq!(game.winner(), Some(outcome.winner()));
    }
}

#[test]
fn history_matches_placements() {
    let game = checked_playout(11);
    let placements = game.move_history().iter().filter(|m| !m.is_pass()).count();

    assert_eq!(game.board().occupied_count(), 4 + placements);
    assert!(matches!(
        game.move_history().first(),
        Some(Move::Place {
            color: Color::Black,
            ..
        })
    ));
}

#[test]
fn legality_never_allows_occupied_squares() {
    let game = checked_playout(3);
    let board: &Board = game.board();

    for (p, cell) in board.cells() {
        if !cell.is_empty() {
            assert!(!board.is_legal_move(p, Color::Black));
            assert!(!board.is_legal_move(p, Color::White));
        }
    }
}
