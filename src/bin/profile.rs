//! Plays seeded random games end to end. Build with `--features hotpath`
//! to get timing for the instrumented engine calls.

use reversi_engine::color::Color;
use reversi_engine::game::Game;
use reversi_engine::strategy::{MoveStrategy, RandomStrategy};

const DEFAULT_GAMES: u64 = 1000;

fn play_one(seed: u64) -> Option<Color> {
    let mut game = Game::new();
    let mut strategy = RandomStrategy::seeded(seed);

    while !game.is_over() {
        if game.advance_if_no_move() {
            continue;
        }
        let pos = strategy.select_move(game.board(), game.current_turn())?;
        game.attempt_move(pos).ok()?;
    }

    game.winner()
}

#[cfg_attr(feature = "hotpath", hotpath::main)]
fn main() {
    let games = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(DEFAULT_GAMES);

    let mut black_wins = 0u64;
    let mut white_wins = 0u64;
    for seed in 0..games {
        match play_one(seed) {
            Some(Color::Black) => black_wins += 1,
            Some(Color::White) => white_wins += 1,
            None => eprintln!("game {} ended early", seed),
        }
    }

    println!(
        "{} games: Black {} (ties included), White {}",
        games, black_wins, white_wins
    );
}
