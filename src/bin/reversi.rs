use std::io;
use std::process::ExitCode;

use reversi_engine::config::{Command, MatchConfig, USAGE};
use reversi_engine::game::Game;
use reversi_engine::session::{Players, Session, SessionEnd};

fn main() -> ExitCode {
    let config = match MatchConfig::from_args(std::env::args().skip(1)) {
        Ok(Command::Play(config)) => config,
        Ok(Command::Help) => {
            print!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {}\n\n{}", err, USAGE);
            return ExitCode::from(2);
        }
    };

    let mut game = Game::new();
    let mut players = Players::from_config(&config);

    let end = {
        let mut session =
            Session::new(io::stdin().lock(), io::stdout().lock()).with_hints(config.show_hints);
        session.run(&mut game, &mut players)
    };

    match end {
        Ok(SessionEnd::Finished(_)) => ExitCode::SUCCESS,
        Ok(SessionEnd::Abandoned) => {
            println!("Game abandoned after {} moves.", game.move_count());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
