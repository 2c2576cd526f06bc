//! Interactive play over a line-based reader and a writer.
//!
//! A [`Session`] owns both handles for as long as one game runs; the binary
//! hands it locked stdin/stdout, tests hand it in-memory buffers.

use std::io::{self, BufRead, Write};

use crate::color::Color;
use crate::config::{MatchConfig, Mode};
use crate::error::GameError;
use crate::game::Game;
use crate::outcome::GameOutcome;
use crate::position::Position;
use crate::strategy::{MoveStrategy, RandomStrategy};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("{color} strategy found no move although one exists")]
    NoMoveSelected { color: Color },

    #[error("{color} strategy chose {chosen}, which was rejected")]
    MoveRejected {
        color: Color,
        chosen: Position,
        #[source]
        source: GameError,
    },
}

/// How a session loop ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Finished(GameOutcome),
    /// Input ran out or the player quit before the game was decided.
    Abandoned,
}

/// Who supplies moves for one color.
pub enum Controller {
    Human,
    Computer(Box<dyn MoveStrategy>),
}

impl Controller {
    pub fn is_human(&self) -> bool {
        matches!(self, Controller::Human)
    }
}

pub struct Players {
    pub black: Controller,
    pub white: Controller,
}

impl Players {
    pub fn humans() -> Self {
        Players {
            black: Controller::Human,
            white: Controller::Human,
        }
    }

    pub fn from_config(config: &MatchConfig) -> Self {
        let computer = || {
            let strategy = match config.seed {
                Some(seed) => RandomStrategy::seeded(seed),
                None => RandomStrategy::new(),
            };
            Controller::Computer(Box::new(strategy))
        };

        let controller = |color| {
            if config.mode.is_ai(color) {
                computer()
            } else {
                Controller::Human
            }
        };

        Players {
            black: controller(Color::Black),
            white: controller(Color::White),
        }
    }

    fn for_color(&mut self, color: Color) -> &mut Controller {
        match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        }
    }
}

pub struct Session<R, W> {
    input: R,
    output: W,
    show_hints: bool,
}

enum Reply {
    Line(String),
    Quit,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Session {
            input,
            output,
            show_hints: false,
        }
    }

    pub fn with_hints(mut self, show_hints: bool) -> Self {
        self.show_hints = show_hints;
        self
    }

    /// Releases the handles.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Drives `game` until neither side can move or the human quits.
    ///
    /// Output is flushed on every exit path.
    pub fn run(
        &mut self,
        game: &mut Game,
        players: &mut Players,
    ) -> Result<SessionEnd, SessionError> {
        let result = self.play_loop(game, players);
        self.output.flush()?;
        result
    }

    fn play_loop(
        &mut self,
        game: &mut Game,
        players: &mut Players,
    ) -> Result<SessionEnd, SessionError> {
        loop {
            if let Some(outcome) = game.outcome() {
                writeln!(self.output, "{}", game.board())?;
                writeln!(self.output, "The game is over!")?;
                self.announce(&outcome)?;
                return Ok(SessionEnd::Finished(outcome));
            }

            let color = game.current_turn();
            if game.advance_if_no_move() {
                writeln!(self.output, "{} has no move!", color)?;
                continue;
            }

            writeln!(self.output, "{}", game.board())?;
            match players.for_color(color) {
                Controller::Human => {
                    if !self.human_turn(game)? {
                        return Ok(SessionEnd::Abandoned);
                    }
                }
                Controller::Computer(strategy) => {
                    let pos = strategy
                        .select_move(game.board(), color)
                        .ok_or(SessionError::NoMoveSelected { color })?;
                    game.attempt_move(pos)
                        .map_err(|source| SessionError::MoveRejected {
                            color,
                            chosen: pos,
                            source,
                        })?;
                    writeln!(self.output, "{} has played to {}.", color, pos)?;
                }
            }
        }
    }

    /// Prompts until the side to move plays a legal move. Returns `false`
    /// when the player quits or input ends.
    fn human_turn(&mut self, game: &mut Game) -> Result<bool, SessionError> {
        let color = game.current_turn();

        loop {
            if self.show_hints {
                let hints: Vec<String> = game
                    .legal_moves()
                    .iter()
                    .map(Position::to_string)
                    .collect();
                writeln!(self.output, "Legal moves: {}", hints.join(" "))?;
            }

            let line = match self.ask(&format!("{}, where do you want to move? ", color))? {
                Reply::Line(line) => line,
                Reply::Quit => return Ok(false),
            };

            let pos = match line.parse::<Position>() {
                Ok(pos) => pos,
                Err(_) => {
                    writeln!(self.output, "That doesn't look like a move to me.")?;
                    continue;
                }
            };

            match game.attempt_move(pos) {
                Ok(_) => return Ok(true),
                Err(GameError::OutOfBounds(_)) | Err(GameError::IllegalMove(_)) => {
                    writeln!(self.output, "Invalid move!")?;
                }
                Err(GameError::GameOver) => return Ok(true),
            }
        }
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Reply> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(Reply::Quit);
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            return Ok(Reply::Quit);
        }
        Ok(Reply::Line(line.to_string()))
    }

    fn announce(&mut self, outcome: &GameOutcome) -> io::Result<()> {
        writeln!(self.output, "White had {} pieces.", outcome.white)?;
        writeln!(self.output, "Black had {} pieces.", outcome.black)?;
        if outcome.is_tie() {
            writeln!(self.output, "Tie game; {} takes it.", outcome.winner())
        } else {
            writeln!(self.output, "{} won!", outcome.winner())
        }
    }
}
