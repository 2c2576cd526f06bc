use crate::color::Color;
use crate::error::ConfigError;

pub const USAGE: &str = "\
Usage: reversi [OPTIONS]

Options:
  --ai                 play against the computer (it takes White)
  --ai-color <COLOR>   play against the computer, which takes COLOR (black|white)
  --seed <N>           seed the computer's random move choice
  --hints              list legal moves before each prompt
  -h, --help           print this help
";

/// Who controls each side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    HumanVsHuman,
    HumanVsAi {
        ai: Color,
    },
}

impl Mode {
    pub fn is_ai(&self, color: Color) -> bool {
        matches!(self, Mode::HumanVsAi { ai } if *ai == color)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct MatchConfig {
    pub mode: Mode,
    pub seed: Option<u64>,
    pub show_hints: bool,
}

/// Result of reading the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Play(MatchConfig),
    Help,
}

impl MatchConfig {
    /// Parses arguments, excluding the program name.
    pub fn from_args<I, S>(args: I) -> Result<Command, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = MatchConfig::default();
        let mut args = args.into_iter().map(Into::<String>::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "--ai" => config.mode = Mode::HumanVsAi { ai: Color::White },
                "--ai-color" => {
                    let ai = next_value(&mut args, &arg)?
                        .parse::<Color>()
                        .map_err(|source| ConfigError::InvalidColor {
                            flag: arg.clone(),
                            source,
                        })?;
                    config.mode = Mode::HumanVsAi { ai };
                }
                "--seed" => {
                    let value = next_value(&mut args, &arg)?;
                    let seed = value
                        .parse::<u64>()
                        .map_err(|_| ConfigError::InvalidValue {
                            flag: arg.clone(),
                            value: value.clone(),
                        })?;
                    config.seed = Some(seed);
                }
                "--hints" => config.show_hints = true,
                _ => return Err(ConfigError::UnknownArgument(arg)),
            }
        }

        Ok(Command::Play(config))
    }
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, ConfigError> {
    args.next()
        .ok_or_else(|| ConfigError::MissingValue(flag.to_string()))
}
