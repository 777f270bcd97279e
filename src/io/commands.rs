//! Parsing of scripted plane commands
//!
//! Each script line holds one whitespace-separated command. The leading word
//! selects the operation and the remaining tokens are its arguments; tokens
//! beyond those an operation consumes are ignored.

use std::fmt;
use std::str::FromStr;

use crate::analysis::blocks::BlockMode;
use crate::rules::registry::Term;
use crate::spatial::tiles::Coordinate;

/// One scripted operation against the plane
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create or overwrite a tile with a color and intensity (`C x y color i`)
    Color {
        /// Tile to create or overwrite
        coord: Coordinate,
        /// Color label to apply
        color: String,
        /// Intensity to apply
        intensity: i64,
    },
    /// Turn off a tile (`S x y`)
    TurnOff {
        /// Tile to turn off
        coord: Coordinate,
    },
    /// Append a production rule to the registry (`r result k1 c1 ...`)
    AddRule {
        /// Color the rule produces
        result: String,
        /// Neighbor requirements, in declaration order
        terms: Vec<Term>,
    },
    /// Report color and intensity of a lit tile (`? x y`)
    Query {
        /// Tile to inspect
        coord: Coordinate,
    },
    /// Print the rule list in current order (`s`)
    ListRules,
    /// Sum intensities over the block containing a tile (`b x y` / `B x y`)
    BlockSum {
        /// Seed tile of the block
        coord: Coordinate,
        /// Whether the block is color-mixed or homogeneous
        mode: BlockMode,
    },
    /// Apply the first matching rule to one tile (`p x y`)
    Propagate {
        /// Tile to propagate onto
        coord: Coordinate,
    },
    /// Apply rules across a whole block at once (`P x y`)
    PropagateBlock {
        /// Seed tile of the block
        coord: Coordinate,
    },
    /// Stably reorder rules by ascending usage (`o`)
    Reorder,
    /// Minimum-intensity path cost between two tiles (`i x1 y1 x2 y2`)
    PathCost {
        /// Path origin
        start: Coordinate,
        /// Path destination
        end: Coordinate,
    },
    /// Perimeter of the block containing a tile (`m x y`)
    Perimeter {
        /// Seed tile of the block
        coord: Coordinate,
    },
    /// Stop execution (`q`)
    Quit,
}

/// Why a script line could not be turned into a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Leading word is not a known command
    Unrecognized {
        /// The unrecognized leading word
        word: String,
    },
    /// Command is missing a required argument
    MissingArgument {
        /// Command being parsed
        command: &'static str,
        /// Name of the missing argument
        argument: &'static str,
    },
    /// An argument could not be parsed as an integer
    InvalidInteger {
        /// Command being parsed
        command: &'static str,
        /// Name of the offending argument
        argument: &'static str,
        /// Raw token that failed to parse
        value: String,
    },
    /// Tile intensity below zero
    NegativeIntensity {
        /// The rejected intensity
        value: i64,
    },
    /// Rule declared without any terms
    EmptyRule,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecognized { word } => {
                write!(f, "Unsupported command '{word}'")
            }
            Self::MissingArgument { command, argument } => {
                write!(f, "Command '{command}' is missing its {argument} argument")
            }
            Self::InvalidInteger {
                command,
                argument,
                value,
            } => {
                write!(
                    f,
                    "Command '{command}' expects an integer {argument}, got '{value}'"
                )
            }
            Self::NegativeIntensity { value } => {
                write!(f, "Intensity must not be negative, got {value}")
            }
            Self::EmptyRule => {
                write!(f, "Rule must declare at least one term")
            }
        }
    }
}

impl std::error::Error for CommandError {}

fn arg<'a>(
    tokens: &[&'a str],
    index: usize,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, CommandError> {
    tokens
        .get(index)
        .copied()
        .ok_or(CommandError::MissingArgument { command, argument })
}

fn int_arg<T: FromStr>(
    tokens: &[&str],
    index: usize,
    command: &'static str,
    argument: &'static str,
) -> Result<T, CommandError> {
    let raw = arg(tokens, index, command, argument)?;
    raw.parse().map_err(|_e| CommandError::InvalidInteger {
        command,
        argument,
        value: raw.to_owned(),
    })
}

fn coord_args(
    tokens: &[&str],
    index: usize,
    command: &'static str,
) -> Result<Coordinate, CommandError> {
    let x = int_arg(tokens, index, command, "x")?;
    let y = int_arg(tokens, index + 1, command, "y")?;
    Ok(Coordinate::new(x, y))
}

/// Parse one script line into a command
///
/// Blank lines parse to `None`. Negative intensities and rules without terms
/// are rejected here so the plane itself never sees them.
///
/// # Errors
///
/// Returns a [`CommandError`] describing the first problem found in the
/// line: an unknown leading word, a missing argument, or an argument that
/// fails validation.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&keyword) = tokens.first() else {
        return Ok(None);
    };

    let command = match keyword {
        "C" => {
            let coord = coord_args(&tokens, 1, "C")?;
            let color = arg(&tokens, 3, "C", "color")?.to_owned();
            let intensity = int_arg(&tokens, 4, "C", "intensity")?;
            if intensity < 0 {
                return Err(CommandError::NegativeIntensity { value: intensity });
            }
            Command::Color {
                coord,
                color,
                intensity,
            }
        }
        "S" => Command::TurnOff {
            coord: coord_args(&tokens, 1, "S")?,
        },
        "r" => {
            let result = arg(&tokens, 1, "r", "result color")?.to_owned();
            let mut terms = Vec::new();
            let mut index = 2;
            while index < tokens.len() {
                let count = int_arg(&tokens, index, "r", "term count")?;
                let color = arg(&tokens, index + 1, "r", "term color")?.to_owned();
                terms.push(Term::new(count, color));
                index += 2;
            }
            if terms.is_empty() {
                return Err(CommandError::EmptyRule);
            }
            Command::AddRule { result, terms }
        }
        "?" => Command::Query {
            coord: coord_args(&tokens, 1, "?")?,
        },
        "s" => Command::ListRules,
        "b" => Command::BlockSum {
            coord: coord_args(&tokens, 1, "b")?,
            mode: BlockMode::General,
        },
        "B" => Command::BlockSum {
            coord: coord_args(&tokens, 1, "B")?,
            mode: BlockMode::Homogeneous,
        },
        "p" => Command::Propagate {
            coord: coord_args(&tokens, 1, "p")?,
        },
        "P" => Command::PropagateBlock {
            coord: coord_args(&tokens, 1, "P")?,
        },
        "o" => Command::Reorder,
        "i" => {
            let start = coord_args(&tokens, 1, "i")?;
            let end = coord_args(&tokens, 3, "i")?;
            Command::PathCost { start, end }
        }
        "m" => Command::Perimeter {
            coord: coord_args(&tokens, 1, "m")?,
        },
        "q" => Command::Quit,
        _ => {
            return Err(CommandError::Unrecognized {
                word: keyword.to_owned(),
            });
        }
    };
    Ok(Some(command))
}
