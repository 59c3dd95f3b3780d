//! Protocol command parsing.

use std::str::FromStr;

use twenty48_core::{exponent_of, Board, Direction};

use crate::error::PlayError;

/// A session setting changed by `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    /// `set depth <n>` -- search depth in player plies.
    Depth(u8),
    /// `set seed <n>` -- seed for the next `new` without an explicit seed.
    Seed(u64),
    /// `set evil <on|off>` -- let the worst-tile search place new tiles.
    Evil(bool),
}

/// A parsed protocol command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `new [seed]` -- start a game with two random tiles.
    New(Option<u64>),
    /// `board <16 values>` -- replace the board.
    SetBoard(Board),
    /// `add <position> <value>` -- place a tile in an empty cell.
    Add {
        /// Cell index, 0 to 15 in row-major order.
        position: usize,
        /// Exponent of the tile to place.
        exponent: u8,
    },
    /// `move <dir>` or a bare direction -- play a slide.
    Move(Direction),
    /// `best` -- search and play the best slide.
    Best,
    /// `worst` -- search and place the worst tile.
    Worst,
    /// `auto [n]` -- play best moves until the game ends or `n` moves.
    Auto(Option<u32>),
    /// `eval` -- print the heuristic value of the board.
    Eval,
    /// `show` -- print the board, score and status.
    Show,
    /// `set <name> <value>` -- change a setting.
    Set(Setting),
    /// `quit` -- leave the session.
    Quit,
    /// Unrecognized command (ignored).
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, PlayError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "new" => Ok(Command::New(parse_optional(tokens.get(1), "seed")?)),
        "board" => parse_board(&tokens[1..]),
        "add" => parse_add(&tokens[1..]),
        "move" => {
            let token = required(tokens.get(1), "move")?;
            Ok(Command::Move(token.parse()?))
        }
        "up" | "left" | "down" | "right" => Ok(Command::Move(tokens[0].parse()?)),
        "best" => Ok(Command::Best),
        "worst" => Ok(Command::Worst),
        "auto" => Ok(Command::Auto(parse_optional(tokens.get(1), "move count")?)),
        "eval" => Ok(Command::Eval),
        "show" => Ok(Command::Show),
        "set" => parse_set(&tokens[1..]),
        "quit" => Ok(Command::Quit),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

/// Parse `board` arguments: 16 displayed tile values.
fn parse_board(tokens: &[&str]) -> Result<Command, PlayError> {
    if tokens.is_empty() {
        return Err(PlayError::MissingArgument {
            command: "board".to_string(),
        });
    }
    let board: Board = tokens.join(" ").parse()?;
    Ok(Command::SetBoard(board))
}

/// Parse `add` arguments: a cell index and a displayed tile value.
///
/// The cell range is checked when the tile is placed.
fn parse_add(tokens: &[&str]) -> Result<Command, PlayError> {
    let position = parse_value(tokens.first(), "add", "position")?;
    let value: u32 = parse_value(tokens.get(1), "add", "tile value")?;
    let exponent = exponent_of(value)?;
    if exponent == 0 {
        return Err(PlayError::InvalidArgument {
            param: "tile value".to_string(),
            value: value.to_string(),
        });
    }
    Ok(Command::Add { position, exponent })
}

/// Parse `set` arguments: a setting name and its value.
fn parse_set(tokens: &[&str]) -> Result<Command, PlayError> {
    let name = required(tokens.first(), "set")?;
    let setting = match name {
        "depth" => Setting::Depth(parse_value(tokens.get(1), "set depth", "depth")?),
        "seed" => Setting::Seed(parse_value(tokens.get(1), "set seed", "seed")?),
        "evil" => {
            let value = required(tokens.get(1), "set evil")?;
            match value {
                "on" | "true" | "1" => Setting::Evil(true),
                "off" | "false" | "0" => Setting::Evil(false),
                _ => {
                    return Err(PlayError::InvalidArgument {
                        param: "evil".to_string(),
                        value: value.to_string(),
                    });
                }
            }
        }
        _ => {
            return Err(PlayError::UnknownSetting {
                name: name.to_string(),
            });
        }
    };
    Ok(Command::Set(setting))
}

fn required<'a>(token: Option<&&'a str>, command: &str) -> Result<&'a str, PlayError> {
    token.copied().ok_or_else(|| PlayError::MissingArgument {
        command: command.to_string(),
    })
}

/// Parse a required numeric argument.
fn parse_value<T: FromStr>(token: Option<&&str>, command: &str, param: &str) -> Result<T, PlayError> {
    let value = required(token, command)?;
    value.parse().map_err(|_| PlayError::InvalidArgument {
        param: param.to_string(),
        value: value.to_string(),
    })
}

/// Parse an argument that may be left out.
fn parse_optional<T: FromStr>(token: Option<&&str>, param: &str) -> Result<Option<T>, PlayError> {
    token
        .map(|value| {
            value.parse().map_err(|_| PlayError::InvalidArgument {
                param: param.to_string(),
                value: value.to_string(),
            })
        })
        .transpose()
}
