//! Line-protocol command parsing.
//!
//! ```text
//! search <compact|startpos> [depth N] [side red|black]
//! depth N
//! side red|black
//! board
//! quit
//! ```

use xiangqi_core::{Board, Side};

use crate::error::CliError;

/// Arguments of a `search` command. Missing fields fall back to the session
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub board: Board,
    pub depth: Option<u8>,
    pub side: Option<Side>,
}

/// A parsed protocol command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `search` -- search a position and print the result.
    Search(SearchRequest),
    /// `depth` -- change the default depth.
    Depth(u8),
    /// `side` -- change the default side to move.
    Side(Side),
    /// `board` -- print the last result board.
    Board,
    /// `quit` -- leave the loop.
    Quit,
    /// Unrecognized command (logged and ignored).
    Unknown(String),
}

/// Parse a single input line into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, rest)) = tokens.split_first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match head {
        "search" => parse_search(rest),
        "depth" => Ok(Command::Depth(parse_depth(expect_arg(rest, "depth")?)?)),
        "side" => Ok(Command::Side(parse_side(expect_arg(rest, "side")?)?)),
        "board" => Ok(Command::Board),
        "quit" => Ok(Command::Quit),
        _ => Ok(Command::Unknown(head.to_string())),
    }
}

/// Decode `startpos` or a compact board string.
pub fn parse_position(token: &str) -> Result<Board, CliError> {
    if token == "startpos" {
        return Ok(Board::starting_position());
    }
    Ok(token.parse()?)
}

/// Parse `red`/`black` (or `r`/`b`), case-insensitively.
pub fn parse_side(token: &str) -> Result<Side, CliError> {
    Side::from_name(&token.to_ascii_lowercase()).ok_or_else(|| CliError::InvalidSide {
        value: token.to_string(),
    })
}

/// Parse a search depth; zero is rejected.
pub fn parse_depth(token: &str) -> Result<u8, CliError> {
    match token.parse::<u8>() {
        Ok(depth) if depth > 0 => Ok(depth),
        _ => Err(CliError::InvalidDepth {
            value: token.to_string(),
        }),
    }
}

fn parse_search(tokens: &[&str]) -> Result<Command, CliError> {
    let board = parse_position(expect_arg(tokens, "search")?)?;
    let mut request = SearchRequest {
        board,
        depth: None,
        side: None,
    };

    let mut i = 1;
    while i < tokens.len() {
        match tokens[i] {
            "depth" => {
                request.depth = Some(parse_depth(expect_arg(&tokens[i + 1..], "depth")?)?);
                i += 2;
            }
            "side" => {
                request.side = Some(parse_side(expect_arg(&tokens[i + 1..], "side")?)?);
                i += 2;
            }
            _ => i += 1,
        }
    }

    Ok(Command::Search(request))
}

fn expect_arg<'a>(tokens: &[&'a str], param: &str) -> Result<&'a str, CliError> {
    tokens.first().copied().ok_or_else(|| CliError::MissingValue {
        param: param.to_string(),
    })
}
