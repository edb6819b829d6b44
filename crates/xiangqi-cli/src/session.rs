//! Search session: holds the searcher and protocol defaults, runs the line loop.

use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use tracing::{debug, info, warn};
use xiangqi_core::{Board, Side};
use xiangqi_engine::{
    MaterialEvaluator, PieceValues, SearchConfig, SearchResult, Searcher, StandardRules,
};

use crate::command::{Command, SearchRequest, parse_command};
use crate::error::CliError;

/// Defaults a session starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub depth: u8,
    pub side: Side,
    pub search: SearchConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            side: Side::Black,
            search: SearchConfig::default(),
        }
    }
}

/// One searcher plus the protocol state around it.
pub struct Session {
    searcher: Searcher<StandardRules, MaterialEvaluator>,
    depth: u8,
    side: Side,
    last: Option<Board>,
}

impl Session {
    pub fn new(config: SessionConfig, evaluator: MaterialEvaluator) -> Self {
        Self {
            searcher: Searcher::with_parts(config.search, StandardRules, evaluator),
            depth: config.depth,
            side: config.side,
            last: None,
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Board of the most recent successful search.
    pub fn last_board(&self) -> Option<&Board> {
        self.last.as_ref()
    }

    /// Search `board`, falling back to the session defaults for depth and side.
    pub fn search(
        &mut self,
        board: &Board,
        depth: Option<u8>,
        side: Option<Side>,
    ) -> Result<SearchResult, CliError> {
        let depth = depth.unwrap_or(self.depth);
        let side = side.unwrap_or(self.side);
        info!(depth, %side, "searching");
        let result = self.searcher.search(board, side, depth)?;
        self.last = Some(result.board);
        Ok(result)
    }

    /// Read commands from `input` until `quit` or end of input, writing
    /// results to `output`.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error: an undecodable position, a failed
    /// search, or an I/O failure. Mistyped arguments are logged and skipped.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), CliError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            let command = match parse_command(trimmed) {
                Ok(command) => command,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    warn!(error = %e, "command parse error");
                    continue;
                }
            };

            match command {
                Command::Search(SearchRequest { board, depth, side }) => {
                    let result = self.search(&board, depth, side)?;
                    writeln!(output, "{}", format_result(&result))?;
                }
                Command::Depth(depth) => self.depth = depth,
                Command::Side(side) => self.side = side,
                Command::Board => {
                    let board = self.last.unwrap_or_else(Board::starting_position);
                    writeln!(output, "{}", board.pretty())?;
                }
                Command::Quit => break,
                Command::Unknown(name) => {
                    warn!(command = %name, "unknown command ignored");
                }
            }
            output.flush()?;
        }

        info!("session finished");
        Ok(())
    }
}

/// Protocol form of a result: `<compact board> <score>`.
pub fn format_result(result: &SearchResult) -> String {
    format!("{} {}", result.board.to_compact(), result.score)
}

/// Read a piece-value table from `path`.
pub fn load_piece_values(path: &Path) -> Result<PieceValues, CliError> {
    let text = fs::read_to_string(path)?;
    text.parse().map_err(|source| CliError::PieceValues {
        path: path.to_path_buf(),
        source,
    })
}
