//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use xiangqi_core::Side;
use xiangqi_engine::{DEFAULT_BATCH, SearchConfig};

use crate::session::SessionConfig;

/// Side to move, as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SideArg {
    Red,
    Black,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Red => Side::Red,
            SideArg::Black => Side::Black,
        }
    }
}

/// Fixed-depth Xiangqi search.
///
/// With `--position`, searches once and prints `<compact> <score>`.
/// Without it, reads protocol commands from stdin.
#[derive(Parser, Debug)]
#[command(name = "xiangqi", version)]
pub struct Args {
    /// Plies to search
    #[arg(short = 'd', long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..))]
    pub depth: u8,

    /// Position to search: a 180-digit compact board or `startpos`
    #[arg(short = 'p', long)]
    pub position: Option<String>,

    /// Side to move
    #[arg(short = 's', long, value_enum, default_value = "black")]
    pub side: SideArg,

    /// Nodes allocated each time the node pool runs dry
    #[arg(long, default_value_t = DEFAULT_BATCH)]
    pub pool_batch: usize,

    /// File of `<kind> <value>` lines overriding the material values
    #[arg(long)]
    pub piece_values: Option<PathBuf>,

    /// Log every board along the chosen line (needs debug logging)
    #[arg(long, default_value_t = false)]
    pub trace: bool,
}

impl Args {
    /// Session defaults described by these arguments.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            depth: self.depth,
            side: self.side.into(),
            search: SearchConfig {
                pool_batch: self.pool_batch,
                trace_best_line: self.trace,
            },
        }
    }
}
