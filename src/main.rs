use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level, info};

use xiangqi_cli::{Args, Session, format_result, load_piece_values, parse_position};
use xiangqi_engine::{MaterialEvaluator, PieceValues};

fn main() -> Result<()> {
    let args = Args::parse();
    // Best-line boards are logged at debug level.
    let level = if args.trace { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();
    info!(depth = args.depth, side = ?args.side, "xiangqi starting");

    let values = match &args.piece_values {
        Some(path) => load_piece_values(path)
            .with_context(|| format!("loading piece values from {}", path.display()))?,
        None => PieceValues::default(),
    };
    let mut session = Session::new(args.session_config(), MaterialEvaluator::new(values));

    match &args.position {
        Some(position) => {
            let board = parse_position(position).context("parsing --position")?;
            let result = session.search(&board, None, None).context("search failed")?;
            println!("{}", format_result(&result));
        }
        None => {
            let stdin = io::stdin();
            session
                .run(stdin.lock(), io::stdout().lock())
                .context("line protocol aborted")?;
        }
    }

    Ok(())
}
