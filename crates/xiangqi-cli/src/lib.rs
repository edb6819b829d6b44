//! Command-line front end: arguments, line protocol and search session.

pub mod args;
pub mod command;
pub mod error;
pub mod session;

pub use args::{Args, SideArg};
pub use command::{Command, SearchRequest, parse_command, parse_position};
pub use error::CliError;
pub use session::{Session, SessionConfig, format_result, load_piece_values};
