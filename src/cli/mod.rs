//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod repl;

pub use commands::{Cli, Command};
pub use repl::Repl;
