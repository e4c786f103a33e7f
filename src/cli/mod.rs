//! Command-line interface for versig

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::{handle_verify, run, EXIT_FAILURE, EXIT_OK};
