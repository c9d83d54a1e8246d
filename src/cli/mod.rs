//! CLI argument parsing and command dispatch.

pub mod activity;
pub mod args;
pub mod book;

pub use args::{ActivityArgs, BookCommand, Cli, Commands, OutputFormat};
