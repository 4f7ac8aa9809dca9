//! Command-line interface: argument parsing and non-interactive commands.

pub mod args;
pub mod commands;
