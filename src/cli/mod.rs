//! CLI module for tooldir - command-line interface and subcommands.
//!
//! Without a subcommand the TUI is launched; the subcommands expose the same
//! catalog operations for scripting.

pub mod commands;

pub use commands::Cli;
