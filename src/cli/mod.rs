//! CLI module for roster - command-line interface and subcommands.
//!
//! With no subcommand the interactive menu is launched; the subcommands
//! run a single directory operation and exit.

pub mod commands;

pub use commands::Cli;
