//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - list: print the directory
//! - add: append a record
//! - update: set one field of the record at an index
//! - update-by-name: set fields of the first record matching a name pair

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use roster::domain::FieldUpdate;
use roster::error::RosterError;

/// Roster - A CSV-backed roster directory
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory file, overriding the configured one
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Output format for `list`
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListFormat {
    #[default]
    Table,
    Json,
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all records
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = ListFormat::Table)]
        format: ListFormat,
    },

    /// Append a record
    Add {
        name: String,
        surname: String,
        address: String,
        #[arg(allow_negative_numbers = true)]
        phone: i64,
        #[arg(allow_negative_numbers = true)]
        group_id: i64,
    },

    /// Set one field of the record at an index
    Update {
        /// Zero-based record index
        index: usize,

        /// Field name (Name, Surname, Address, Phone, GroupId)
        field: String,

        /// New value
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Set fields of the first record matching a name and surname
    UpdateByName {
        name: String,
        surname: String,

        /// FIELD=VALUE assignment, repeatable
        #[arg(short, long = "set", value_parser = parse_field_update, required = true)]
        set: Vec<FieldUpdate>,
    },
}

fn parse_field_update(s: &str) -> Result<FieldUpdate, RosterError> {
    FieldUpdate::parse_assignment(s)
}
