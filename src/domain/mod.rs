//! Domain types for Roster
//!
//! - Record: one directory entry with per-field mutators
//! - Field: the five columns a record is made of
//! - Locale: which header labels a new file is written with

pub mod field;
pub mod record;

pub use field::{Field, Locale};
pub use record::{FieldUpdate, Record, parse_integer};
