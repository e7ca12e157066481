//! Roster - a CSV-backed roster directory
//!
//! Records (name, surname, address, phone, group id) live in one CSV file.
//! The store reads the whole file, changes it in memory and rewrites it; the
//! shell is a numbered menu over the store.

pub mod domain;
pub mod error;
pub mod shell;
pub mod storage;

pub use error::{Result, RosterError};
