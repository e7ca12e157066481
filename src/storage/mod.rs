//! Storage layer for Roster - a single CSV file read and rewritten per operation.

pub mod csv;
mod csv_store;
mod traits;

pub use csv_store::CsvStore;
pub use traits::DirectoryStore;
