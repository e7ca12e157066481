//! Storage trait for the directory.

use crate::domain::{FieldUpdate, Record};
use crate::error::Result;

/// Persistence and lookup over an ordered list of records.
///
/// Every failing operation leaves the backing store unchanged.
pub trait DirectoryStore {
    /// Append a record, creating the backing store if needed.
    fn create(&self, record: &Record) -> Result<()>;

    /// All records in insertion order. A missing store is empty.
    fn list(&self) -> Result<Vec<Record>>;

    /// The record at `index`.
    fn get(&self, index: usize) -> Result<Record> {
        let records = self.list()?;
        let len = records.len();
        records
            .into_iter()
            .nth(index)
            .ok_or(crate::error::RosterError::IndexOutOfRange { index, len })
    }

    /// Set one field of the record at `index`, returning the updated record.
    fn update_by_index(&self, index: usize, field: &str, value: &str) -> Result<Record>;

    /// Apply `updates` to the first record matching `name` and `surname`,
    /// returning its index.
    fn update_by_name_pair(&self, name: &str, surname: &str, updates: &[FieldUpdate]) -> Result<usize>;
}
