//! CSV-backed directory store.
//!
//! Every operation reads the whole file, applies its change in memory and
//! rewrites the file. There is no locking; the last writer wins.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::csv;
use super::traits::DirectoryStore;
use crate::domain::{Field, FieldUpdate, Locale, Record};
use crate::error::{Result, RosterError};

/// Column order and header labels of a directory file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Layout {
    columns: Vec<Field>,
    labels: Vec<String>,
    bom: bool,
}

impl Layout {
    fn for_locale(locale: Locale) -> Self {
        Self {
            columns: Field::ALL.to_vec(),
            labels: locale.header(),
            bom: false,
        }
    }

    /// Map header labels onto fields. Labels are kept verbatim for rewriting.
    fn from_header(row: &csv::Row, bom: bool) -> Result<Self> {
        let mut columns = Vec::with_capacity(row.cells.len());
        let mut seen = HashSet::new();

        for label in &row.cells {
            let field: Field = label.parse().map_err(|_| RosterError::Malformed {
                line: row.line,
                reason: format!("unknown column '{}'", label.trim()),
            })?;
            if !seen.insert(field) {
                return Err(RosterError::Malformed {
                    line: row.line,
                    reason: format!("duplicate column '{}'", label.trim()),
                });
            }
            columns.push(field);
        }

        if let Some(missing) = Field::ALL.iter().find(|f| !seen.contains(*f)) {
            return Err(RosterError::Malformed {
                line: row.line,
                reason: format!("missing column '{}'", missing),
            });
        }

        Ok(Self {
            columns,
            labels: row.cells.clone(),
            bom,
        })
    }

    fn decode(&self, row: &csv::Row) -> Result<Record> {
        if row.cells.len() != self.columns.len() {
            return Err(RosterError::Malformed {
                line: row.line,
                reason: format!("expected {} columns, found {}", self.columns.len(), row.cells.len()),
            });
        }

        let mut record = Record::default();
        for (field, cell) in self.columns.iter().zip(&row.cells) {
            record.set(*field, cell).map_err(|e| RosterError::Malformed {
                line: row.line,
                reason: e.to_string(),
            })?;
        }
        Ok(record)
    }

    fn encode(&self, record: &Record) -> String {
        let cells: Vec<String> = self.columns.iter().map(|f| record.get(*f)).collect();
        csv::encode_row(&cells)
    }
}

/// In-memory image of the directory file.
#[derive(Debug)]
struct Table {
    layout: Layout,
    records: Vec<Record>,
}

/// Directory store over a single CSV file.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
    locale: Locale,
}

impl CsvStore {
    /// Create a store for `path`. New files get a header in `locale`.
    pub fn new(path: impl AsRef<Path>, locale: Locale) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            locale,
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the backing file. A missing or empty file is an empty table.
    fn load(&self) -> Result<Table> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("{} does not exist, treating as empty", self.path.display());
                String::new()
            }
            Err(e) => return Err(e.into()),
        };

        let rows = csv::parse(&text)?;
        let mut rows = rows.iter();
        let layout = match rows.next() {
            Some(header) => Layout::from_header(header, text.starts_with('\u{feff}'))?,
            None => Layout::for_locale(self.locale),
        };
        let records = rows.map(|row| layout.decode(row)).collect::<Result<Vec<_>>>()?;

        Ok(Table { layout, records })
    }

    /// Rewrite the backing file from the table.
    fn save(&self, table: &Table) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut out = String::new();
        if table.layout.bom {
            out.push('\u{feff}');
        }
        out.push_str(&csv::encode_row(&table.layout.labels));
        out.push('\n');
        for record in &table.records {
            out.push_str(&table.layout.encode(record));
            out.push('\n');
        }

        fs::write(&self.path, out)?;
        log::debug!("Wrote {} records to {}", table.records.len(), self.path.display());
        Ok(())
    }
}

impl DirectoryStore for CsvStore {
    fn create(&self, record: &Record) -> Result<()> {
        let mut table = self.load()?;
        table.records.push(record.clone());
        self.save(&table)?;
        log::info!("Added record {} {}", record.name, record.surname);
        Ok(())
    }

    fn list(&self) -> Result<Vec<Record>> {
        Ok(self.load()?.records)
    }

    fn update_by_index(&self, index: usize, field: &str, value: &str) -> Result<Record> {
        let mut table = self.load()?;
        let len = table.records.len();
        let record = table
            .records
            .get_mut(index)
            .ok_or(RosterError::IndexOutOfRange { index, len })?;

        let field: Field = field.parse()?;
        record.set(field, value)?;
        let updated = record.clone();

        self.save(&table)?;
        log::info!("Updated {} of record {}", field, index);
        Ok(updated)
    }

    fn update_by_name_pair(&self, name: &str, surname: &str, updates: &[FieldUpdate]) -> Result<usize> {
        let mut table = self.load()?;
        let index = table
            .records
            .iter()
            .position(|r| r.matches_name_pair(name, surname))
            .ok_or_else(|| RosterError::RecordNotFound {
                name: name.trim().to_string(),
                surname: surname.trim().to_string(),
            })?;

        // Apply to a copy so a bad value leaves the table untouched.
        let mut record = table.records[index].clone();
        for update in updates {
            record.set(update.field, &update.value)?;
        }
        table.records[index] = record;

        self.save(&table)?;
        log::info!("Updated {} field(s) of record {}", updates.len(), index);
        Ok(index)
    }
}
