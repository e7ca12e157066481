//! Directory store integration tests
//!
//! Exercises the store and the shell together through the public API,
//! against real files in a temporary directory.

use roster::domain::{Field, FieldUpdate, Locale, Record};
use roster::error::{Result, RosterError};
use roster::shell::Shell;
use roster::storage::{CsvStore, DirectoryStore};
use std::fs;
use tempfile::TempDir;

fn sample() -> Record {
    Record::new("Ana", "Gomez", "Calle 1", 3001234567, 2560001)
}

/// Creating then listing yields the created record
#[test]
fn test_create_then_list() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = CsvStore::new(temp_dir.path().join("roster.csv"), Locale::En);

    store.create(&sample())?;
    assert!(store.list()?.contains(&sample()));

    Ok(())
}

/// Listing a missing file is empty and does not create it
#[test]
fn test_list_missing_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("missing.csv");
    let store = CsvStore::new(&path, Locale::En);

    assert!(store.list()?.is_empty());
    assert!(!path.exists());

    Ok(())
}

/// Updates persist across store instances
#[test]
fn test_update_persists_across_instances() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("roster.csv");

    {
        let store = CsvStore::new(&path, Locale::En);
        store.create(&sample())?;
        store.update_by_index(0, "Surname", "Gómez Ruiz")?;
    }

    {
        let store = CsvStore::new(&path, Locale::Es);
        let records = store.list()?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].surname, "Gómez Ruiz");
    }

    Ok(())
}

/// Failed updates leave the file byte-for-byte unchanged
#[test]
fn test_failed_updates_leave_file_unchanged() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = CsvStore::new(temp_dir.path().join("roster.csv"), Locale::En);
    store.create(&sample())?;
    let before = fs::read(store.path())?;

    let failures = [
        store.update_by_index(1, "Name", "X").map(|_| ()),
        store.update_by_index(0, "Email", "X").map(|_| ()),
        store.update_by_index(0, "Phone", "12a").map(|_| ()),
        store
            .update_by_name_pair("Ana", "Perez", &[FieldUpdate::new(Field::Name, "X")])
            .map(|_| ()),
    ];

    assert!(matches!(failures[0], Err(RosterError::IndexOutOfRange { .. })));
    assert!(matches!(failures[1], Err(RosterError::UnknownField(_))));
    assert!(matches!(failures[2], Err(RosterError::NonIntegerValue { .. })));
    assert!(matches!(failures[3], Err(RosterError::RecordNotFound { .. })));
    assert!(failures.iter().all(|r| r.as_ref().is_err_and(|e| e.is_user_error())));
    assert_eq!(fs::read(store.path())?, before);

    Ok(())
}

/// A file written by the Spanish-header tool stays readable and keeps its header
#[test]
fn test_spanish_file_round_trip() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("aprendices.csv");
    fs::write(
        &path,
        "Nombre,Apellido,Dirección,Teléfono,Ficha\nAna,Gomez,\"Calle 5, Apto 2\",3001234567,2560001\n",
    )?;

    let store = CsvStore::new(&path, Locale::En);
    store.create(&Record::new("Luis", "Perez", "Cra 9", 3109876543, 2560002))?;
    store.update_by_name_pair("Ana", "Gomez", &[FieldUpdate::new(Field::GroupId, "2560003")])?;

    let text = fs::read_to_string(&path)?;
    assert_eq!(
        text,
        "Nombre,Apellido,Dirección,Teléfono,Ficha\n\
         Ana,Gomez,\"Calle 5, Apto 2\",3001234567,2560003\n\
         Luis,Perez,Cra 9,3109876543,2560002\n"
    );

    Ok(())
}

/// A full shell session: create, list, update by index, update by name, exit
#[test]
fn test_shell_session() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = CsvStore::new(temp_dir.path().join("roster.csv"), Locale::En);

    let script = [
        "1", "Ana", "Gomez", "Calle 1", "300", "10", "",
        "1", "Luis", "Perez", "Calle 2", "310", "20", "",
        "2", "",
        "3", "1", "0", "Phone", "301", "",
        "3", "2", "Luis", "Perez", "Address", "Calle 3", "", "",
        "4",
    ]
    .join("\n");

    let mut shell = Shell::new(store.clone(), script.as_bytes(), Vec::new());
    shell.run()?;

    assert_eq!(
        store.list()?,
        vec![
            Record::new("Ana", "Gomez", "Calle 1", 301, 10),
            Record::new("Luis", "Perez", "Calle 3", 310, 20),
        ]
    );

    Ok(())
}
