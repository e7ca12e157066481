//! Directory record and per-field mutators

use serde::{Deserialize, Serialize};

use super::field::Field;
use crate::error::{Result, RosterError};

/// One directory entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub surname: String,
    pub address: String,
    pub phone: i64,
    pub group_id: i64,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        address: impl Into<String>,
        phone: i64,
        group_id: i64,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            address: address.into(),
            phone,
            group_id,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_surname(&mut self, surname: impl Into<String>) {
        self.surname = surname.into();
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    pub fn set_phone(&mut self, phone: i64) {
        self.phone = phone;
    }

    pub fn set_group_id(&mut self, group_id: i64) {
        self.group_id = group_id;
    }

    /// Set a field from raw text, coercing numeric fields to integers.
    ///
    /// On `NonIntegerValue` the record is left untouched.
    pub fn set(&mut self, field: Field, raw: &str) -> Result<()> {
        match field {
            Field::Name => self.set_name(raw),
            Field::Surname => self.set_surname(raw),
            Field::Address => self.set_address(raw),
            Field::Phone => self.set_phone(parse_integer(field, raw)?),
            Field::GroupId => self.set_group_id(parse_integer(field, raw)?),
        }
        Ok(())
    }

    /// Render a field as text, as it is written to the file.
    pub fn get(&self, field: Field) -> String {
        match field {
            Field::Name => self.name.clone(),
            Field::Surname => self.surname.clone(),
            Field::Address => self.address.clone(),
            Field::Phone => self.phone.to_string(),
            Field::GroupId => self.group_id.to_string(),
        }
    }

    /// Whether this record belongs to the given name/surname pair.
    ///
    /// Surrounding whitespace is ignored on both sides.
    pub fn matches_name_pair(&self, name: &str, surname: &str) -> bool {
        self.name.trim() == name.trim() && self.surname.trim() == surname.trim()
    }
}

/// Parse an integer cell or input value for a numeric field.
pub fn parse_integer(field: Field, raw: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|_| RosterError::NonIntegerValue {
        field: field.to_string(),
        value: raw.to_string(),
    })
}

/// A single pending change: which field, and its raw new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    pub field: Field,
    pub value: String,
}

impl FieldUpdate {
    pub fn new(field: Field, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    /// Parse a `FIELD=VALUE` assignment.
    pub fn parse_assignment(s: &str) -> Result<Self> {
        let (field, value) = s
            .split_once('=')
            .ok_or_else(|| RosterError::UnknownField(s.to_string()))?;
        Ok(Self::new(field.parse()?, value))
    }
}
