//! Record fields and header locales
//!
//! A `Field` names one column of the directory file. Column headers come in
//! two locales; both are accepted when reading, and new files are written in
//! the configured one.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::RosterError;

/// One column of a directory record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Field {
    Name,
    Surname,
    Address,
    Phone,
    GroupId,
}

impl Field {
    /// All fields in canonical column order.
    pub const ALL: [Field; 5] = [Field::Name, Field::Surname, Field::Address, Field::Phone, Field::GroupId];

    /// Whether values for this field are coerced to integers.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Field::Phone | Field::GroupId)
    }

    /// Column header for this field in the given locale.
    pub fn label(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, Field::Name) => "Name",
            (Locale::En, Field::Surname) => "Surname",
            (Locale::En, Field::Address) => "Address",
            (Locale::En, Field::Phone) => "Phone",
            (Locale::En, Field::GroupId) => "GroupId",
            (Locale::Es, Field::Name) => "Nombre",
            (Locale::Es, Field::Surname) => "Apellido",
            (Locale::Es, Field::Address) => "Dirección",
            (Locale::Es, Field::Phone) => "Teléfono",
            (Locale::Es, Field::GroupId) => "Ficha",
        }
    }
}

impl FromStr for Field {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" | "nombre" => Ok(Field::Name),
            "surname" | "apellido" => Ok(Field::Surname),
            "address" | "dirección" | "direccion" => Ok(Field::Address),
            "phone" | "teléfono" | "telefono" => Ok(Field::Phone),
            "groupid" | "group-id" | "group_id" | "ficha" => Ok(Field::GroupId),
            _ => Err(RosterError::UnknownField(s.trim().to_string())),
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label(Locale::En))
    }
}

/// Header language for the directory file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    /// Header labels in canonical column order.
    pub fn header(&self) -> Vec<String> {
        Field::ALL.iter().map(|f| f.label(*self).to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_english_labels() {
        assert_eq!("Name".parse::<Field>().unwrap(), Field::Name);
        assert_eq!("surname".parse::<Field>().unwrap(), Field::Surname);
        assert_eq!("GROUPID".parse::<Field>().unwrap(), Field::GroupId);
        assert_eq!("group-id".parse::<Field>().unwrap(), Field::GroupId);
    }

    #[test]
    fn test_parse_spanish_labels() {
        assert_eq!("Dirección".parse::<Field>().unwrap(), Field::Address);
        assert_eq!("Telefono".parse::<Field>().unwrap(), Field::Phone);
        assert_eq!(" Ficha ".parse::<Field>().unwrap(), Field::GroupId);
    }

    #[test]
    fn test_parse_unknown_field() {
        let err = "Email".parse::<Field>().unwrap_err();
        assert!(matches!(err, RosterError::UnknownField(ref f) if f == "Email"));
    }

    #[test]
    fn test_numeric_fields() {
        let numeric: Vec<Field> = Field::ALL.into_iter().filter(Field::is_numeric).collect();
        assert_eq!(numeric, vec![Field::Phone, Field::GroupId]);
    }

    #[test]
    fn test_labels_round_trip() {
        for locale in [Locale::En, Locale::Es] {
            for field in Field::ALL {
                assert_eq!(field.label(locale).parse::<Field>().unwrap(), field);
            }
        }
    }

    #[test]
    fn test_header() {
        assert_eq!(Locale::En.header().join(","), "Name,Surname,Address,Phone,GroupId");
        assert_eq!(Locale::Es.header().join(","), "Nombre,Apellido,Dirección,Teléfono,Ficha");
    }
}
