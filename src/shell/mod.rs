//! Interactive menu shell.
//!
//! Reads choices and field values line by line and drives a `DirectoryStore`.
//! Store errors are shown as messages and never end the loop; end of input
//! does.

pub mod render;

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use log::{debug, error, info};
use std::io::{self, BufRead, Write};

use crate::domain::{Field, FieldUpdate, Locale, Record, parse_integer};
use crate::error::RosterError;
use crate::storage::DirectoryStore;

/// Whether the menu loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Numbered-menu front end over a directory store.
pub struct Shell<S, R, W> {
    store: S,
    input: R,
    output: W,
    locale: Locale,
    clear_screen: bool,
}

impl<S: DirectoryStore, R: BufRead, W: Write> Shell<S, R, W> {
    pub fn new(store: S, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
            locale: Locale::default(),
            clear_screen: false,
        }
    }

    /// Column labels used when rendering the table.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Clear the terminal before every menu redraw.
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        info!("Starting interactive shell");

        loop {
            if self.clear_screen {
                queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
            }
            render::banner(&mut self.output)?;
            render::menu(&mut self.output)?;

            // Invalid choices re-prompt without redrawing, so the message stays visible.
            let choice = loop {
                let Some(choice) = self.ask("Select an option [1/2/3/4]")? else {
                    break None;
                };
                debug!("Menu choice: {:?}", choice);
                match choice.trim() {
                    c @ ("1" | "2" | "3" | "4") => break Some(c.to_string()),
                    _ => render::error(&mut self.output, "Please select one of the available options")?,
                }
            };

            let flow = match choice.as_deref() {
                None => break,
                Some("1") => self.create()?,
                Some("2") => self.list()?,
                Some("3") => self.update()?,
                _ => {
                    writeln!(self.output)?;
                    render::success(&mut self.output, "Goodbye!")?;
                    break;
                }
            };

            if flow == Flow::Exit || self.ask("Press Enter to continue")?.is_none() {
                break;
            }
        }

        self.output.flush()?;
        info!("Interactive shell finished");
        Ok(())
    }

    /// Show a store error. Bad input is expected; anything else is logged too.
    fn report(&mut self, err: &RosterError) -> io::Result<()> {
        if err.is_user_error() {
            debug!("Rejected input: {}", err);
            render::error(&mut self.output, &err.to_string())
        } else {
            error!("Directory file error: {}", err);
            render::error(&mut self.output, &format!("Directory file error: {}", err))
        }
    }

    /// Prompt and read one line. `None` at end of input.
    fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn create(&mut self) -> io::Result<Flow> {
        writeln!(self.output)?;
        render::notice(&mut self.output, "New record")?;

        let Some(name) = self.ask("Name")? else { return Ok(Flow::Exit) };
        let Some(surname) = self.ask("Surname")? else { return Ok(Flow::Exit) };
        let Some(address) = self.ask("Address")? else { return Ok(Flow::Exit) };
        let Some(phone) = self.ask("Phone")? else { return Ok(Flow::Exit) };
        let Some(group_id) = self.ask("GroupId")? else { return Ok(Flow::Exit) };

        let (Ok(phone), Ok(group_id)) = (
            parse_integer(Field::Phone, &phone),
            parse_integer(Field::GroupId, &group_id),
        ) else {
            render::error(&mut self.output, "Phone and group id must be numbers")?;
            return Ok(Flow::Continue);
        };

        let record = Record::new(name, surname, address, phone, group_id);
        match self.store.create(&record) {
            Ok(()) => render::success(
                &mut self.output,
                &format!("Record {} {} added", record.name, record.surname),
            )?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    /// Show the table, returning the number of records shown.
    fn show_table(&mut self) -> io::Result<Option<usize>> {
        writeln!(self.output)?;
        match self.store.list() {
            Ok(records) => {
                render::table(&mut self.output, &records, self.locale)?;
                Ok(Some(records.len()))
            }
            Err(e) => {
                self.report(&e)?;
                Ok(None)
            }
        }
    }

    fn list(&mut self) -> io::Result<Flow> {
        self.show_table()?;
        Ok(Flow::Continue)
    }

    fn update(&mut self) -> io::Result<Flow> {
        match self.show_table()? {
            None | Some(0) => return Ok(Flow::Continue),
            Some(_) => {}
        }
        writeln!(self.output)?;

        let Some(mode) = self.ask("Update by [1] index or [2] name and surname")? else {
            return Ok(Flow::Exit);
        };
        match mode.trim() {
            "1" => self.update_by_index(),
            "2" => self.update_by_name_pair(),
            _ => {
                render::error(&mut self.output, "Invalid input")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn update_by_index(&mut self) -> io::Result<Flow> {
        let Some(index) = self.ask("Index of the record to update")? else { return Ok(Flow::Exit) };
        let Ok(index) = index.trim().parse::<usize>() else {
            render::error(&mut self.output, &format!("Index {} not found", index.trim()))?;
            return Ok(Flow::Continue);
        };

        let prompt = format!("Field to update ({})", field_choices(self.locale));
        let Some(field) = self.ask(&prompt)? else { return Ok(Flow::Exit) };
        let Some(value) = self.ask(&format!("New value for {}", field.trim()))? else {
            return Ok(Flow::Exit);
        };

        match self.store.update_by_index(index, &field, &value) {
            Ok(_) => render::success(&mut self.output, "Record updated")?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn update_by_name_pair(&mut self) -> io::Result<Flow> {
        let Some(name) = self.ask("Name")? else { return Ok(Flow::Exit) };
        let Some(surname) = self.ask("Surname")? else { return Ok(Flow::Exit) };

        let mut updates = Vec::new();
        let prompt = format!("Field to update ({}, blank to finish)", field_choices(self.locale));
        loop {
            let Some(field) = self.ask(&prompt)? else { return Ok(Flow::Exit) };
            if field.trim().is_empty() {
                break;
            }
            let field: Field = match field.parse() {
                Ok(field) => field,
                Err(e) => {
                    self.report(&e)?;
                    continue;
                }
            };
            let Some(value) = self.ask(&format!("New value for {}", field.label(self.locale)))? else {
                return Ok(Flow::Exit);
            };
            updates.push(FieldUpdate::new(field, value));
        }

        if updates.is_empty() {
            render::notice(&mut self.output, "Nothing to update")?;
            return Ok(Flow::Continue);
        }

        match self.store.update_by_name_pair(&name, &surname, &updates) {
            Ok(index) => render::success(&mut self.output, &format!("Record {} updated", index))?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }
}

fn field_choices(locale: Locale) -> String {
    Field::ALL
        .iter()
        .map(|f| f.label(locale))
        .collect::<Vec<_>>()
        .join("/")
}
