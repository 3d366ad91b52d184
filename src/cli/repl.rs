//! Interactive prompt loop

use crate::application::Session;
use crate::cli::commands::Command;
use crate::cli::output;
use crate::domain::validation;
use crate::domain::{Birthday, Contact, ContactUpdate, Email, Phone};
use crate::error::{AssistantError, Result};
use crate::infrastructure::Store;
use std::io::{BufRead, Write};
use tracing::debug;

const DEFAULT_BIRTHDAY_WINDOW: i64 = 7;

/// Answer that clears an optional field while editing
const CLEAR: &str = "-";

/// Reads commands from `input`, drives the session's books and writes
/// results to `output` until `exit`/`close` or end of input.
pub struct Repl<'a, R, W, S: Store> {
    input: R,
    output: W,
    session: &'a mut Session<S>,
    prefill: Option<String>,
}

impl<'a, R: BufRead, W: Write, S: Store> Repl<'a, R, W, S> {
    pub fn new(input: R, output: W, session: &'a mut Session<S>) -> Self {
        Repl {
            input,
            output,
            session,
            prefill: None,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Welcome to the assistant bot! Type 'commands' to see what I can do."
        )?;

        while let Some(line) = self.read_line(">>> ")? {
            if line.is_empty() {
                continue;
            }

            let Some((command, rest)) = Command::parse(&line) else {
                writeln!(
                    self.output,
                    "Unknown command. Type 'commands' to see the list."
                )?;
                continue;
            };
            debug!(?command, "dispatching command");

            if command == Command::Exit {
                break;
            }

            self.prefill = Some(rest.to_string()).filter(|r| !r.is_empty());
            let result = self.dispatch(command);
            self.prefill = None;

            match result {
                Ok(()) => {}
                Err(AssistantError::Io(e)) => return Err(AssistantError::Io(e)),
                Err(e) => writeln!(self.output, "{}", e.display_with_suggestions())?,
            }
        }

        writeln!(self.output, "Good bye!")?;
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> Result<()> {
        match command {
            Command::AddContact => self.add_contact(),
            Command::SearchContact => self.search_contact(),
            Command::EditContact => self.edit_contact(),
            Command::DeleteContact => self.delete_contact(),
            Command::ShowContacts => {
                let all: Vec<&Contact> = self.session.contacts.iter().collect();
                if all.is_empty() {
                    writeln!(self.output, "Address book is empty.")?;
                } else {
                    write!(self.output, "{}", output::format_contact_table(&all))?;
                }
                Ok(())
            }
            Command::ShowBirthday => self.show_birthday(),
            Command::Birthdays => self.birthdays(),
            Command::AddNote => self.add_note(),
            Command::SearchNote => self.search_note(),
            Command::EditNote => self.edit_note(),
            Command::DeleteNote => self.delete_note(),
            Command::ShowNotes => {
                let all: Vec<_> = self.session.notes.iter().collect();
                if all.is_empty() {
                    writeln!(self.output, "No notes yet.")?;
                } else {
                    write!(self.output, "{}", output::format_note_list(&all))?;
                    let tags = self.session.notes.tags();
                    if !tags.is_empty() {
                        write!(self.output, "{}", output::format_tag_list(&tags))?;
                    }
                }
                Ok(())
            }
            Command::Help => {
                write!(self.output, "{}", Command::help_text())?;
                Ok(())
            }
            Command::Exit => Ok(()),
        }
    }

    /// Prompt for one line; `None` at end of input
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        if let Some(answer) = self.prefill.take() {
            return Ok(Some(answer));
        }

        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt until `parse` accepts the answer; validation errors are shown and retried
    fn ask<T>(&mut self, prompt: &str, parse: impl Fn(&str) -> Result<T>) -> Result<Option<T>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) if e.is_validation() => {
                    writeln!(self.output, "{}", e.display_with_suggestions())?
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn ask_required(&mut self, prompt: &str, field: &str) -> Result<Option<String>> {
        self.ask(prompt, |s| validation::non_blank(s, field))
    }

    fn add_contact(&mut self) -> Result<()> {
        let Some(name) = self.ask_required("Name: ", "name")? else {
            return Ok(());
        };
        if let Some(existing) = self.session.contacts.find(&name) {
            return Err(AssistantError::DuplicateContact(existing.name.clone()));
        }
        let Some(phone) = self.ask("Phone: ", Phone::parse)? else {
            return Ok(());
        };
        let Some(email) = self.ask("Email (optional): ", |s| optional(s, Email::parse))? else {
            return Ok(());
        };
        let Some(address) = self.ask("Address (optional): ", |s| optional(s, |a| Ok(a.to_string())))?
        else {
            return Ok(());
        };
        let Some(birthday) =
            self.ask("Birthday DD.MM.YYYY (optional): ", |s| optional(s, Birthday::parse))?
        else {
            return Ok(());
        };

        let contact = Contact {
            email,
            address,
            birthday,
            ..Contact::new(&name, phone)?
        };
        self.session.contacts.add(contact)?;
        writeln!(self.output, "Contact added.")?;
        Ok(())
    }

    fn search_contact(&mut self) -> Result<()> {
        let Some(query) = self.read_line("Search: ")? else {
            return Ok(());
        };
        let found = self.session.contacts.search(&query);
        write!(self.output, "{}", output::format_contact_table(&found))?;
        if found.is_empty() {
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn edit_contact(&mut self) -> Result<()> {
        let Some(name) = self.ask_required("Contact name: ", "name")? else {
            return Ok(());
        };
        let Some(current) = self.session.contacts.find(&name) else {
            return Err(AssistantError::ContactNotFound(name));
        };
        write!(self.output, "{}", output::format_contact(current))?;
        writeln!(
            self.output,
            "Leave blank to keep a value, enter '{}' to clear an optional one.",
            CLEAR
        )?;

        let Some(new_name) = self.ask("New name: ", |s| Ok(keep_or(s)))? else {
            return Ok(());
        };
        let Some(phone) = self.ask("New phone: ", |s| optional(s, Phone::parse))? else {
            return Ok(());
        };
        let Some(email) = self.ask("New email: ", |s| edit_optional(s, Email::parse))? else {
            return Ok(());
        };
        let Some(address) = self.ask("New address: ", |s| edit_optional(s, |a| Ok(a.to_string())))?
        else {
            return Ok(());
        };
        let Some(birthday) = self.ask("New birthday DD.MM.YYYY: ", |s| {
            edit_optional(s, Birthday::parse)
        })?
        else {
            return Ok(());
        };

        let update = ContactUpdate {
            name: new_name,
            phone,
            email,
            address,
            birthday,
        };
        if update.is_empty() {
            writeln!(self.output, "Nothing to change.")?;
            return Ok(());
        }

        self.session.contacts.edit(&name, update)?;
        writeln!(self.output, "Contact updated.")?;
        Ok(())
    }

    fn delete_contact(&mut self) -> Result<()> {
        let Some(name) = self.ask_required("Contact name: ", "name")? else {
            return Ok(());
        };
        match self.session.contacts.delete(&name) {
            Some(removed) => writeln!(self.output, "Contact deleted: {}", removed.name)?,
            None => return Err(AssistantError::ContactNotFound(name)),
        }
        Ok(())
    }

    fn show_birthday(&mut self) -> Result<()> {
        let Some(name) = self.ask_required("Contact name: ", "name")? else {
            return Ok(());
        };
        let Some(contact) = self.session.contacts.find(&name) else {
            return Err(AssistantError::ContactNotFound(name));
        };
        match contact.birthday {
            Some(birthday) => {
                let days = self.session.contacts.days_to_birthday(&birthday);
                writeln!(
                    self.output,
                    "{}'s birthday is on {} ({})",
                    contact.name,
                    birthday,
                    match days {
                        0 => "today!".to_string(),
                        1 => "tomorrow".to_string(),
                        n => format!("in {} days", n),
                    }
                )?;
            }
            None => writeln!(self.output, "Birthday not set.")?,
        }
        Ok(())
    }

    fn birthdays(&mut self) -> Result<()> {
        let prompt = format!("Days ahead (default {}): ", DEFAULT_BIRTHDAY_WINDOW);
        let Some(days) = self.ask(&prompt, |s| {
            if s.is_empty() {
                return Ok(DEFAULT_BIRTHDAY_WINDOW);
            }
            s.parse::<u16>()
                .map(i64::from)
                .map_err(|_| AssistantError::InvalidNumber(s.to_string()))
        })?
        else {
            return Ok(());
        };

        let upcoming = self.session.contacts.upcoming_birthdays(days);
        write!(self.output, "{}", output::format_birthdays(&upcoming, days))?;
        if upcoming.is_empty() {
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn add_note(&mut self) -> Result<()> {
        let Some(text) = self.ask_required("Note: ", "note")? else {
            return Ok(());
        };
        let Some(tags) = self.read_line("Tags (optional): ")? else {
            return Ok(());
        };
        self.session.notes.add(text, validation::parse_tags(&tags));
        writeln!(self.output, "Note added.")?;
        Ok(())
    }

    fn search_note(&mut self) -> Result<()> {
        let Some(keyword) = self.ask_required("Keyword: ", "keyword")? else {
            return Ok(());
        };
        let found = self.session.notes.search(&keyword);
        write!(self.output, "{}", output::format_note_list(&found))?;
        if found.is_empty() {
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn edit_note(&mut self) -> Result<()> {
        let Some(identifier) = self.ask_required("Note text or tag: ", "note")? else {
            return Ok(());
        };
        let Some(text) = self.read_line("New text (blank to keep): ")? else {
            return Ok(());
        };
        let prompt = format!("New tags (blank to keep, '{}' to clear): ", CLEAR);
        let Some(tags) = self.read_line(&prompt)? else {
            return Ok(());
        };
        let new_tags = match tags.as_str() {
            "" => None,
            CLEAR => Some(Vec::new()),
            other => Some(validation::parse_tags(other)),
        };

        if self.session.notes.edit(&identifier, Some(&text), new_tags) {
            writeln!(self.output, "Note updated.")?;
        } else {
            writeln!(self.output, "Note not found: {}", identifier)?;
        }
        Ok(())
    }

    fn delete_note(&mut self) -> Result<()> {
        let Some(identifier) = self.ask_required("Note text or tag: ", "note")? else {
            return Ok(());
        };
        match self.session.notes.delete(&identifier) {
            0 => writeln!(self.output, "Note not found: {}", identifier)?,
            removed => writeln!(self.output, "Deleted {} note(s).", removed)?,
        }
        Ok(())
    }
}

fn optional<T>(input: &str, parse: impl Fn(&str) -> Result<T>) -> Result<Option<T>> {
    if input.is_empty() {
        Ok(None)
    } else {
        parse(input).map(Some)
    }
}

/// Blank keeps the current value
fn keep_or(input: &str) -> Option<String> {
    Some(input.to_string()).filter(|s| !s.is_empty())
}

/// Blank keeps, `-` clears, anything else is parsed as the new value
fn edit_optional<T>(input: &str, parse: impl Fn(&str) -> Result<T>) -> Result<Option<Option<T>>> {
    match input {
        "" => Ok(None),
        CLEAR => Ok(Some(None)),
        other => parse(other).map(|value| Some(Some(value))),
    }
}
