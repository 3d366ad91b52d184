//! CLI command definitions

use crate::infrastructure::PathOverrides;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "assistant")]
#[command(about = "Personal assistant for contacts and notes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding contacts.toml and notes.toml (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Contacts file (overrides ASSISTANT_CONTACTS_FILE)
    #[arg(long, value_name = "FILE")]
    pub contacts: Option<PathBuf>,

    /// Notes file (overrides ASSISTANT_NOTES_FILE)
    #[arg(long, value_name = "FILE")]
    pub notes: Option<PathBuf>,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn overrides(&self) -> PathOverrides {
        PathOverrides {
            data_dir: self.data_dir.clone(),
            contacts_file: self.contacts.clone(),
            notes_file: self.notes.clone(),
        }
    }
}

/// Interactive shell commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddContact,
    SearchContact,
    EditContact,
    DeleteContact,
    ShowContacts,
    ShowBirthday,
    Birthdays,
    AddNote,
    SearchNote,
    EditNote,
    DeleteNote,
    ShowNotes,
    Help,
    Exit,
}

/// Keyword, command and help line, in the order `commands` prints them
const COMMAND_TABLE: &[(&str, Command, &str)] = &[
    ("add contact", Command::AddContact, "add a new contact"),
    ("search contact", Command::SearchContact, "find contacts by any field"),
    ("edit contact", Command::EditContact, "change a contact's details"),
    ("delete contact", Command::DeleteContact, "remove a contact"),
    ("show contacts", Command::ShowContacts, "list all contacts"),
    ("show birthday", Command::ShowBirthday, "show one contact's birthday"),
    ("birthdays", Command::Birthdays, "list upcoming birthdays"),
    ("add note", Command::AddNote, "add a note with optional tags"),
    ("search note", Command::SearchNote, "find notes by text or tag"),
    ("edit note", Command::EditNote, "change notes by text or tag"),
    ("delete note", Command::DeleteNote, "remove notes by text or tag"),
    ("show notes", Command::ShowNotes, "list all notes"),
    ("commands", Command::Help, "show this list"),
    ("exit", Command::Exit, "save and quit"),
    ("close", Command::Exit, "save and quit"),
];

impl Command {
    /// Match the start of `line` against the command keywords, ignoring case.
    ///
    /// The keyword must be followed by whitespace or the end of the line.
    /// Returns the command and whatever text follows the keyword.
    pub fn parse(line: &str) -> Option<(Command, &str)> {
        let line = line.trim();
        COMMAND_TABLE.iter().find_map(|(keyword, command, _)| {
            let head = line.get(..keyword.len())?;
            if !head.eq_ignore_ascii_case(keyword) {
                return None;
            }
            let rest = &line[keyword.len()..];
            if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
                return None;
            }
            Some((*command, rest.trim()))
        })
    }

    /// One line per command keyword
    pub fn help_text() -> String {
        let width = COMMAND_TABLE
            .iter()
            .map(|(keyword, _, _)| keyword.len())
            .max()
            .unwrap_or(0);

        let mut output = String::from("Available commands:\n");
        for (keyword, _, help) in COMMAND_TABLE {
            output.push_str(&format!("  {:<width$}  {}\n", keyword, help, width = width));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_keyword() {
        assert_eq!(Command::parse("add contact"), Some((Command::AddContact, "")));
        assert_eq!(Command::parse("birthdays"), Some((Command::Birthdays, "")));
        assert_eq!(Command::parse("close"), Some((Command::Exit, "")));
    }

    #[test]
    fn test_parse_ignores_case_and_whitespace() {
        assert_eq!(Command::parse("  SHOW Notes \n"), Some((Command::ShowNotes, "")));
        assert_eq!(Command::parse("Exit"), Some((Command::Exit, "")));
    }

    #[test]
    fn test_parse_keeps_trailing_argument_case() {
        assert_eq!(
            Command::parse("edit contact  Bob Smith"),
            Some((Command::EditContact, "Bob Smith"))
        );
    }

    #[test]
    fn test_parse_distinguishes_show_commands() {
        assert_eq!(
            Command::parse("show birthday Ann"),
            Some((Command::ShowBirthday, "Ann"))
        );
        assert_eq!(Command::parse("show contacts"), Some((Command::ShowContacts, "")));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Command::parse("hello"), None);
        assert_eq!(Command::parse("add"), None);
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("ädd contact"), None);
    }

    #[test]
    fn test_parse_requires_whole_keyword() {
        assert_eq!(Command::parse("closet"), None);
        assert_eq!(Command::parse("exiting"), None);
        assert_eq!(Command::parse("add contacts"), None);
        assert_eq!(Command::parse("commandsx"), None);
        assert_eq!(Command::parse("exit\tnow"), Some((Command::Exit, "now")));
    }

    #[test]
    fn test_help_lists_every_keyword() {
        let help = Command::help_text();
        for (keyword, _, _) in COMMAND_TABLE {
            assert!(help.contains(keyword), "missing {}", keyword);
        }
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from(["assistant", "--data-dir", "/data", "--notes", "/n.toml", "-vv"]);
        let overrides = cli.overrides();
        assert_eq!(overrides.data_dir, Some(PathBuf::from("/data")));
        assert_eq!(overrides.contacts_file, None);
        assert_eq!(overrides.notes_file, Some(PathBuf::from("/n.toml")));
        assert_eq!(cli.verbose, 2);
    }
}
