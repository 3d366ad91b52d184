//! Configuration: where the contact and note files live

use crate::error::{AssistantError, Result};
use std::path::{Path, PathBuf};

pub const DATA_DIR_VAR: &str = "ASSISTANT_DATA_DIR";
pub const CONTACTS_FILE_VAR: &str = "ASSISTANT_CONTACTS_FILE";
pub const NOTES_FILE_VAR: &str = "ASSISTANT_NOTES_FILE";

pub const CONTACTS_FILE_NAME: &str = "contacts.toml";
pub const NOTES_FILE_NAME: &str = "notes.toml";

/// Explicit path overrides, usually from the command line
#[derive(Debug, Clone, Default)]
pub struct PathOverrides {
    pub data_dir: Option<PathBuf>,
    pub contacts_file: Option<PathBuf>,
    pub notes_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub contacts_file: PathBuf,
    pub notes_file: PathBuf,
}

impl Config {
    /// Both files inside `dir` under their default names
    pub fn in_dir(dir: &Path) -> Self {
        Config {
            contacts_file: dir.join(CONTACTS_FILE_NAME),
            notes_file: dir.join(NOTES_FILE_NAME),
        }
    }

    /// Resolve paths: explicit override, then environment, then data dir default.
    /// The data dir itself is the override, then ASSISTANT_DATA_DIR, then the
    /// current directory.
    pub fn resolve(overrides: PathOverrides) -> Result<Self> {
        let data_dir = match overrides.data_dir {
            Some(dir) => dir,
            None => match env_path(DATA_DIR_VAR)? {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            },
        };
        let defaults = Config::in_dir(&data_dir);

        let contacts_file = match overrides.contacts_file {
            Some(path) => path,
            None => env_path(CONTACTS_FILE_VAR)?.unwrap_or(defaults.contacts_file),
        };
        let notes_file = match overrides.notes_file {
            Some(path) => path,
            None => env_path(NOTES_FILE_VAR)?.unwrap_or(defaults.notes_file),
        };

        if contacts_file == notes_file {
            return Err(AssistantError::Config(format!(
                "Contacts and notes cannot share one file: {}",
                contacts_file.display()
            )));
        }

        Ok(Config {
            contacts_file,
            notes_file,
        })
    }
}

/// Read a path from the environment; set-but-empty is an error
fn env_path(key: &str) -> Result<Option<PathBuf>> {
    match std::env::var_os(key) {
        None => Ok(None),
        Some(value) if value.is_empty() => Err(AssistantError::Config(format!(
            "{} is set but empty",
            key
        ))),
        Some(value) => Ok(Some(PathBuf::from(value))),
    }
}
