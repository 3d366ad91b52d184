//! Persistence of the contact and note books as TOML files

use crate::domain::{Contact, ContactBook, Note, NoteBook};
use crate::error::{AssistantError, Result};
use crate::infrastructure::Config;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug, Default, Serialize, Deserialize)]
struct ContactsFile {
    #[serde(default, rename = "contact")]
    contacts: Vec<Contact>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct NotesFile {
    #[serde(default, rename = "note")]
    notes: Vec<Note>,
}

/// Loads and saves both books as one unit
pub trait Store {
    /// Load both books; a missing file yields an empty book
    fn load(&self) -> Result<(ContactBook, NoteBook)>;

    /// Replace both stored books; either both files change or neither does
    fn save(&self, contacts: &ContactBook, notes: &NoteBook) -> Result<()>;
}

/// File system implementation of Store
#[derive(Debug, Clone)]
pub struct FileStore {
    contacts_path: PathBuf,
    notes_path: PathBuf,
}

impl FileStore {
    pub fn new(contacts_path: PathBuf, notes_path: PathBuf) -> Self {
        FileStore {
            contacts_path,
            notes_path,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        FileStore::new(config.contacts_file.clone(), config.notes_file.clone())
    }

    pub fn contacts_path(&self) -> &Path {
        &self.contacts_path
    }

    pub fn notes_path(&self) -> &Path {
        &self.notes_path
    }
}

impl Store for FileStore {
    fn load(&self) -> Result<(ContactBook, NoteBook)> {
        let contacts_file: ContactsFile = read_toml(&self.contacts_path)?;
        let contacts =
            ContactBook::from_contacts(contacts_file.contacts).map_err(|e| {
                AssistantError::CorruptStore {
                    path: self.contacts_path.clone(),
                    message: e.to_string(),
                }
            })?;

        let notes_file: NotesFile = read_toml(&self.notes_path)?;
        let notes = NoteBook::from_notes(notes_file.notes);

        info!(
            contacts = contacts.len(),
            notes = notes.len(),
            "loaded address book"
        );
        Ok((contacts, notes))
    }

    fn save(&self, contacts: &ContactBook, notes: &NoteBook) -> Result<()> {
        let contacts_toml = toml::to_string_pretty(&ContactsFile {
            contacts: contacts.iter().cloned().collect(),
        })?;
        let notes_toml = toml::to_string_pretty(&NotesFile {
            notes: notes.iter().cloned().collect(),
        })?;

        let contacts_tmp = write_temp(&self.contacts_path, &contacts_toml)?;
        let notes_tmp = match write_temp(&self.notes_path, &notes_toml) {
            Ok(path) => path,
            Err(e) => {
                let _ = fs::remove_file(&contacts_tmp);
                return Err(e);
            }
        };

        commit_pair(
            (&contacts_tmp, &self.contacts_path),
            (&notes_tmp, &self.notes_path),
        )?;

        info!(
            contacts = contacts.len(),
            notes = notes.len(),
            "saved address book"
        );
        Ok(())
    }
}

/// Parse a TOML file, treating a missing file as the default value
fn read_toml<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no data file yet");
            return Ok(T::default());
        }
        Err(e) => return Err(AssistantError::Io(e)),
    };

    toml::from_str(&contents).map_err(|e| AssistantError::CorruptStore {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let name = format!(
        "{}.{}-{}",
        path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("data.toml"),
        suffix,
        std::process::id()
    );
    path.with_file_name(name)
}

/// Write content next to `path` and return the temp file location
fn write_temp(path: &Path, content: &str) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp = sibling(path, "tmp");
    fs::write(&tmp, content)?;
    Ok(tmp)
}

/// Move both temp files into place.
///
/// The first target is backed up before it is replaced so it can be put
/// back if the second rename fails.
fn commit_pair(first: (&Path, &Path), second: (&Path, &Path)) -> Result<()> {
    let (first_tmp, first_path) = first;
    let (second_tmp, second_path) = second;

    let backup = if first_path.exists() {
        let backup = sibling(first_path, "bak");
        if let Err(e) = fs::rename(first_path, &backup) {
            let _ = fs::remove_file(first_tmp);
            let _ = fs::remove_file(second_tmp);
            return Err(e.into());
        }
        Some(backup)
    } else {
        None
    };

    if let Err(e) = fs::rename(first_tmp, first_path) {
        restore(first_path, backup.as_deref());
        let _ = fs::remove_file(first_tmp);
        let _ = fs::remove_file(second_tmp);
        return Err(e.into());
    }

    if let Err(e) = replace(second_tmp, second_path) {
        warn!(path = %second_path.display(), error = %e, "rolling back partial save");
        let _ = fs::remove_file(first_path);
        restore(first_path, backup.as_deref());
        let _ = fs::remove_file(second_tmp);
        return Err(e.into());
    }

    if let Some(backup) = backup {
        let _ = fs::remove_file(backup);
    }
    Ok(())
}

/// Rename over an existing file; Windows `rename` does not overwrite.
fn replace(from: &Path, to: &Path) -> std::io::Result<()> {
    if cfg!(windows) && to.exists() {
        fs::remove_file(to)?;
    }
    fs::rename(from, to)
}

fn restore(path: &Path, backup: Option<&Path>) {
    if let Some(backup) = backup {
        if let Err(e) = fs::rename(backup, path) {
            warn!(path = %path.display(), error = %e, "failed to restore backup");
        }
    }
}
