//! A working session: both books loaded from a store and saved back on close

use crate::domain::{ContactBook, NoteBook};
use crate::error::Result;
use crate::infrastructure::Store;

/// Owns the contact and note books for the lifetime of the process
pub struct Session<S: Store> {
    pub contacts: ContactBook,
    pub notes: NoteBook,
    store: S,
}

impl<S: Store> Session<S> {
    /// Load prior state from `store`
    pub fn open(store: S) -> Result<Self> {
        let (contacts, notes) = store.load()?;
        Ok(Session {
            contacts,
            notes,
            store,
        })
    }

    /// Write the current state back to the store
    pub fn save(&self) -> Result<()> {
        self.store.save(&self.contacts, &self.notes)
    }

    /// Save and release the session
    pub fn close(self) -> Result<()> {
        self.save()
    }
}
