//! Contact repository keyed by case-insensitive name

use crate::domain::birthday;
use crate::domain::contact::{Birthday, Contact, ContactUpdate};
use crate::domain::validation;
use crate::error::{AssistantError, Result};
use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

/// A birthday falling inside the requested window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// The actual date of the upcoming birthday
    pub birthday: NaiveDate,
    /// Birthday moved off the weekend to the following Monday
    pub congratulation_date: NaiveDate,
}

/// In-memory contact store.
///
/// Contacts keep their original-cased name but are looked up
/// case-insensitively, and at most one contact exists per lowercased name.
/// Iteration follows insertion order; a rename moves the contact to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBook {
    contacts: Vec<Contact>,
}

impl ContactBook {
    pub fn new() -> Self {
        ContactBook::default()
    }

    /// Build a book from persisted contacts, trimming names and rejecting
    /// blank or duplicate ones
    pub fn from_contacts(contacts: Vec<Contact>) -> Result<Self> {
        let mut book = ContactBook::new();
        for mut contact in contacts {
            contact.name = validation::non_blank(&contact.name, "name")?;
            book.add(contact)?;
        }
        Ok(book)
    }

    fn position(&self, name: &str) -> Option<usize> {
        let needle = name.trim().to_lowercase();
        self.contacts
            .iter()
            .position(|c| c.name.to_lowercase() == needle)
    }

    /// Store a new contact unless its name is already taken
    pub fn add(&mut self, contact: Contact) -> Result<()> {
        if self.position(&contact.name).is_some() {
            warn!(name = %contact.name, "rejected duplicate contact");
            return Err(AssistantError::DuplicateContact(contact.name));
        }
        debug!(name = %contact.name, "added contact");
        self.contacts.push(contact);
        Ok(())
    }

    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.position(name).map(|idx| &self.contacts[idx])
    }

    /// Apply `update` to the contact named `name`.
    ///
    /// The rename is checked before any field is written, so a rejected
    /// rename leaves the contact untouched.
    pub fn edit(&mut self, name: &str, mut update: ContactUpdate) -> Result<()> {
        let idx = self
            .position(name)
            .ok_or_else(|| AssistantError::ContactNotFound(name.to_string()))?;

        let new_name = match update.name.take() {
            Some(raw) => Some(validation::non_blank(&raw, "name")?),
            None => None,
        };

        let current = self.contacts[idx].name.to_lowercase();
        let moves = match &new_name {
            Some(new_name) if new_name.to_lowercase() != current => {
                if self.position(new_name).is_some() {
                    warn!(from = %name, to = %new_name, "rejected rename onto existing contact");
                    return Err(AssistantError::DuplicateContact(new_name.clone()));
                }
                true
            }
            _ => false,
        };

        let contact = &mut self.contacts[idx];
        contact.apply(update);
        if let Some(new_name) = new_name {
            contact.name = new_name;
        }

        if moves {
            let contact = self.contacts.remove(idx);
            debug!(from = %name, to = %contact.name, "renamed contact");
            self.contacts.push(contact);
        } else {
            debug!(name = %name, "edited contact");
        }

        Ok(())
    }

    pub fn delete(&mut self, name: &str) -> Option<Contact> {
        let idx = self.position(name)?;
        let removed = self.contacts.remove(idx);
        debug!(name = %removed.name, "deleted contact");
        Some(removed)
    }

    /// Contacts with any field containing `query`, case-insensitively
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        let needle = query.to_lowercase();
        self.contacts.iter().filter(|c| c.matches(&needle)).collect()
    }

    /// Days from today until the next occurrence of `birthday`
    pub fn days_to_birthday(&self, birthday: &Birthday) -> i64 {
        self.days_to_birthday_from(birthday, Local::now().date_naive())
    }

    pub fn days_to_birthday_from(&self, birthday: &Birthday, today: NaiveDate) -> i64 {
        birthday::days_until(birthday.date(), today)
    }

    /// Birthdays occurring within the next `days` days, today included
    pub fn upcoming_birthdays(&self, days: i64) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_from(days, Local::now().date_naive())
    }

    pub fn upcoming_birthdays_from(&self, days: i64, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.contacts
            .iter()
            .filter_map(|contact| {
                let born = contact.birthday?;
                let remaining = self.days_to_birthday_from(&born, today);
                if !(0..=days).contains(&remaining) {
                    return None;
                }
                let next = birthday::next_occurrence(born.date(), today);
                Some(UpcomingBirthday {
                    name: contact.name.clone(),
                    birthday: next,
                    congratulation_date: birthday::congratulation_date(next),
                })
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
