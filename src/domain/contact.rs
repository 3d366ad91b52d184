//! Contact entity and its validated fields

use crate::domain::validation::{self, DATE_FORMAT};
use crate::error::{AssistantError, Result};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A phone number: 10-15 digits with an optional leading '+'
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn parse(value: &str) -> Result<Self> {
        validation::phone(value).map(Phone)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Phone {
    type Error = AssistantError;

    fn try_from(value: String) -> Result<Self> {
        Phone::parse(&value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> String {
        phone.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An email address in loose `local@domain.tld` shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn parse(value: &str) -> Result<Self> {
        validation::email(value).map(Email)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = AssistantError;

    fn try_from(value: String) -> Result<Self> {
        Email::parse(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> String {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A date of birth that is not in the future
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse `DD.MM.YYYY`, rejecting dates after today
    pub fn parse(value: &str) -> Result<Self> {
        Self::parse_relative(value, Local::now().date_naive())
    }

    /// Parse `DD.MM.YYYY`, rejecting dates after `today`
    pub fn parse_relative(value: &str, today: NaiveDate) -> Result<Self> {
        validation::birthday(value, today).map(Birthday)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Birthday(date)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// One person's contact information, keyed by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: Phone,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
}

impl Contact {
    /// Create a contact with the required fields
    pub fn new(name: &str, phone: Phone) -> Result<Self> {
        Ok(Contact {
            name: validation::non_blank(name, "name")?,
            phone,
            email: None,
            address: None,
            birthday: None,
        })
    }

    pub fn with_email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_birthday(mut self, birthday: Birthday) -> Self {
        self.birthday = Some(birthday);
        self
    }

    /// Whether any field contains `needle` (already lowercased)
    pub(crate) fn matches(&self, needle: &str) -> bool {
        let birthday = self.birthday.map(|b| b.to_string());
        let fields = [
            Some(self.name.as_str()),
            Some(self.phone.as_str()),
            self.email.as_ref().map(Email::as_str),
            self.address.as_deref(),
            birthday.as_deref(),
        ];
        let found = fields
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(needle));
        found
    }

    /// Apply every field of `update` except the name
    pub(crate) fn apply(&mut self, update: ContactUpdate) {
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(birthday) = update.birthday {
            self.birthday = birthday;
        }
    }
}

/// The closed set of contact fields an edit may change.
///
/// `None` leaves a field untouched. For optional fields `Some(None)`
/// clears the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    pub name: Option<String>,
    pub phone: Option<Phone>,
    pub email: Option<Option<Email>>,
    pub address: Option<Option<String>>,
    pub birthday: Option<Option<Birthday>>,
}

impl ContactUpdate {
    pub fn is_empty(&self) -> bool {
        *self == ContactUpdate::default()
    }
}
