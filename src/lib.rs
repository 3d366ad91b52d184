//! assistant - Personal assistant for contacts and notes
//!
//! An interactive command-line address book and notebook. Contacts are
//! looked up by case-insensitive name; notes are free text with tags. Both
//! collections are kept in TOML files between sessions.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::AssistantError;
