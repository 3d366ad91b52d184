//! Error types for the assistant

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the assistant
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Birthday is in the future: {0}")]
    FutureBirthday(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Field '{0}' must not be empty")]
    BlankField(String),

    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("Contact already exists: {0}")]
    DuplicateContact(String),

    #[error("Corrupt data file {}: {message}", .path.display())]
    CorruptStore { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl AssistantError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AssistantError::CorruptStore { .. } => 2,
            AssistantError::Config(_) => 3,
            _ => 1,
        }
    }

    /// True for errors caused by bad user input that a prompt can retry.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AssistantError::InvalidPhone(_)
                | AssistantError::InvalidEmail(_)
                | AssistantError::InvalidDate(_)
                | AssistantError::FutureBirthday(_)
                | AssistantError::InvalidNumber(_)
                | AssistantError::BlankField(_)
        )
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            AssistantError::InvalidPhone(value) => {
                format!(
                    "Invalid phone number: '{}'\n\n\
                    Expected 10 to 15 digits with an optional leading '+'\n\
                    Example: +380501234567",
                    value
                )
            }
            AssistantError::InvalidEmail(value) => {
                format!(
                    "Invalid email: '{}'\n\n\
                    Expected format: name@domain.tld\n\
                    Example: alice@example.com",
                    value
                )
            }
            AssistantError::InvalidDate(value) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected format: DD.MM.YYYY\n\
                    Example: 15.07.1990",
                    value
                )
            }
            AssistantError::CorruptStore { path, message } => {
                format!(
                    "Corrupt data file {}: {}\n\n\
                    Suggestions:\n\
                    • Fix or remove the file by hand; nothing was overwritten\n\
                    • Point the assistant at another file with --contacts / --notes\n\
                    • Set ASSISTANT_DATA_DIR to use a different data directory",
                    path.display(),
                    message
                )
            }
            AssistantError::Config(msg) => {
                format!(
                    "{}\n\n\
                    Valid variables: ASSISTANT_DATA_DIR, ASSISTANT_CONTACTS_FILE, ASSISTANT_NOTES_FILE",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using AssistantError
pub type Result<T> = std::result::Result<T, AssistantError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_phone_suggestion() {
        let err = AssistantError::InvalidPhone("12ab".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'12ab'"));
        assert!(msg.contains("10 to 15 digits"));
    }

    #[test]
    fn test_invalid_date_suggestion() {
        let err = AssistantError::InvalidDate("1990-07-15".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("DD.MM.YYYY"));
        assert!(msg.contains("15.07.1990"));
    }

    #[test]
    fn test_corrupt_store_suggestions() {
        let err = AssistantError::CorruptStore {
            path: PathBuf::from("/tmp/contacts.toml"),
            message: "expected `=`".to_string(),
        };
        let msg = err.display_with_suggestions();
        assert!(msg.contains("/tmp/contacts.toml"));
        assert!(msg.contains("nothing was overwritten"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_validation_classification() {
        assert!(AssistantError::BlankField("name".to_string()).is_validation());
        assert!(AssistantError::FutureBirthday("01.01.2999".to_string()).is_validation());
        assert!(!AssistantError::ContactNotFound("Bob".to_string()).is_validation());
        assert!(!AssistantError::DuplicateContact("Bob".to_string()).is_validation());
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = AssistantError::DuplicateContact("Bob".to_string());
        assert_eq!(err.display_with_suggestions(), "Contact already exists: Bob");
        assert_eq!(err.exit_code(), 1);
    }
}
