//! Domain layer - Entities, validation and the in-memory repositories

pub mod birthday;
pub mod contact;
pub mod contact_book;
pub mod note;
pub mod note_book;
pub mod validation;

pub use contact::{Birthday, Contact, ContactUpdate, Email, Phone};
pub use contact_book::{ContactBook, UpcomingBirthday};
pub use note::Note;
pub use note_book::NoteBook;
