//! Application layer - Session lifecycle

pub mod session;

pub use session::Session;
