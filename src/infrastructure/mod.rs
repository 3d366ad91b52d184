//! Infrastructure layer - Configuration and persistence

pub mod config;
pub mod storage;

pub use config::{Config, PathOverrides};
pub use storage::{FileStore, Store};
