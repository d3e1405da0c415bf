//! Chat room server library.
//!
//! This library provides an HTTP backend for creating chat rooms, joining
//! them by key, and posting/listing messages persisted in SQLite.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use ui::run;
