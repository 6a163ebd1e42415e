//! Core library for daynotes.
//!
//! This crate holds everything below the terminal surface:
//! - `resolver` for deciding which year's notes are active
//! - `store` for the persisted per-year note mappings
//! - `session` for edit reconciliation and import/export
//! - `scheduler` for coalescing rapid edits before they are written

pub mod config;
pub mod error;
pub mod notes;
pub mod resolver;
pub mod scheduler;
pub mod session;
pub mod store;

pub use error::{NotesError, NotesResult};
pub use notes::NotesMap;
pub use resolver::{resolve, Resolution};
