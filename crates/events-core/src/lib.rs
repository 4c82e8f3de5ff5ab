//! Core types for the event dataset analyzer.
//!
//! Holds the record model, the shared error type and the loader
//! configuration used by the `events-data` crate.

pub mod config;
pub mod error;
pub mod models;

pub use error::{EventError, Result};
pub use models::{Dataset, EventRecord};
