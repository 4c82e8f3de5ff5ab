//! Data layer for the event dataset analyzer.
//!
//! Responsible for loading CSV event exports into an in-memory [`Dataset`],
//! running the query operations over it and building per-team summaries.
//!
//! [`Dataset`]: events_core::Dataset

pub mod aggregator;
pub mod analyzer;
pub mod reader;

pub use events_core as core;
