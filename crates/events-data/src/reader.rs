//! CSV loading for event exports.
//!
//! The first row of the source names the fields; each following row becomes
//! one [`EventRecord`] keyed by those names, in source order.

use std::io::Read;
use std::path::Path;

use events_core::config::LoaderConfig;
use events_core::error::{EventError, Result};
use events_core::models::{Dataset, EventRecord};
use tracing::debug;

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a CSV file with the default [`LoaderConfig`].
pub fn load(path: impl AsRef<Path>) -> Result<Dataset> {
    load_with_config(path, &LoaderConfig::default())
}

/// Load a CSV file using `config`.
///
/// The file handle lives only for the duration of this call and is closed on
/// every return path.
pub fn load_with_config(path: impl AsRef<Path>, config: &LoaderConfig) -> Result<Dataset> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| EventError::SourceRead {
        path: path.to_path_buf(),
        source,
    })?;

    let records = load_from_reader(file, config)?;

    debug!("Loaded {} records from {}", records.len(), path.display());

    Ok(records)
}

/// Load records from any byte source, e.g. an in-memory buffer.
pub fn load_from_reader<R: Read>(source: R, config: &LoaderConfig) -> Result<Dataset> {
    let trim = if config.trim {
        csv::Trim::All
    } else {
        csv::Trim::None
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(config.delimiter_byte()?)
        .flexible(config.flexible)
        .trim(trim)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let mut records: Dataset = Vec::new();

    for row in reader.records() {
        let row = row?;
        records.push(pair_with_headers(&headers, &row));
    }

    debug!(
        "Read {} rows across {} header fields",
        records.len(),
        headers.len()
    );

    Ok(records)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Pair cells with header names positionally.
///
/// Only reachable with mismatched lengths when the reader is flexible: short
/// rows lose their trailing fields and surplus cells are dropped.
fn pair_with_headers(headers: &csv::StringRecord, row: &csv::StringRecord) -> EventRecord {
    headers.iter().zip(row.iter()).collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
