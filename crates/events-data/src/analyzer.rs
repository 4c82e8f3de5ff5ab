//! Query operations over a loaded event dataset.
//!
//! Every operation is a read-only pass over the records. Field access is
//! either tolerant ([`EventRecord::get`], absent fields never match) or
//! exact-match ([`EventRecord::field`], absent fields fail the whole call);
//! which one applies is fixed per operation.

use std::collections::{HashMap, HashSet};

use events_core::error::{EventError, Result};
use events_core::models::{
    Dataset, EventRecord, EVENT_TYPE_NAME, ID, OUTCOME_NAME, PASS, PASS_LENGTH, PERIOD,
    PLAYER_NAME, PLAYER_POSITION_NAME, SHOT, TEAM_NAME,
};
use tracing::debug;

/// Decimal places kept by [`EventAnalyzer::average_pass_length_by_team`].
pub const AVERAGE_DECIMALS: usize = 1;

// ── EventAnalyzer ─────────────────────────────────────────────────────────────

/// Stateless namespace for the dataset queries.
pub struct EventAnalyzer;

impl EventAnalyzer {
    /// Distinct `team_name` values. Exact-match lookup.
    pub fn unique_teams(records: &[EventRecord]) -> Result<HashSet<String>> {
        records
            .iter()
            .map(|r| r.field(TEAM_NAME).map(str::to_string))
            .collect()
    }

    /// The `event_type_name` value occurring most often. Tolerant lookup.
    ///
    /// Records without the field tally under `None`, which can itself win.
    /// Ties go to the value encountered first in record order.
    pub fn most_common_event_type(records: &[EventRecord]) -> Result<Option<String>> {
        let mut tally: HashMap<Option<&str>, usize> = HashMap::new();
        for record in records {
            *tally.entry(record.get(EVENT_TYPE_NAME)).or_insert(0) += 1;
        }

        let max = tally
            .values()
            .copied()
            .max()
            .ok_or(EventError::EmptyDataset {
                operation: "most_common_event_type",
            })?;

        // First-seen order decides ties, so walk the records rather than the map.
        let winner = records
            .iter()
            .map(|r| r.get(EVENT_TYPE_NAME))
            .find(|value| tally.get(value) == Some(&max))
            .flatten()
            .map(str::to_string);

        debug!(
            "Most common event type {:?} with {} of {} records",
            winner,
            max,
            records.len()
        );

        Ok(winner)
    }

    /// Records whose `team_name` equals `team_name`, in order. Exact-match lookup.
    pub fn filter_by_team(records: &[EventRecord], team_name: &str) -> Result<Dataset> {
        filter_on(records, TEAM_NAME, team_name)
    }

    /// Events of `event_type_name` by `team_name`. Tolerant lookup.
    pub fn count_event_type_by_team(
        records: &[EventRecord],
        team_name: &str,
        event_type_name: &str,
    ) -> usize {
        records
            .iter()
            .filter(|r| r.get(TEAM_NAME) == Some(team_name))
            .filter(|r| r.get(EVENT_TYPE_NAME) == Some(event_type_name))
            .count()
    }

    /// Mean non-empty `pass_length` for the team, rounded half-to-even to one
    /// decimal place. Exact-match lookup.
    ///
    /// Fails with [`EventError::NoPassLengths`] rather than returning zero when
    /// the team has no qualifying records.
    pub fn average_pass_length_by_team(records: &[EventRecord], team_name: &str) -> Result<f64> {
        let mut total = 0.0;
        let mut count = 0usize;

        for record in records {
            if record.field(TEAM_NAME)? != team_name {
                continue;
            }
            let raw = record.field(PASS_LENGTH)?;
            if raw.is_empty() {
                continue;
            }
            total += parse_decimal(PASS_LENGTH, raw)?;
            count += 1;
        }

        if count == 0 {
            return Err(EventError::NoPassLengths {
                team: team_name.to_string(),
            });
        }

        debug!("Averaging {} pass lengths for {}", count, team_name);

        Ok(round_half_even(total / count as f64, AVERAGE_DECIMALS))
    }

    /// Distinct `player_name` values among records at `position_name`.
    /// Exact-match lookup.
    pub fn players_by_position(
        records: &[EventRecord],
        position_name: &str,
    ) -> Result<HashSet<String>> {
        let mut players = HashSet::new();
        for record in records {
            if record.field(PLAYER_POSITION_NAME)? == position_name {
                players.insert(record.field(PLAYER_NAME)?.to_string());
            }
        }
        Ok(players)
    }

    /// Passes with an empty `outcome_name`. Exact-match lookup.
    ///
    /// Any non-empty outcome ("Incomplete", "Out", ...) marks the pass as
    /// unsuccessful.
    pub fn count_successful_passes(records: &[EventRecord]) -> Result<usize> {
        let mut count = 0;
        for record in records {
            if record.field(EVENT_TYPE_NAME)? == PASS
                && record.field(OUTCOME_NAME)?.is_empty()
            {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Records whose `period` equals `period` as a string. Exact-match lookup.
    ///
    /// No numeric coercion: `"2"` does not match `"02"` or `"20"`.
    pub fn filter_by_period(records: &[EventRecord], period: &str) -> Result<Dataset> {
        filter_on(records, PERIOD, period)
    }

    /// Distinct shot `id`s for `player_name`. Exact-match lookup.
    ///
    /// Rows sharing an id describe the same shot and count once.
    pub fn count_shots_by_player(records: &[EventRecord], player_name: &str) -> Result<usize> {
        let mut shot_ids: HashSet<&str> = HashSet::new();
        for record in records {
            if record.field(PLAYER_NAME)? == player_name
                && record.field(EVENT_TYPE_NAME)? == SHOT
            {
                shot_ids.insert(record.field(ID)?);
            }
        }
        Ok(shot_ids.len())
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Round `value` to `places` decimals, sending exact halves to the even digit.
///
/// Rounds the exact binary value through the formatter, so `10.35` (stored
/// just below the half) goes down to `10.3`.
pub fn round_half_even(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", places, value).parse().unwrap_or(value)
}

/// Parse a decimal cell, tolerating surrounding whitespace.
///
/// `"inf"`, `"-infinity"` and `"NaN"` are accepted as their float values,
/// so one such cell carries through to the average.
pub(crate) fn parse_decimal(field: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| EventError::InvalidNumber {
            field: field.to_string(),
            value: raw.to_string(),
        })
}

fn filter_on(records: &[EventRecord], field: &str, wanted: &str) -> Result<Dataset> {
    let mut matched = Vec::new();
    for record in records {
        if record.field(field)? == wanted {
            matched.push(record.clone());
        }
    }
    debug!(
        "{} of {} records have {} = {:?}",
        matched.len(),
        records.len(),
        field,
        wanted
    );
    Ok(matched)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
