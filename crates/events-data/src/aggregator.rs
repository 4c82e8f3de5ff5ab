//! Per-team summaries of an event dataset.

use std::collections::BTreeMap;

use events_core::error::Result;
use events_core::models::{
    EventRecord, EVENT_TYPE_NAME, OUTCOME_NAME, PASS, PASS_LENGTH, SHOT, TEAM_NAME,
};
use serde::Serialize;
use tracing::debug;

use crate::analyzer::{parse_decimal, round_half_even, AVERAGE_DECIMALS};

// ── TeamStats ─────────────────────────────────────────────────────────────────

/// Running tallies for one team while the records are scanned.
#[derive(Debug, Clone, Default)]
struct TeamStats {
    events: usize,
    passes: usize,
    successful_passes: usize,
    shots: usize,
    pass_length_total: f64,
    pass_length_count: usize,
}

impl TeamStats {
    fn add_record(&mut self, record: &EventRecord) -> Result<()> {
        self.events += 1;

        match record.get(EVENT_TYPE_NAME) {
            Some(PASS) => {
                self.passes += 1;
                if record.get(OUTCOME_NAME) == Some("") {
                    self.successful_passes += 1;
                }
            }
            Some(SHOT) => self.shots += 1,
            _ => {}
        }

        if let Some(raw) = record.get(PASS_LENGTH).filter(|v| !v.is_empty()) {
            self.pass_length_total += parse_decimal(PASS_LENGTH, raw)?;
            self.pass_length_count += 1;
        }

        Ok(())
    }

    fn into_summary(self, team_name: String) -> TeamSummary {
        let average_pass_length = (self.pass_length_count > 0).then(|| {
            round_half_even(
                self.pass_length_total / self.pass_length_count as f64,
                AVERAGE_DECIMALS,
            )
        });

        TeamSummary {
            team_name,
            events: self.events,
            passes: self.passes,
            successful_passes: self.successful_passes,
            shots: self.shots,
            average_pass_length,
        }
    }
}

// ── TeamSummary ───────────────────────────────────────────────────────────────

/// Headline numbers for one team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSummary {
    pub team_name: String,
    /// Every record attributed to the team.
    pub events: usize,
    pub passes: usize,
    /// Passes with an empty outcome.
    pub successful_passes: usize,
    /// Shot rows, not deduplicated by id.
    pub shots: usize,
    /// Mean non-empty pass length to one decimal, `None` without any.
    pub average_pass_length: Option<f64>,
}

// ── EventAggregator ───────────────────────────────────────────────────────────

/// Stateless helper that groups records by team.
pub struct EventAggregator;

impl EventAggregator {
    /// One [`TeamSummary`] per distinct `team_name`, sorted by name.
    ///
    /// Records without a `team_name` are skipped. A non-empty pass length
    /// that does not parse fails the whole summary.
    pub fn summarize_by_team(records: &[EventRecord]) -> Result<Vec<TeamSummary>> {
        // BTreeMap keeps the output sorted by team name.
        let mut teams: BTreeMap<&str, TeamStats> = BTreeMap::new();
        let mut skipped = 0usize;

        for record in records {
            let Some(team) = record.get(TEAM_NAME) else {
                skipped += 1;
                continue;
            };
            teams.entry(team).or_default().add_record(record)?;
        }

        debug!(
            "Summarised {} teams from {} records ({} without a team)",
            teams.len(),
            records.len(),
            skipped
        );

        Ok(teams
            .into_iter()
            .map(|(team, stats)| stats.into_summary(team.to_string()))
            .collect())
    }

    /// Render summaries as pretty-printed JSON.
    pub fn to_json(summaries: &[TeamSummary]) -> Result<String> {
        Ok(serde_json::to_string_pretty(summaries)?)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use events_core::error::EventError;

    fn event(team: &str, event_type: &str, outcome: &str, pass_length: &str) -> EventRecord {
        [
            (TEAM_NAME, team),
            (EVENT_TYPE_NAME, event_type),
            (OUTCOME_NAME, outcome),
            (PASS_LENGTH, pass_length),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_summarize_groups_and_sorts_by_team() {
        let records = vec![
            event("Chelsea", "Pass", "", "20"),
            event("Arsenal", "Pass", "", "10"),
            event("Arsenal", "Pass", "Incomplete", "30"),
            event("Arsenal", "Shot", "", ""),
            event("Arsenal", "Carry", "", ""),
        ];

        let summaries = EventAggregator::summarize_by_team(&records).unwrap();

        assert_eq!(summaries.len(), 2);
        let arsenal = &summaries[0];
        assert_eq!(arsenal.team_name, "Arsenal");
        assert_eq!(arsenal.events, 4);
        assert_eq!(arsenal.passes, 2);
        assert_eq!(arsenal.successful_passes, 1);
        assert_eq!(arsenal.shots, 1);
        assert_eq!(arsenal.average_pass_length, Some(20.0));
        assert_eq!(summaries[1].team_name, "Chelsea");
    }

    #[test]
    fn test_summarize_without_pass_lengths() {
        let records = vec![event("Arsenal", "Shot", "", "")];
        let summaries = EventAggregator::summarize_by_team(&records).unwrap();
        assert_eq!(summaries[0].average_pass_length, None);
    }

    #[test]
    fn test_summarize_skips_records_without_team() {
        let records: Vec<EventRecord> = vec![
            [(EVENT_TYPE_NAME, "Pass")].into_iter().collect(),
            event("Arsenal", "Pass", "", ""),
        ];
        let summaries = EventAggregator::summarize_by_team(&records).unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].events, 1);
    }

    #[test]
    fn test_summarize_invalid_pass_length_fails() {
        let records = vec![event("Arsenal", "Pass", "", "ten")];
        assert!(matches!(
            EventAggregator::summarize_by_team(&records),
            Err(EventError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_summarize_empty_dataset() {
        assert!(EventAggregator::summarize_by_team(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_to_json() {
        let records = vec![event("Arsenal", "Pass", "", "12.5")];
        let summaries = EventAggregator::summarize_by_team(&records).unwrap();

        let json = EventAggregator::to_json(&summaries).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["team_name"], "Arsenal");
        assert_eq!(value[0]["successful_passes"], 1);
        assert_eq!(value[0]["average_pass_length"], 12.5);
    }
}
