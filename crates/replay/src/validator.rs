use tracing::warn;

use crate::fixture::{ReplayEvent, ReplayFixture};
use crate::{ReplayError, Result};

pub const FORMAT_VERSION: &str = "1.0.0";

/// Structural checks run before any event is replayed.
pub struct FixtureValidator;

impl FixtureValidator {
    pub fn validate(fixture: &ReplayFixture) -> Result<ValidationReport> {
        let mut report = ValidationReport::default();

        if fixture.format_version != FORMAT_VERSION {
            report.errors.push(format!(
                "Unsupported format version: {}. Expected {}",
                fixture.format_version, FORMAT_VERSION
            ));
        }

        if let Err(message) = fixture.game.validate_teams() {
            report.errors.push(message.to_string());
        }
        let toss_winner = fixture.toss.toss_winner.trim();
        if toss_winner != fixture.game.team1.team_id.trim()
            && toss_winner != fixture.game.team2.team_id.trim()
        {
            report
                .errors
                .push(format!("Toss winner '{}' is not playing", toss_winner));
        }
        if fixture.game.max_overs.is_none() {
            report
                .warnings
                .push("Match has no max_overs; the configured default applies".to_string());
        }

        if fixture.events.is_empty() {
            report
                .errors
                .push("At least one event is required".to_string());
        }
        if matches!(fixture.events.first(), Some(ReplayEvent::Undo)) {
            report
                .warnings
                .push("Fixture starts with an undo, which has nothing to remove".to_string());
        }
        if !fixture
            .events
            .iter()
            .any(|event| matches!(event, ReplayEvent::Pair(_)))
        {
            report
                .warnings
                .push("No batting pair is selected; strike is not tracked".to_string());
        }

        for (idx, event) in fixture.events.iter().enumerate() {
            let outcome = match event {
                ReplayEvent::Ball(request) => request.clone().into_input().map(|_| ()),
                ReplayEvent::Pair(request) => request.players().map(|_| ()),
                ReplayEvent::Bowler(request) => request.bowler_id().map(|_| ()),
                ReplayEvent::Undo => Ok(()),
            };
            if let Err(e) = outcome {
                report
                    .errors
                    .push(format!("Event {} ({}): {}", idx + 1, event.kind(), e));
            }
        }

        if !report.errors.is_empty() {
            Err(ReplayError::ValidationError(format!(
                "Validation failed with {} error(s): {}",
                report.errors.len(),
                report.errors.join("; ")
            )))
        } else {
            Ok(report)
        }
    }
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }
}
