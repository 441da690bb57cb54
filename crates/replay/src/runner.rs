use std::sync::Arc;

use scorebook::models::{Match, TeamStanding};
use scorebook::services::ReconciliationReport;
use scorebook::{MatchNotifier, ScoringConfig, ScoringService};
use tracing::{debug, info};

use crate::fixture::{ReplayEvent, ReplayFixture};
use crate::{ReplayError, Result};

/// Logs every stored match state as the replay advances.
struct ProgressLog;

impl MatchNotifier for ProgressLog {
    fn notify(&self, game: &Match) {
        match game.current() {
            Some(innings) => debug!(
                version = game.version,
                status = game.status.as_str(),
                innings = innings.number,
                "{}/{} ({} ov)",
                innings.runs,
                innings.wickets,
                innings.overs
            ),
            None => debug!(version = game.version, status = game.status.as_str(), "No innings"),
        }
    }
}

#[derive(Debug)]
pub struct ReplayOutcome {
    pub game: Match,
    pub events_applied: usize,
    pub reports: Vec<ReconciliationReport>,
    pub standings: Vec<TeamStanding>,
}

/// Drives a fixture through a fresh in-memory scoring service.
pub struct Replayer {
    service: ScoringService,
}

impl Replayer {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            service: ScoringService::in_memory(config).with_listener(Arc::new(ProgressLog)),
        }
    }

    pub async fn run(&self, fixture: ReplayFixture) -> Result<ReplayOutcome> {
        let scheduled = self.service.create_match(fixture.game).await?;
        let match_id = scheduled.match_id;
        info!(
            "Replaying match {}: {} v {}",
            scheduled.match_number, scheduled.team1.name, scheduled.team2.name
        );

        let mut game = self.service.start_match(match_id, fixture.toss).await?;
        let total = fixture.events.len();

        for (idx, event) in fixture.events.into_iter().enumerate() {
            let kind = event.kind();
            let applied = match event {
                ReplayEvent::Ball(request) => self.service.score_ball(match_id, request).await,
                ReplayEvent::Undo => self.service.undo_last_ball(match_id).await,
                ReplayEvent::Pair(request) => {
                    self.service.select_batting_pair(match_id, request).await
                }
                ReplayEvent::Bowler(request) => self.service.set_bowler(match_id, request).await,
            };
            game = applied.map_err(|source| ReplayError::EventRejected {
                index: idx + 1,
                kind,
                source,
            })?;
            debug!("[{}/{}] {} applied", idx + 1, total, kind);
        }

        let reports = self.service.reconcile_match(match_id).await?;
        let mut standings = Vec::new();
        for team_id in [game.team1.team_id, game.team2.team_id] {
            standings.push(self.service.team_standing(team_id).await?);
        }

        Ok(ReplayOutcome {
            game,
            events_applied: total,
            reports,
            standings,
        })
    }
}
