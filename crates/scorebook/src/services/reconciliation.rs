//! Read-only cross-check of the four innings aggregates.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::ReconciliationMode;
use crate::error::{Result, ScoringError};
use crate::models::{Innings, Match};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    BattingRunsPlusExtras,
    BowlingRuns,
    BallLogRuns,
    BallLogExtras,
    BallLogWickets,
    BallLogLegalBalls,
    BattingBallsFaced,
    BowlingBallsBowled,
}

impl Check {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BattingRunsPlusExtras => "batting runs + extras",
            Self::BowlingRuns => "bowling runs conceded",
            Self::BallLogRuns => "ball-by-ball runs",
            Self::BallLogExtras => "ball-by-ball extras",
            Self::BallLogWickets => "ball-by-ball wickets",
            Self::BallLogLegalBalls => "ball-by-ball legal balls",
            Self::BattingBallsFaced => "batting balls faced",
            Self::BowlingBallsBowled => "bowling balls bowled",
        }
    }
}

/// An innings counter that disagrees with the aggregate it is checked against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discrepancy {
    pub check: Check,
    pub expected: i64,
    pub actual: i64,
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: innings has {}, aggregate has {}",
            self.check.as_str(),
            self.expected,
            self.actual
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationReport {
    pub is_valid: bool,
    pub discrepancies: Vec<Discrepancy>,
}

pub fn reconcile(innings: &Innings) -> ReconciliationReport {
    let runs = i64::from(innings.runs);
    let extras = i64::from(innings.extras);
    let log = &innings.ball_by_ball;

    let checks = [
        (
            Check::BattingRunsPlusExtras,
            runs,
            innings.batting_scorecard.iter().map(|r| i64::from(r.runs)).sum::<i64>() + extras,
        ),
        (
            Check::BowlingRuns,
            runs,
            innings.bowling_scorecard.iter().map(|r| i64::from(r.runs)).sum(),
        ),
        (
            Check::BallLogRuns,
            runs,
            log.iter().map(|b| i64::from(b.net_runs())).sum(),
        ),
        (
            Check::BallLogExtras,
            extras,
            log.iter().map(|b| i64::from(b.extras)).sum(),
        ),
        (
            Check::BallLogWickets,
            i64::from(innings.wickets),
            log.iter().filter(|b| b.is_wicket).count() as i64,
        ),
        (
            Check::BallLogLegalBalls,
            i64::from(innings.balls),
            log.iter().filter(|b| b.legal).count() as i64,
        ),
        (
            Check::BattingBallsFaced,
            i64::from(innings.balls),
            innings.batting_scorecard.iter().map(|r| i64::from(r.balls)).sum(),
        ),
        (
            Check::BowlingBallsBowled,
            i64::from(innings.balls),
            innings.bowling_scorecard.iter().map(|r| i64::from(r.balls)).sum(),
        ),
    ];

    let discrepancies: Vec<Discrepancy> = checks
        .into_iter()
        .filter(|(_, expected, actual)| expected != actual)
        .map(|(check, expected, actual)| Discrepancy {
            check,
            expected,
            actual,
        })
        .collect();

    ReconciliationReport {
        is_valid: discrepancies.is_empty(),
        discrepancies,
    }
}

/// Reconciles every innings of the match; strict mode turns the first failure into an error.
pub fn enforce(game: &Match, mode: ReconciliationMode) -> Result<()> {
    for innings in &game.innings {
        let report = reconcile(innings);
        if report.is_valid {
            continue;
        }

        match mode {
            ReconciliationMode::Strict => {
                return Err(ScoringError::Reconciliation {
                    innings: innings.number,
                    discrepancies: report.discrepancies,
                });
            }
            ReconciliationMode::Advisory => {
                for discrepancy in &report.discrepancies {
                    warn!(
                        match_id = %game.match_id,
                        innings = innings.number,
                        "Reconciliation mismatch: {}",
                        discrepancy
                    );
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn empty_innings_is_valid() {
        let innings = Innings::new(1, Uuid::new_v4(), Uuid::new_v4());
        let report = reconcile(&innings);
        assert!(report.is_valid);
        assert!(report.discrepancies.is_empty());
    }

    #[test]
    fn reports_drifted_totals() {
        let mut innings = Innings::new(1, Uuid::new_v4(), Uuid::new_v4());
        innings.runs = 10;
        innings.balls = 1;

        let report = reconcile(&innings);
        assert!(!report.is_valid);
        let checks: Vec<Check> = report.discrepancies.iter().map(|d| d.check).collect();
        assert!(checks.contains(&Check::BattingRunsPlusExtras));
        assert!(checks.contains(&Check::BowlingRuns));
        assert!(checks.contains(&Check::BallLogRuns));
        assert!(checks.contains(&Check::BallLogLegalBalls));
        assert!(!checks.contains(&Check::BallLogExtras));
    }
}
