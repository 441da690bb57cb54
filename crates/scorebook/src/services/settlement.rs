//! What a completed match contributes to the points table and player careers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, ScoringError};
use crate::models::{
    BattingScorecardRow, BowlingScorecardRow, Match, MatchStatus, TeamId, TeamOutcome,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub match_id: Uuid,
    pub outcomes: Vec<(TeamId, TeamOutcome)>,
    pub batting: Vec<BattingScorecardRow>,
    pub bowling: Vec<BowlingScorecardRow>,
}

pub fn settle(game: &Match) -> Result<Settlement> {
    if game.status != MatchStatus::Completed {
        return Err(ScoringError::InvalidState(format!(
            "match {} is {}; only completed matches are settled",
            game.match_number,
            game.status.as_str()
        )));
    }

    let (home, away) = (game.team1.team_id, game.team2.team_id);
    let outcomes = match game.winner {
        Some(winner) if winner == home => vec![(home, TeamOutcome::Won), (away, TeamOutcome::Lost)],
        Some(winner) if winner == away => vec![(away, TeamOutcome::Won), (home, TeamOutcome::Lost)],
        Some(other) => {
            return Err(ScoringError::InvalidState(format!(
                "winner {} is not playing in match {}",
                other, game.match_number
            )));
        }
        None => vec![(home, TeamOutcome::Tied), (away, TeamOutcome::Tied)],
    };

    let batting = game
        .innings
        .iter()
        .flat_map(|innings| innings.batting_scorecard.iter().cloned())
        .collect();
    let bowling = game
        .innings
        .iter()
        .flat_map(|innings| innings.bowling_scorecard.iter().cloned())
        .collect();

    Ok(Settlement {
        match_id: game.match_id,
        outcomes,
        batting,
        bowling,
    })
}
