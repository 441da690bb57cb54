use serde::{Deserialize, Serialize};

use super::TeamId;
use crate::rules;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamOutcome {
    Won,
    Lost,
    Tied,
}

/// Points-table row for one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub team_id: TeamId,
    pub matches_played: u32,
    pub matches_won: u32,
    pub matches_lost: u32,
    pub matches_tied: u32,
    pub points: u32,
}

impl TeamStanding {
    pub fn new(team_id: TeamId) -> Self {
        Self {
            team_id,
            matches_played: 0,
            matches_won: 0,
            matches_lost: 0,
            matches_tied: 0,
            points: 0,
        }
    }

    pub fn record(&mut self, outcome: TeamOutcome) {
        self.matches_played += 1;
        match outcome {
            TeamOutcome::Won => {
                self.matches_won += 1;
                self.points += rules::WIN_POINTS;
            }
            TeamOutcome::Lost => self.matches_lost += 1,
            TeamOutcome::Tied => {
                self.matches_tied += 1;
                self.points += rules::TIE_POINTS;
            }
        }
    }
}
