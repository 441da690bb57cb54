use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::common::{parse_identifier, validate_identifier};
use crate::error::{Result, ScoringError};
use crate::models::{Match, TeamId, TeamRef, TossDecision};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TeamRefRequest {
    #[validate(custom(function = "validate_identifier"))]
    pub team_id: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(min = 1, max = 3, message = "Short name must be 1 to 3 characters"))]
    pub short_name: String,
}

impl TeamRefRequest {
    fn into_team_ref(self, field: &str) -> Result<TeamRef> {
        Ok(TeamRef {
            team_id: parse_identifier(field, &self.team_id)?,
            name: self.name.trim().to_string(),
            short_name: self.short_name.trim().to_uppercase(),
        })
    }
}

/// Request payload for scheduling a new match
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMatchRequest {
    #[validate(range(min = 1, message = "Match number must be positive"))]
    pub match_number: u32,

    #[validate(nested)]
    pub team1: TeamRefRequest,

    #[validate(nested)]
    pub team2: TeamRefRequest,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Venue must be between 1 and 255 characters"
    ))]
    pub venue: String,

    pub date: NaiveDateTime,

    #[validate(range(min = 1, max = 50, message = "Overs must be between 1 and 50"))]
    pub max_overs: Option<u32>,
}

impl CreateMatchRequest {
    /// Additional validation that requires multiple fields
    pub fn validate_teams(&self) -> std::result::Result<(), &'static str> {
        let team1 = Uuid::parse_str(self.team1.team_id.trim());
        let team2 = Uuid::parse_str(self.team2.team_id.trim());
        match (team1, team2) {
            (Ok(team1), Ok(team2)) if team1 == team2 => Err("A match needs two different teams"),
            _ => Ok(()),
        }
    }

    pub fn into_match(self, default_max_overs: u32) -> Result<Match> {
        self.validate()?;
        self.validate_teams().map_err(ScoringError::validation)?;

        let max_overs = self.max_overs.unwrap_or(default_max_overs);
        Ok(Match::new(
            self.match_number,
            self.team1.into_team_ref("team1.team_id")?,
            self.team2.into_team_ref("team2.team_id")?,
            self.venue.trim().to_string(),
            self.date,
            max_overs,
        ))
    }
}

/// Request payload for recording the toss and starting the first innings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StartMatchRequest {
    #[validate(custom(function = "validate_identifier"))]
    #[serde(default)]
    pub toss_winner: String,

    pub toss_decision: TossDecision,
}

impl StartMatchRequest {
    pub fn toss_winner_id(&self) -> Result<TeamId> {
        self.validate()?;
        parse_identifier("toss_winner", &self.toss_winner)
    }
}
