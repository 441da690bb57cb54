use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Innings, PlayerId, TeamId};
use crate::rules;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Live,
    Completed,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Live => "live",
            Self::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TossDecision {
    Bat,
    Bowl,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRef {
    pub team_id: TeamId,
    pub name: String,
    pub short_name: String,
}

/// The two batters at the crease and the legal-ball count when they came in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattingPair {
    pub striker: PlayerId,
    pub non_striker: PlayerId,
    pub started_at_ball: u32,
}

impl BattingPair {
    pub fn contains(&self, player: PlayerId) -> bool {
        self.striker == player || self.non_striker == player
    }

    pub fn rotate(&mut self) {
        std::mem::swap(&mut self.striker, &mut self.non_striker);
    }

    /// Puts `player` on strike. No-op when the player is not in the pair.
    pub fn face(&mut self, player: PlayerId) {
        if self.non_striker == player {
            self.rotate();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub match_id: Uuid,
    pub match_number: u32,
    pub team1: TeamRef,
    pub team2: TeamRef,
    pub venue: String,
    pub date: NaiveDateTime,
    pub status: MatchStatus,
    pub toss_winner: Option<TeamId>,
    pub toss_decision: Option<TossDecision>,
    pub current_innings: u8,
    pub max_overs: u32,
    pub innings: Vec<Innings>,
    pub winner: Option<TeamId>,
    pub result_text: String,
    pub batting_pair: Option<BattingPair>,
    pub current_bowler: Option<PlayerId>,
    #[serde(default)]
    pub version: u64,
}

impl Match {
    pub fn new(
        match_number: u32,
        team1: TeamRef,
        team2: TeamRef,
        venue: String,
        date: NaiveDateTime,
        max_overs: u32,
    ) -> Self {
        Self {
            match_id: Uuid::new_v4(),
            match_number,
            team1,
            team2,
            venue,
            date,
            status: MatchStatus::Scheduled,
            toss_winner: None,
            toss_decision: None,
            current_innings: 1,
            max_overs,
            innings: Vec::new(),
            winner: None,
            result_text: String::new(),
            batting_pair: None,
            current_bowler: None,
            version: 0,
        }
    }

    pub fn current(&self) -> Option<&Innings> {
        self.innings.get(usize::from(self.current_innings).checked_sub(1)?)
    }

    pub fn current_mut(&mut self) -> Option<&mut Innings> {
        self.innings
            .get_mut(usize::from(self.current_innings).checked_sub(1)?)
    }

    pub fn team(&self, team_id: TeamId) -> Option<&TeamRef> {
        [&self.team1, &self.team2]
            .into_iter()
            .find(|team| team.team_id == team_id)
    }

    pub fn opponent_of(&self, team_id: TeamId) -> Option<TeamId> {
        if self.team1.team_id == team_id {
            Some(self.team2.team_id)
        } else if self.team2.team_id == team_id {
            Some(self.team1.team_id)
        } else {
            None
        }
    }

    pub fn team_name(&self, team_id: TeamId) -> String {
        self.team(team_id)
            .map(|team| team.name.clone())
            .unwrap_or_else(|| team_id.to_string())
    }

    /// True once the current pair has batted its two overs.
    pub fn pair_change_due(&self) -> bool {
        match (self.batting_pair, self.current()) {
            (Some(pair), Some(innings)) => {
                innings.balls.saturating_sub(pair.started_at_ball)
                    >= rules::PAIR_OVERS * rules::BALLS_PER_OVER
            }
            _ => false,
        }
    }
}
