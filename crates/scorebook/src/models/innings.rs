use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Ball, BattingScorecardRow, BowlingScorecardRow, Scorecard, TeamId};
use crate::rules;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Innings {
    pub number: u8,
    pub batting_team: TeamId,
    pub bowling_team: TeamId,
    pub runs: i32,
    pub wickets: u32,
    pub balls: u32,
    pub overs: Decimal,
    pub extras: i32,
    pub ball_by_ball: Vec<Ball>,
    pub batting_scorecard: Scorecard<BattingScorecardRow>,
    pub bowling_scorecard: Scorecard<BowlingScorecardRow>,
}

impl Innings {
    pub fn new(number: u8, batting_team: TeamId, bowling_team: TeamId) -> Self {
        Self {
            number,
            batting_team,
            bowling_team,
            runs: 0,
            wickets: 0,
            balls: 0,
            overs: Decimal::ZERO,
            extras: 0,
            ball_by_ball: Vec::new(),
            batting_scorecard: Scorecard::default(),
            bowling_scorecard: Scorecard::default(),
        }
    }

    /// Zero-based index of the over currently being bowled.
    pub fn over_index(&self) -> u32 {
        self.balls / rules::BALLS_PER_OVER
    }

    pub fn refresh_overs(&mut self) {
        self.overs = rules::overs_from_balls(self.balls);
    }

    /// All out, or the full allocation of overs bowled.
    pub fn is_closed(&self, max_overs: u32) -> bool {
        self.wickets >= rules::WICKETS_PER_INNINGS || self.balls >= max_overs * rules::BALLS_PER_OVER
    }
}
