use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{BattingScorecardRow, BowlingScorecardRow, PlayerId};
use crate::rules;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BattingStats {
    pub innings: u32,
    pub runs: i32,
    pub balls_faced: u32,
    pub fours: u32,
    pub sixes: u32,
    pub highest_score: i32,
    pub not_outs: u32,
    pub strike_rate: Decimal,
    pub average: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BowlingFigures {
    pub wickets: u32,
    pub runs: i32,
}

impl BowlingFigures {
    /// More wickets wins; equal wickets for fewer runs wins.
    pub fn beats(&self, other: &BowlingFigures) -> bool {
        self.wickets > other.wickets || (self.wickets == other.wickets && self.runs < other.runs)
    }
}

impl fmt::Display for BowlingFigures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.wickets, self.runs)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BowlingStats {
    pub innings: u32,
    pub balls: u32,
    pub overs: Decimal,
    pub runs_conceded: i32,
    pub wickets: u32,
    pub maidens: u32,
    pub economy: Decimal,
    pub average: Decimal,
    pub best_figures: Option<BowlingFigures>,
}

/// Career aggregates, folded in from scorecards when a match completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerCareer {
    pub player_id: PlayerId,
    pub batting: BattingStats,
    pub bowling: BowlingStats,
}

impl PlayerCareer {
    pub fn new(player_id: PlayerId) -> Self {
        Self {
            player_id,
            batting: BattingStats::default(),
            bowling: BowlingStats::default(),
        }
    }

    pub fn absorb_batting(&mut self, row: &BattingScorecardRow) {
        let stats = &mut self.batting;
        stats.innings += 1;
        stats.runs += row.runs;
        stats.balls_faced += row.balls;
        stats.fours += row.fours;
        stats.sixes += row.sixes;
        if !row.is_out {
            stats.not_outs += 1;
        }
        if stats.innings == 1 || row.runs > stats.highest_score {
            stats.highest_score = row.runs;
        }

        let outs = stats.innings - stats.not_outs;
        stats.average = rules::ratio(Decimal::from(stats.runs), Decimal::from(outs));
        stats.strike_rate = rules::strike_rate(stats.runs, stats.balls_faced);
    }

    pub fn absorb_bowling(&mut self, row: &BowlingScorecardRow) {
        let stats = &mut self.bowling;
        stats.innings += 1;
        stats.balls += row.balls;
        stats.overs = rules::overs_exact(stats.balls);
        stats.runs_conceded += row.runs;
        stats.wickets += row.wickets;
        stats.maidens += row.maidens;
        stats.average = rules::ratio(Decimal::from(stats.runs_conceded), Decimal::from(stats.wickets));
        stats.economy = rules::ratio(Decimal::from(stats.runs_conceded), stats.overs);

        let figures = BowlingFigures {
            wickets: row.wickets,
            runs: row.runs,
        };
        if stats.best_figures.is_none_or(|best| figures.beats(&best)) {
            stats.best_figures = Some(figures);
        }
    }
}
