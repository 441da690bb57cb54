use scorebook::dto::{CreateMatchRequest, ScoreBallRequest, SelectPairRequest, SetBowlerRequest, StartMatchRequest};
use serde::{Deserialize, Serialize};

/// A recorded scoring session: the match, the toss and every scorer action in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayFixture {
    pub format_version: String,
    #[serde(rename = "match")]
    pub game: CreateMatchRequest,
    pub toss: StartMatchRequest,
    pub events: Vec<ReplayEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ReplayEvent {
    Ball(ScoreBallRequest),
    Undo,
    Pair(SelectPairRequest),
    Bowler(SetBowlerRequest),
}

impl ReplayEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Ball(_) => "ball",
            Self::Undo => "undo",
            Self::Pair(_) => "pair",
            Self::Bowler(_) => "bowler",
        }
    }
}

impl ReplayFixture {
    pub fn from_json(content: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}
