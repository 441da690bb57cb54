use serde::{Deserialize, Serialize};

use super::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtraType {
    #[default]
    None,
    Wide,
    NoBall,
    Bye,
    LegBye,
}

impl ExtraType {
    /// Wides and no-balls carry the fixed penalty and may be re-bowled.
    pub fn is_penalty(self) -> bool {
        matches!(self, Self::Wide | Self::NoBall)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Wide => "wide",
            Self::NoBall => "noball",
            Self::Bye => "bye",
            Self::LegBye => "legbye",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WicketType {
    #[default]
    None,
    Bowled,
    Caught,
    Lbw,
    RunOut,
    Stumped,
    HitWicket,
}

impl WicketType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bowled => "bowled",
            Self::Caught => "caught",
            Self::Lbw => "lbw",
            Self::RunOut => "runout",
            Self::Stumped => "stumped",
            Self::HitWicket => "hitwicket",
        }
    }
}

/// Where the ball ended up. Zone boundaries carry a base value plus any runs
/// completed by the batters; `Four` and `Six` are the fixed-value shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryType {
    #[default]
    None,
    StraightWallAir,
    StraightWallGround,
    Ceiling,
    CeilingBackwall,
    SideWallAir,
    SideWallGround,
    NetAir,
    NetGround,
    Four,
    Six,
}

impl BoundaryType {
    pub const ALL: [BoundaryType; 11] = [
        Self::None,
        Self::StraightWallAir,
        Self::StraightWallGround,
        Self::Ceiling,
        Self::CeilingBackwall,
        Self::SideWallAir,
        Self::SideWallGround,
        Self::NetAir,
        Self::NetGround,
        Self::Four,
        Self::Six,
    ];

    /// True for the physical zones that accept runner-added runs.
    pub fn is_zone(self) -> bool {
        !matches!(self, Self::None | Self::Four | Self::Six)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::StraightWallAir => "straight_wall_air",
            Self::StraightWallGround => "straight_wall_ground",
            Self::Ceiling => "ceiling",
            Self::CeilingBackwall => "ceiling_backwall",
            Self::SideWallAir => "side_wall_air",
            Self::SideWallGround => "side_wall_ground",
            Self::NetAir => "net_air",
            Self::NetGround => "net_ground",
            Self::Four => "four",
            Self::Six => "six",
        }
    }
}

/// One recorded delivery. Never edited after it is appended to the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub over_number: u32,
    pub ball_number: u32,
    pub bowler: PlayerId,
    pub batsman: PlayerId,
    pub runs: i32,
    pub extras: i32,
    pub extra_type: ExtraType,
    pub is_wicket: bool,
    pub wicket_type: WicketType,
    pub dismissed_player: Option<PlayerId>,
    pub boundary_type: BoundaryType,
    pub additional_runs: u8,
    #[serde(default)]
    pub wicket_penalty: i32,
    #[serde(default = "default_legal")]
    pub legal: bool,
    /// Bowler selection in force when the delivery was scored; put back on undo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_bowler: Option<PlayerId>,
}

fn default_legal() -> bool {
    true
}

impl Ball {
    /// Signed contribution of this delivery to the innings total.
    pub fn net_runs(&self) -> i32 {
        self.runs + self.extras + self.wicket_penalty
    }

    pub fn involves_batter(&self, player: PlayerId) -> bool {
        self.batsman == player || self.dismissed_player == Some(player)
    }
}

/// Raw delivery event as entered by the scorer, before resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BallInput {
    pub bowler: PlayerId,
    pub batsman: PlayerId,
    pub runs: u32,
    pub extras: u32,
    pub extra_type: ExtraType,
    pub is_wicket: bool,
    pub wicket_type: WicketType,
    pub dismissed_player: Option<PlayerId>,
    pub boundary_type: BoundaryType,
    pub additional_runs: u8,
}

impl BallInput {
    pub fn new(bowler: PlayerId, batsman: PlayerId) -> Self {
        Self {
            bowler,
            batsman,
            runs: 0,
            extras: 0,
            extra_type: ExtraType::None,
            is_wicket: false,
            wicket_type: WicketType::None,
            dismissed_player: None,
            boundary_type: BoundaryType::None,
            additional_runs: 0,
        }
    }

    pub fn runs(mut self, runs: u32) -> Self {
        self.runs = runs;
        self
    }

    pub fn boundary(mut self, boundary_type: BoundaryType, additional_runs: u8) -> Self {
        self.boundary_type = boundary_type;
        self.additional_runs = additional_runs;
        self
    }

    pub fn extra(mut self, extra_type: ExtraType, extras: u32) -> Self {
        self.extra_type = extra_type;
        self.extras = extras;
        self
    }

    pub fn wicket(mut self, wicket_type: WicketType, dismissed: Option<PlayerId>) -> Self {
        self.is_wicket = true;
        self.wicket_type = wicket_type;
        self.dismissed_player = dismissed;
        self
    }
}
