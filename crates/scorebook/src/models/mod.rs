pub mod ball;
pub mod innings;
pub mod match_record;
pub mod player;
pub mod scorecard;
pub mod team;

use uuid::Uuid;

pub type PlayerId = Uuid;
pub type TeamId = Uuid;

pub use ball::{Ball, BallInput, BoundaryType, ExtraType, WicketType};
pub use innings::Innings;
pub use match_record::{BattingPair, Match, MatchStatus, TeamRef, TossDecision};
pub use player::{BattingStats, BowlingFigures, BowlingStats, PlayerCareer};
pub use scorecard::{BattingScorecardRow, BowlingScorecardRow, Scorecard, ScorecardRow};
pub use team::{TeamOutcome, TeamStanding};
