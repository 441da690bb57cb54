pub mod ball;
mod common;
pub mod match_dto;

pub use ball::{ScoreBallRequest, SelectPairRequest, SetBowlerRequest};
pub use match_dto::{CreateMatchRequest, StartMatchRequest, TeamRefRequest};
