use serde::{Deserialize, Serialize};
use validator::Validate;

use super::common::{
    parse_identifier, parse_optional_identifier, validate_identifier, validate_optional_identifier,
};
use crate::error::{Result, ScoringError};
use crate::models::{BallInput, BoundaryType, ExtraType, PlayerId, WicketType};

/// Request payload for scoring a single delivery
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ScoreBallRequest {
    #[validate(custom(function = "validate_identifier"))]
    #[serde(default)]
    pub bowler: String,

    #[validate(custom(function = "validate_identifier"))]
    #[serde(default)]
    pub batsman: String,

    #[validate(range(max = 6, message = "Runs must be between 0 and 6"))]
    #[serde(default)]
    pub runs: u32,

    #[validate(range(max = 6, message = "Extras must be between 0 and 6"))]
    #[serde(default)]
    pub extras: u32,

    #[serde(default)]
    pub extra_type: ExtraType,

    #[serde(default)]
    pub is_wicket: bool,

    #[serde(default)]
    pub wicket_type: WicketType,

    #[validate(custom(function = "validate_optional_identifier"))]
    #[serde(default)]
    pub dismissed_player: Option<String>,

    #[serde(default)]
    pub boundary_type: BoundaryType,

    #[validate(range(max = 3, message = "Additional runs must be between 0 and 3"))]
    #[serde(default)]
    pub additional_runs: u8,
}

impl ScoreBallRequest {
    /// Validates the payload and converts it into a delivery event.
    ///
    /// A wicket without a wicket type is recorded as bowled; the dismissed
    /// player is only kept for wickets.
    pub fn into_input(self) -> Result<BallInput> {
        self.validate()?;

        let bowler = parse_identifier("bowler", &self.bowler)?;
        let batsman = parse_identifier("batsman", &self.batsman)?;
        if bowler == batsman {
            return Err(ScoringError::validation(
                "bowler: Bowler and batsman must be different players",
            ));
        }

        let (wicket_type, dismissed_player) = if self.is_wicket {
            let wicket_type = match self.wicket_type {
                WicketType::None => WicketType::Bowled,
                other => other,
            };
            let dismissed =
                parse_optional_identifier("dismissed_player", self.dismissed_player.as_deref())?;
            (wicket_type, dismissed)
        } else {
            (WicketType::None, None)
        };

        Ok(BallInput {
            bowler,
            batsman,
            runs: self.runs,
            extras: self.extras,
            extra_type: self.extra_type,
            is_wicket: self.is_wicket,
            wicket_type,
            dismissed_player,
            boundary_type: self.boundary_type,
            additional_runs: self.additional_runs,
        })
    }
}

/// Request payload for putting a batting pair in
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SelectPairRequest {
    #[validate(custom(function = "validate_identifier"))]
    pub striker: String,

    #[validate(custom(function = "validate_identifier"))]
    pub non_striker: String,
}

impl SelectPairRequest {
    pub fn players(&self) -> Result<(PlayerId, PlayerId)> {
        self.validate()?;
        Ok((
            parse_identifier("striker", &self.striker)?,
            parse_identifier("non_striker", &self.non_striker)?,
        ))
    }
}

/// Request payload for changing the bowler
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SetBowlerRequest {
    #[validate(custom(function = "validate_identifier"))]
    pub bowler: String,
}

impl SetBowlerRequest {
    pub fn bowler_id(&self) -> Result<PlayerId> {
        self.validate()?;
        parse_identifier("bowler", &self.bowler)
    }
}
