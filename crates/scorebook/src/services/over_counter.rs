//! Legal-ball accounting for 4-ball overs.

use crate::models::ExtraType;
use crate::rules;

/// Display position of a delivery: over number and ball within the over, both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BallPosition {
    pub over_number: u32,
    pub ball_number: u32,
}

/// Position of the next delivery given the legal balls bowled so far.
pub fn position(balls: u32) -> BallPosition {
    BallPosition {
        over_number: balls / rules::BALLS_PER_OVER + 1,
        ball_number: balls % rules::BALLS_PER_OVER + 1,
    }
}

/// Wides and no-balls are re-bowled, except in the last two overs of the
/// innings where they count as one of the over's four balls.
pub fn is_legal(extra_type: ExtraType, over_index: u32, max_overs: u32) -> bool {
    if !extra_type.is_penalty() {
        return true;
    }
    over_index >= max_overs.saturating_sub(rules::ENDGAME_OVERS)
}

/// True when a legal delivery took the count to the end of an over.
pub fn completes_over(balls_after: u32, legal: bool) -> bool {
    legal && balls_after > 0 && balls_after % rules::BALLS_PER_OVER == 0
}
