//! YYC house rules.
//!
//! An over is four balls, an innings closes at seven wickets, and both
//! wides/no-balls and dismissals are worth a flat four runs (added for the
//! former, deducted for the latter).

use rust_decimal::{Decimal, RoundingStrategy};

pub const BALLS_PER_OVER: u32 = 4;
pub const WICKETS_PER_INNINGS: u32 = 7;
pub const DEFAULT_MAX_OVERS: u32 = 8;

/// Overs at the end of an innings in which wides and no-balls count as legal balls.
pub const ENDGAME_OVERS: u32 = 2;

/// A batting pair stays in for this many overs.
pub const PAIR_OVERS: u32 = 2;

pub const WIDE_NO_BALL_PENALTY: i32 = 4;
pub const WICKET_PENALTY: i32 = -4;
pub const MAX_ADDITIONAL_RUNS: u8 = 3;
pub const MAX_RUNS_PER_BALL: u32 = 6;
pub const MAX_EXTRAS_PER_BALL: u32 = 6;

/// Chasing-side margins are reported as `RESULT_WICKET_BASE - wickets lost`.
pub const RESULT_WICKET_BASE: u32 = 8;

pub const WIN_POINTS: u32 = 2;
pub const TIE_POINTS: u32 = 1;

/// Overs in the tenths-for-partial notation: 7 balls is `1.3`.
pub fn overs_from_balls(balls: u32) -> Decimal {
    Decimal::from(balls / BALLS_PER_OVER) + Decimal::new(i64::from(balls % BALLS_PER_OVER), 1)
}

/// Overs as a true fraction: 7 balls is `1.75`.
pub fn overs_exact(balls: u32) -> Decimal {
    Decimal::from(balls) / Decimal::from(BALLS_PER_OVER)
}

/// `numerator / denominator` to two decimals, zero when the denominator is zero.
pub fn ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    (numerator / denominator).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub fn strike_rate(runs: i32, balls: u32) -> Decimal {
    ratio(Decimal::from(runs) * Decimal::ONE_HUNDRED, Decimal::from(balls))
}

/// Runs conceded per completed over; partial overs are ignored.
pub fn economy(runs: i32, balls: u32) -> Decimal {
    ratio(Decimal::from(runs), Decimal::from(balls / BALLS_PER_OVER))
}
