//! Turns a raw delivery event into the runs, extras and penalty it is worth.

use crate::models::{Ball, BallInput, BoundaryType, ExtraType, PlayerId};
use crate::rules;

use super::over_counter::BallPosition;

/// Value of a delivery once the house rules have been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedBall {
    /// Runs off the bat; always zero on a wicket.
    pub runs: i32,
    pub extras: i32,
    /// Zero, or the (negative) dismissal penalty.
    pub wicket_penalty: i32,
}

impl ResolvedBall {
    /// Signed change to the innings total.
    pub fn innings_delta(&self) -> i32 {
        self.runs + self.extras + self.wicket_penalty
    }
}

/// Runs scored for where the ball went.
///
/// `runs` is only read for [`BoundaryType::None`]; zone boundaries add the
/// runner's `additional` runs, capped at two for the air-straight and net zones.
pub fn boundary_runs(boundary: BoundaryType, runs: u32, additional: u8) -> i32 {
    let additional = i32::from(additional);
    let capped = additional.min(2);
    match boundary {
        BoundaryType::None => i32::try_from(runs).unwrap_or(i32::MAX),
        BoundaryType::StraightWallAir => 6 + capped,
        BoundaryType::StraightWallGround => 4 + additional,
        BoundaryType::Ceiling => 2 + additional,
        BoundaryType::CeilingBackwall => 4,
        BoundaryType::SideWallAir => 2 + additional,
        BoundaryType::SideWallGround => 1 + additional,
        BoundaryType::NetAir => 2 + capped,
        BoundaryType::NetGround => 1 + capped,
        BoundaryType::Four => 4,
        BoundaryType::Six => 6,
    }
}

/// Wides and no-balls are a flat penalty; the scorer's figure is ignored.
pub fn extras_penalty(extra_type: ExtraType, supplied: u32) -> i32 {
    if extra_type.is_penalty() {
        rules::WIDE_NO_BALL_PENALTY
    } else {
        i32::try_from(supplied).unwrap_or(i32::MAX)
    }
}

pub fn resolve(input: &BallInput) -> ResolvedBall {
    let extras = extras_penalty(input.extra_type, input.extras);

    if input.is_wicket {
        return ResolvedBall {
            runs: 0,
            extras,
            wicket_penalty: rules::WICKET_PENALTY,
        };
    }

    ResolvedBall {
        runs: boundary_runs(input.boundary_type, input.runs, input.additional_runs),
        extras,
        wicket_penalty: 0,
    }
}

/// Builds the log record for a resolved delivery.
pub fn finalize(
    input: &BallInput,
    resolved: ResolvedBall,
    position: BallPosition,
    legal: bool,
    dismissed_player: Option<PlayerId>,
) -> Ball {
    Ball {
        over_number: position.over_number,
        ball_number: position.ball_number,
        bowler: input.bowler,
        batsman: input.batsman,
        runs: resolved.runs,
        extras: resolved.extras,
        extra_type: input.extra_type,
        is_wicket: input.is_wicket,
        wicket_type: input.wicket_type,
        dismissed_player,
        boundary_type: input.boundary_type,
        additional_runs: input.additional_runs,
        wicket_penalty: resolved.wicket_penalty,
        legal,
        selected_bowler: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WicketType;
    use uuid::Uuid;

    fn input() -> BallInput {
        BallInput::new(Uuid::new_v4(), Uuid::new_v4())
    }

    #[test]
    fn zone_table() {
        let expected: [(BoundaryType, [i32; 4]); 8] = [
            (BoundaryType::StraightWallAir, [6, 7, 8, 8]),
            (BoundaryType::StraightWallGround, [4, 5, 6, 7]),
            (BoundaryType::Ceiling, [2, 3, 4, 5]),
            (BoundaryType::CeilingBackwall, [4, 4, 4, 4]),
            (BoundaryType::SideWallAir, [2, 3, 4, 5]),
            (BoundaryType::SideWallGround, [1, 2, 3, 4]),
            (BoundaryType::NetAir, [2, 3, 4, 4]),
            (BoundaryType::NetGround, [1, 2, 3, 3]),
        ];

        for (boundary, runs) in expected {
            for (additional, want) in runs.into_iter().enumerate() {
                assert_eq!(
                    boundary_runs(boundary, 5, additional as u8),
                    want,
                    "{} +{}",
                    boundary.as_str(),
                    additional
                );
            }
        }
    }

    #[test]
    fn plain_runs_pass_through() {
        assert_eq!(boundary_runs(BoundaryType::None, 3, 2), 3);
        assert_eq!(boundary_runs(BoundaryType::Four, 1, 3), 4);
        assert_eq!(boundary_runs(BoundaryType::Six, 0, 3), 6);
    }

    #[test]
    fn wide_and_no_ball_ignore_supplied_extras() {
        assert_eq!(extras_penalty(ExtraType::Wide, 1), 4);
        assert_eq!(extras_penalty(ExtraType::NoBall, 0), 4);
        assert_eq!(extras_penalty(ExtraType::Bye, 2), 2);
        assert_eq!(extras_penalty(ExtraType::None, 0), 0);
    }

    #[test]
    fn wicket_discards_runs_and_applies_penalty() {
        let ball = input()
            .boundary(BoundaryType::StraightWallAir, 2)
            .wicket(WicketType::Caught, None);
        let resolved = resolve(&ball);

        assert_eq!(resolved.runs, 0);
        assert_eq!(resolved.extras, 0);
        assert_eq!(resolved.innings_delta(), -4);
    }

    #[test]
    fn wicket_on_no_ball_keeps_extras() {
        let ball = input()
            .extra(ExtraType::NoBall, 0)
            .wicket(WicketType::RunOut, None);
        let resolved = resolve(&ball);

        assert_eq!(resolved.extras, 4);
        assert_eq!(resolved.innings_delta(), 0);
    }
}
