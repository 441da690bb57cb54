//! Removal of the most recent delivery.

use tracing::debug;

use crate::error::{Result, ScoringError};
use crate::models::{Match, MatchStatus};

use super::{pair, scorecard};

/// Removes the last recorded ball and reverses every effect it had.
///
/// When innings 2 has not seen a ball yet, the innings-ending delivery of
/// innings 1 is undone and innings 1 is reopened.
pub fn undo_last_ball(game: &Match) -> Result<Match> {
    match game.status {
        MatchStatus::Scheduled => {
            return Err(ScoringError::NoOp(format!(
                "match {} has not started",
                game.match_number
            )));
        }
        MatchStatus::Completed => {
            return Err(ScoringError::InvalidState(format!(
                "match {} is completed and its result has been recorded",
                game.match_number
            )));
        }
        MatchStatus::Live => {}
    }

    let mut next = game.clone();
    let reopen = next.current_innings == 2
        && next.current().is_some_and(|innings| innings.ball_by_ball.is_empty());
    if reopen {
        next.innings.truncate(1);
        next.current_innings = 1;
    }

    let innings = next
        .current_mut()
        .ok_or_else(|| ScoringError::NotFound("current innings".to_string()))?;
    let ball = innings.ball_by_ball.pop().ok_or_else(|| {
        ScoringError::NoOp(format!("innings {} has no balls recorded", innings.number))
    })?;

    innings.runs -= ball.net_runs();
    innings.extras -= ball.extras;
    if ball.is_wicket {
        innings.wickets -= 1;
    }
    if ball.legal {
        innings.balls -= 1;
    }
    innings.refresh_overs();
    scorecard::revert_ball(innings, &ball);

    debug!(
        innings = innings.number,
        over = ball.over_number,
        ball = ball.ball_number,
        reopened = reopen,
        total = innings.runs,
        "Ball undone"
    );

    pair::after_undo(&mut next, &ball);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BallInput, BoundaryType, ExtraType, TeamRef, TossDecision, WicketType};
    use crate::services::innings::{score_ball, start_innings};
    use crate::services::pair::set_bowler;
    use uuid::Uuid;

    fn live(max_overs: u32) -> Match {
        let team = |name: &str| TeamRef {
            team_id: Uuid::new_v4(),
            name: name.to_string(),
            short_name: name[..3].to_uppercase(),
        };
        let date = chrono::NaiveDate::from_ymd_opt(2025, 5, 2)
            .unwrap()
            .and_hms_opt(19, 0, 0)
            .unwrap();
        let game = Match::new(3, team("Owls"), team("Kites"), "Court 2".into(), date, max_overs);
        let winner = game.team1.team_id;
        start_innings(&game, winner, TossDecision::Bat).unwrap()
    }

    #[test]
    fn empty_log_is_a_no_op() {
        let err = undo_last_ball(&live(8)).unwrap_err();
        assert!(err.is_no_op());
    }

    #[test]
    fn scheduled_match_is_a_no_op() {
        let game = crate::services::innings::restart_match(&live(8));
        assert!(undo_last_ball(&game).unwrap_err().is_no_op());
    }

    #[test]
    fn reverses_a_boundary() {
        let (bowler, batter) = (Uuid::new_v4(), Uuid::new_v4());
        let game = score_ball(&live(8), &BallInput::new(bowler, batter).runs(2)).unwrap();
        let scored = score_ball(
            &game,
            &BallInput::new(bowler, batter).boundary(BoundaryType::Four, 0),
        )
        .unwrap();

        assert_eq!(undo_last_ball(&scored).unwrap(), game);
    }

    #[test]
    fn keeps_the_selected_bowler() {
        let (bowler, batter) = (Uuid::new_v4(), Uuid::new_v4());
        let selected = set_bowler(&live(8), bowler).unwrap();
        let scored = score_ball(&selected, &BallInput::new(bowler, batter).runs(2)).unwrap();

        let undone = undo_last_ball(&scored).unwrap();
        assert_eq!(undone.current_bowler, Some(bowler));
        assert_eq!(undone, selected);
    }

    #[test]
    fn keeps_a_bowler_changed_between_balls() {
        let (first, second, batter) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let game = score_ball(&live(8), &BallInput::new(first, batter).runs(1)).unwrap();
        let changed = set_bowler(&game, second).unwrap();
        let scored = score_ball(&changed, &BallInput::new(second, batter)).unwrap();

        let undone = undo_last_ball(&scored).unwrap();
        assert_eq!(undone.current_bowler, Some(second));
        assert_eq!(undone, changed);
    }

    #[test]
    fn first_ball_without_selection_clears_the_bowler() {
        let game = live(8);
        let scored = score_ball(&game, &BallInput::new(Uuid::new_v4(), Uuid::new_v4())).unwrap();
        assert!(scored.current_bowler.is_some());
        assert_eq!(undo_last_ball(&scored).unwrap().current_bowler, None);
    }

    #[test]
    fn reverses_a_rebowled_wide_with_new_rows() {
        let game = score_ball(&live(8), &BallInput::new(Uuid::new_v4(), Uuid::new_v4())).unwrap();
        let wide = BallInput::new(Uuid::new_v4(), Uuid::new_v4()).extra(ExtraType::Wide, 0);
        let scored = score_ball(&game, &wide).unwrap();
        assert_eq!(scored.current().unwrap().batting_scorecard.len(), 2);

        let undone = undo_last_ball(&scored).unwrap();
        assert_eq!(undone, game);
        assert_eq!(undone.current().unwrap().batting_scorecard.len(), 1);
    }

    #[test]
    fn restores_an_earlier_dismissal() {
        let (bowler, batter) = (Uuid::new_v4(), Uuid::new_v4());
        let out = BallInput::new(bowler, batter).wicket(WicketType::Lbw, None);
        let once = score_ball(&live(8), &out).unwrap();
        let again = BallInput::new(bowler, batter).wicket(WicketType::Stumped, None);
        let twice = score_ball(&once, &again).unwrap();
        assert_eq!(twice.current().unwrap().batting_scorecard.get(&batter).unwrap().runs, -8);

        let undone = undo_last_ball(&twice).unwrap();
        let row = undone.current().unwrap().batting_scorecard.get(&batter).unwrap();
        assert!(row.is_out);
        assert_eq!(row.how_out, Some(WicketType::Lbw));
        assert_eq!(undone, once);
    }

    #[test]
    fn reopens_first_innings() {
        let mut game = live(1);
        let (bowler, batter) = (Uuid::new_v4(), Uuid::new_v4());
        for _ in 0..3 {
            game = score_ball(&game, &BallInput::new(bowler, batter).runs(1)).unwrap();
        }
        let before_last = game.clone();
        game = score_ball(&game, &BallInput::new(bowler, batter).runs(1)).unwrap();
        assert_eq!(game.current_innings, 2);

        let undone = undo_last_ball(&game).unwrap();
        assert_eq!(undone, before_last);
    }

    #[test]
    fn completed_match_cannot_be_undone() {
        let mut game = live(1);
        let bowler = Uuid::new_v4();
        for _ in 0..8 {
            game = score_ball(&game, &BallInput::new(bowler, Uuid::new_v4())).unwrap();
        }
        assert_eq!(game.status, MatchStatus::Completed);
        assert!(matches!(
            undo_last_ball(&game).unwrap_err(),
            ScoringError::InvalidState(_)
        ));
    }
}
