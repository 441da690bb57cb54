//! Batting pair, striker and current bowler, persisted so a client can resume mid-over.

use tracing::debug;

use crate::error::{Result, ScoringError};
use crate::models::{Ball, BattingPair, BoundaryType, Match, MatchStatus, PlayerId};

use super::over_counter;

pub fn select_batting_pair(game: &Match, striker: PlayerId, non_striker: PlayerId) -> Result<Match> {
    ensure_live(game)?;
    if striker.is_nil() || non_striker.is_nil() {
        return Err(ScoringError::validation("Both batters of the pair are required"));
    }
    if striker == non_striker {
        return Err(ScoringError::validation("A batting pair needs two different players"));
    }

    let started_at_ball = game.current().map(|innings| innings.balls).unwrap_or(0);
    let mut next = game.clone();
    next.batting_pair = Some(BattingPair {
        striker,
        non_striker,
        started_at_ball,
    });
    Ok(next)
}

pub fn set_bowler(game: &Match, bowler: PlayerId) -> Result<Match> {
    ensure_live(game)?;
    if bowler.is_nil() {
        return Err(ScoringError::validation("bowler: Identifier must not be empty"));
    }

    let mut next = game.clone();
    next.current_bowler = Some(bowler);
    Ok(next)
}

/// Strike changes at the end of an over and when the batters ran an odd number.
/// A dismissal leaves the striker where they are.
pub fn rotates_strike(ball: &Ball, balls_after: u32) -> bool {
    if ball.is_wicket {
        return false;
    }
    if over_counter::completes_over(balls_after, ball.legal) {
        return true;
    }
    match ball.boundary_type {
        BoundaryType::None => ball.runs % 2 == 1,
        BoundaryType::Four | BoundaryType::Six => false,
        _ => ball.additional_runs % 2 == 1,
    }
}

/// Updates striker and bowler once `ball` has been added to the current innings.
pub(crate) fn after_ball(game: &mut Match, ball: &Ball) {
    game.current_bowler = Some(ball.bowler);

    let balls_after = game.current().map(|innings| innings.balls).unwrap_or(0);
    if let Some(pair) = game.batting_pair.as_mut()
        && pair.contains(ball.batsman)
    {
        pair.face(ball.batsman);
        if rotates_strike(ball, balls_after) {
            pair.rotate();
        }
    }
    if ball.legal && game.pair_change_due() {
        debug!(
            match_number = game.match_number,
            balls = balls_after,
            "Batting pair has batted its overs"
        );
    }
}

/// Puts the undone delivery's batter back on strike and restores the bowler
/// selection that was in force when it was scored.
pub(crate) fn after_undo(game: &mut Match, ball: &Ball) {
    game.current_bowler = ball.selected_bowler;

    if let Some(pair) = game.batting_pair.as_mut() {
        pair.face(ball.batsman);
    }
}

fn ensure_live(game: &Match) -> Result<()> {
    if game.status != MatchStatus::Live {
        return Err(ScoringError::InvalidState(format!(
            "match {} is {}, not live",
            game.match_number,
            game.status.as_str()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BallInput, ExtraType, TeamRef, TossDecision, WicketType};
    use crate::services::innings::{score_ball, start_innings};
    use uuid::Uuid;

    fn live() -> Match {
        let team = |name: &str| TeamRef {
            team_id: Uuid::new_v4(),
            name: name.to_string(),
            short_name: name[..3].to_uppercase(),
        };
        let date = chrono::NaiveDate::from_ymd_opt(2025, 7, 9)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        let game = Match::new(4, team("Geckos"), team("Wombats"), "Court 1".into(), date, 8);
        let winner = game.team1.team_id;
        start_innings(&game, winner, TossDecision::Bat).unwrap()
    }

    fn bowl(mut game: Match, bowler: PlayerId, batter: PlayerId, count: usize) -> Match {
        for _ in 0..count {
            game = score_ball(&game, &BallInput::new(bowler, batter).runs(2)).unwrap();
        }
        game
    }

    fn delivery(runs: i32) -> Ball {
        Ball {
            over_number: 1,
            ball_number: 1,
            bowler: Uuid::new_v4(),
            batsman: Uuid::new_v4(),
            runs,
            extras: 0,
            extra_type: ExtraType::None,
            is_wicket: false,
            wicket_type: WicketType::None,
            dismissed_player: None,
            boundary_type: BoundaryType::None,
            additional_runs: 0,
            wicket_penalty: 0,
            legal: true,
            selected_bowler: None,
        }
    }

    #[test]
    fn odd_runs_rotate() {
        assert!(rotates_strike(&delivery(1), 1));
        assert!(rotates_strike(&delivery(3), 2));
        assert!(!rotates_strike(&delivery(2), 1));
    }

    #[test]
    fn over_end_rotates_once() {
        assert!(rotates_strike(&delivery(0), 4));
        assert!(rotates_strike(&delivery(1), 4));
    }

    #[test]
    fn zone_boundary_uses_runner_runs() {
        let mut ball = delivery(3);
        ball.boundary_type = BoundaryType::SideWallGround;
        ball.additional_runs = 2;
        assert!(!rotates_strike(&ball, 1));
        ball.additional_runs = 1;
        assert!(rotates_strike(&ball, 1));
    }

    #[test]
    fn wicket_never_rotates() {
        let mut ball = delivery(1);
        ball.is_wicket = true;
        assert!(!rotates_strike(&ball, 4));
    }

    #[test]
    fn rebowled_wide_does_not_end_the_over() {
        let mut ball = delivery(0);
        ball.extra_type = ExtraType::Wide;
        ball.legal = false;
        assert!(!rotates_strike(&ball, 4));
    }

    #[test]
    fn pair_change_due_after_two_overs() {
        let (striker, partner, bowler) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let game = select_batting_pair(&live(), striker, partner).unwrap();

        let game = bowl(game, bowler, striker, 7);
        assert!(!game.pair_change_due());
        let game = bowl(game, bowler, striker, 1);
        assert!(game.pair_change_due());
    }

    #[test]
    fn rebowled_wides_do_not_count_towards_pair_change() {
        let (striker, partner, bowler) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let mut game = select_batting_pair(&live(), striker, partner).unwrap();
        game = bowl(game, bowler, striker, 7);
        for _ in 0..3 {
            let wide = BallInput::new(bowler, striker).extra(ExtraType::Wide, 0);
            game = score_ball(&game, &wide).unwrap();
        }

        assert_eq!(game.current().unwrap().balls, 7);
        assert!(!game.pair_change_due());
    }

    #[test]
    fn new_pair_resets_the_count() {
        let (striker, partner, bowler) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let game = select_batting_pair(&live(), striker, partner).unwrap();
        let game = bowl(game, bowler, striker, 8);
        assert!(game.pair_change_due());

        let (next_in, next_partner) = (Uuid::new_v4(), Uuid::new_v4());
        let game = select_batting_pair(&game, next_in, next_partner).unwrap();
        assert!(!game.pair_change_due());
        let game = bowl(game, bowler, next_in, 7);
        assert!(!game.pair_change_due());
    }

    #[test]
    fn no_pair_means_no_change_due() {
        let game = bowl(live(), Uuid::new_v4(), Uuid::new_v4(), 8);
        assert!(!game.pair_change_due());
    }
}
