//! Batting and bowling scorecard maintenance for a single delivery.

use crate::models::{Ball, BattingScorecardRow, BoundaryType, BowlingScorecardRow, Innings, PlayerId};

/// Applies `ball` to the scorecards, creating rows on first appearance.
pub fn apply_ball(innings: &mut Innings, ball: &Ball) {
    let striker = innings
        .batting_scorecard
        .entry_or_insert_with(ball.batsman, || BattingScorecardRow::new(ball.batsman));
    if ball.legal {
        striker.balls += 1;
    }
    if !ball.is_wicket {
        striker.runs += ball.runs;
        match ball.boundary_type {
            BoundaryType::Four => striker.fours += 1,
            BoundaryType::Six => striker.sixes += 1,
            _ => {}
        }
    }
    striker.refresh_strike_rate();

    if ball.is_wicket
        && let Some(dismissed) = ball.dismissed_player
    {
        let row = innings
            .batting_scorecard
            .entry_or_insert_with(dismissed, || BattingScorecardRow::new(dismissed));
        row.runs += ball.wicket_penalty;
        row.is_out = true;
        row.how_out = Some(ball.wicket_type);
        row.refresh_strike_rate();
    }

    let bowler = innings
        .bowling_scorecard
        .entry_or_insert_with(ball.bowler, || BowlingScorecardRow::new(ball.bowler));
    if ball.legal {
        bowler.balls += 1;
    }
    bowler.runs += ball.net_runs();
    if ball.is_wicket {
        bowler.wickets += 1;
    }
    bowler.refresh_derived();
}

/// Exact inverse of [`apply_ball`]. `ball` must already be popped from the log.
pub fn revert_ball(innings: &mut Innings, ball: &Ball) {
    if let Some(striker) = innings.batting_scorecard.get_mut(&ball.batsman) {
        if ball.legal {
            striker.balls -= 1;
        }
        if !ball.is_wicket {
            striker.runs -= ball.runs;
            match ball.boundary_type {
                BoundaryType::Four => striker.fours -= 1,
                BoundaryType::Six => striker.sixes -= 1,
                _ => {}
            }
        }
        striker.refresh_strike_rate();
    }

    if ball.is_wicket
        && let Some(dismissed) = ball.dismissed_player
    {
        // Pairs keep batting after a dismissal, so an earlier wicket may still stand.
        let earlier = innings
            .ball_by_ball
            .iter()
            .rev()
            .find(|b| b.is_wicket && b.dismissed_player == Some(dismissed))
            .map(|b| b.wicket_type);

        if let Some(row) = innings.batting_scorecard.get_mut(&dismissed) {
            row.runs -= ball.wicket_penalty;
            row.is_out = earlier.is_some();
            row.how_out = earlier;
            row.refresh_strike_rate();
        }
    }

    if let Some(bowler) = innings.bowling_scorecard.get_mut(&ball.bowler) {
        if ball.legal {
            bowler.balls -= 1;
        }
        bowler.runs -= ball.net_runs();
        if ball.is_wicket {
            bowler.wickets -= 1;
        }
        bowler.refresh_derived();
    }

    prune_rows(innings, ball);
}

/// Drops rows that only existed because of the reverted delivery.
fn prune_rows(innings: &mut Innings, ball: &Ball) {
    let mut batters: Vec<PlayerId> = vec![ball.batsman];
    if let Some(dismissed) = ball.dismissed_player
        && dismissed != ball.batsman
    {
        batters.push(dismissed);
    }

    for player in batters {
        if !innings.ball_by_ball.iter().any(|b| b.involves_batter(player)) {
            innings.batting_scorecard.remove(&player);
        }
    }

    if !innings.ball_by_ball.iter().any(|b| b.bowler == ball.bowler) {
        innings.bowling_scorecard.remove(&ball.bowler);
    }
}
