//! The match state machine: toss, ball-by-ball scoring, innings change-over and result.

use tracing::{debug, info, warn};

use crate::error::{Result, ScoringError};
use crate::models::{Ball, BallInput, Innings, Match, MatchStatus, PlayerId, TeamId, TossDecision};
use crate::rules;

use super::{ball_resolver, over_counter, pair, scorecard};

/// Records the toss and opens innings 1.
pub fn start_innings(game: &Match, toss_winner: TeamId, decision: TossDecision) -> Result<Match> {
    if game.status != MatchStatus::Scheduled {
        return Err(ScoringError::InvalidState(format!(
            "match {} is already {}",
            game.match_number,
            game.status.as_str()
        )));
    }
    let other = game.opponent_of(toss_winner).ok_or_else(|| {
        ScoringError::validation(format!(
            "toss_winner: Team {} is not playing in match {}",
            toss_winner, game.match_number
        ))
    })?;

    let (batting, bowling) = match decision {
        TossDecision::Bat => (toss_winner, other),
        TossDecision::Bowl => (other, toss_winner),
    };

    let mut next = game.clone();
    next.status = MatchStatus::Live;
    next.toss_winner = Some(toss_winner);
    next.toss_decision = Some(decision);
    next.current_innings = 1;
    next.innings = vec![Innings::new(1, batting, bowling)];
    next.batting_pair = None;
    next.current_bowler = None;

    info!(
        match_number = next.match_number,
        batting = %next.team_name(batting),
        "Match started"
    );
    Ok(next)
}

/// Applies one delivery to the current innings and closes the innings or
/// the match when the delivery ends it.
pub fn score_ball(game: &Match, input: &BallInput) -> Result<Match> {
    if game.status != MatchStatus::Live {
        return Err(ScoringError::InvalidState(format!(
            "cannot score match {} while it is {}",
            game.match_number,
            game.status.as_str()
        )));
    }
    let current = game.current().ok_or_else(|| {
        ScoringError::NotFound(format!(
            "innings {} of match {}",
            game.current_innings, game.match_number
        ))
    })?;
    if current.is_closed(game.max_overs) {
        return Err(ScoringError::InvalidState(format!(
            "innings {} is already closed",
            current.number
        )));
    }
    validate_players(input)?;
    validate_amounts(input)?;
    let dismissed_player = dismissed_player(game, current, input)?;

    let resolved = ball_resolver::resolve(input);
    let legal = over_counter::is_legal(input.extra_type, current.over_index(), game.max_overs);
    let position = over_counter::position(current.balls);
    let ball = Ball {
        selected_bowler: game.current_bowler,
        ..ball_resolver::finalize(input, resolved, position, legal, dismissed_player)
    };

    let mut next = game.clone();
    let innings = next
        .current_mut()
        .ok_or_else(|| ScoringError::NotFound("current innings".to_string()))?;
    innings.runs += resolved.innings_delta();
    innings.extras += resolved.extras;
    if ball.is_wicket {
        innings.wickets += 1;
    }
    if legal {
        innings.balls += 1;
    }
    innings.refresh_overs();
    scorecard::apply_ball(innings, &ball);
    innings.ball_by_ball.push(ball.clone());

    debug!(
        innings = innings.number,
        over = ball.over_number,
        ball = ball.ball_number,
        delta = resolved.innings_delta(),
        legal,
        total = innings.runs,
        wickets = innings.wickets,
        "Ball recorded"
    );

    pair::after_ball(&mut next, &ball);
    close_innings_if_done(&mut next);
    Ok(next)
}

fn validate_players(input: &BallInput) -> Result<()> {
    if input.bowler.is_nil() {
        return Err(ScoringError::validation("bowler: Identifier must not be empty"));
    }
    if input.batsman.is_nil() {
        return Err(ScoringError::validation("batsman: Identifier must not be empty"));
    }
    if input.bowler == input.batsman {
        return Err(ScoringError::validation(
            "bowler: Bowler and batsman must be different players",
        ));
    }
    Ok(())
}

fn validate_amounts(input: &BallInput) -> Result<()> {
    if input.runs > rules::MAX_RUNS_PER_BALL {
        return Err(ScoringError::validation(format!(
            "runs: Runs must be between 0 and {}",
            rules::MAX_RUNS_PER_BALL
        )));
    }
    if input.extras > rules::MAX_EXTRAS_PER_BALL {
        return Err(ScoringError::validation(format!(
            "extras: Extras must be between 0 and {}",
            rules::MAX_EXTRAS_PER_BALL
        )));
    }
    if input.additional_runs > rules::MAX_ADDITIONAL_RUNS {
        return Err(ScoringError::validation(format!(
            "additional_runs: Additional runs must be between 0 and {}",
            rules::MAX_ADDITIONAL_RUNS
        )));
    }
    Ok(())
}

/// Who the wicket penalty lands on. Defaults to the striker; otherwise the
/// player must be at the crease or already on the batting card.
fn dismissed_player(game: &Match, innings: &Innings, input: &BallInput) -> Result<Option<PlayerId>> {
    if !input.is_wicket {
        return Ok(None);
    }
    let Some(player) = input.dismissed_player.filter(|id| !id.is_nil()) else {
        return Ok(Some(input.batsman));
    };

    let at_crease = player == input.batsman
        || game.batting_pair.is_some_and(|pair| pair.contains(player));
    if !at_crease && !innings.batting_scorecard.contains(&player) {
        return Err(ScoringError::validation(format!(
            "dismissed_player: {} is not batting in innings {}",
            player, innings.number
        )));
    }
    Ok(Some(player))
}

/// Moves to innings 2 or completes the match once the current innings is over.
pub(crate) fn close_innings_if_done(game: &mut Match) {
    let Some(current) = game.current() else {
        return;
    };
    if !current.is_closed(game.max_overs) {
        return;
    }

    info!(
        match_number = game.match_number,
        innings = current.number,
        runs = current.runs,
        wickets = current.wickets,
        overs = %current.overs,
        "Innings closed"
    );

    let (number, batting, bowling) = (current.number, current.batting_team, current.bowling_team);
    game.batting_pair = None;
    game.current_bowler = None;

    if number == 1 {
        game.innings.push(Innings::new(2, bowling, batting));
        game.current_innings = 2;
        return;
    }

    let (winner, result_text) = decide_result(game);
    game.status = MatchStatus::Completed;
    game.winner = winner;
    game.result_text = result_text;
    info!(
        match_number = game.match_number,
        result = %game.result_text,
        "Match completed"
    );
}

/// Winner and result line once both innings have been played.
pub fn decide_result(game: &Match) -> (Option<TeamId>, String) {
    let (Some(first), Some(second)) = (game.innings.first(), game.innings.get(1)) else {
        return (None, String::new());
    };

    if second.runs > first.runs {
        let margin = rules::RESULT_WICKET_BASE.saturating_sub(second.wickets);
        let text = format!(
            "{} won by {} {}",
            game.team_name(second.batting_team),
            margin,
            plural(margin, "wicket")
        );
        (Some(second.batting_team), text)
    } else if first.runs > second.runs {
        let margin = (first.runs - second.runs) as u32;
        let text = format!(
            "{} won by {} {}",
            game.team_name(first.batting_team),
            margin,
            plural(margin, "run")
        );
        (Some(first.batting_team), text)
    } else {
        (None, "Match tied".to_string())
    }
}

fn plural(count: u32, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{}s", noun)
    }
}

/// Puts the match back to scheduled, discarding toss, innings and result.
pub fn restart_match(game: &Match) -> Match {
    if game.status == MatchStatus::Completed {
        warn!(
            match_number = game.match_number,
            "Restarting a completed match; standings already recorded are kept"
        );
    }

    let mut next = game.clone();
    next.status = MatchStatus::Scheduled;
    next.toss_winner = None;
    next.toss_decision = None;
    next.current_innings = 1;
    next.innings.clear();
    next.winner = None;
    next.result_text.clear();
    next.batting_pair = None;
    next.current_bowler = None;
    next
}
