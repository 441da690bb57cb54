use std::fmt::Write;

use scorebook::models::{Innings, Match, PlayerId};

/// Plain-text scorecard for the terminal.
pub fn render(game: &Match) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Match {}: {} v {} at {} ({})",
        game.match_number,
        game.team1.name,
        game.team2.name,
        game.venue,
        game.status.as_str()
    );

    for innings in &game.innings {
        render_innings(&mut out, game, innings);
    }

    if !game.result_text.is_empty() {
        let _ = writeln!(out, "\nResult: {}", game.result_text);
    }
    out
}

fn render_innings(out: &mut String, game: &Match, innings: &Innings) {
    let _ = writeln!(
        out,
        "\nInnings {}: {} {}/{} ({} ov, extras {})",
        innings.number,
        game.team_name(innings.batting_team),
        innings.runs,
        innings.wickets,
        innings.overs,
        innings.extras
    );

    let _ = writeln!(out, "  {:<10} {:>5} {:>5} {:>3} {:>3} {:>8}  how out", "batter", "R", "B", "4s", "6s", "SR");
    for row in innings.batting_scorecard.iter() {
        let how_out = row.how_out.map_or("not out", |kind| kind.as_str());
        let _ = writeln!(
            out,
            "  {:<10} {:>5} {:>5} {:>3} {:>3} {:>8}  {}",
            short_id(&row.player),
            row.runs,
            row.balls,
            row.fours,
            row.sixes,
            row.strike_rate,
            how_out
        );
    }

    let _ = writeln!(out, "  {:<10} {:>5} {:>5} {:>3} {:>8}", "bowler", "O", "R", "W", "Econ");
    for row in innings.bowling_scorecard.iter() {
        let _ = writeln!(
            out,
            "  {:<10} {:>5} {:>5} {:>3} {:>8}",
            short_id(&row.player),
            row.overs,
            row.runs,
            row.wickets,
            row.economy
        );
    }
}

fn short_id(player: &PlayerId) -> String {
    player.simple().to_string()[..8].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorebook::models::TeamRef;
    use uuid::Uuid;

    #[test]
    fn scheduled_match_has_header_only() {
        let team = |name: &str| TeamRef {
            team_id: Uuid::new_v4(),
            name: name.to_string(),
            short_name: name[..3].to_uppercase(),
        };
        let date = chrono::NaiveDate::from_ymd_opt(2025, 2, 1)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        let game = Match::new(2, team("Vipers"), team("Otters"), "Court 4".into(), date, 8);

        let text = render(&game);
        assert!(text.starts_with("Match 2: Vipers v Otters at Court 4 (scheduled)"));
        assert!(!text.contains("Innings"));
        assert!(!text.contains("Result"));
    }
}
