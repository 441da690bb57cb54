use chrono::NaiveDate;
use scorebook::dto::{
    CreateMatchRequest, ScoreBallRequest, SelectPairRequest, StartMatchRequest, TeamRefRequest,
};
use scorebook::models::{BoundaryType, Match, MatchStatus, TossDecision, WicketType};
use scorebook::{ScoringConfig, ScoringService};
use uuid::Uuid;

fn team(name: &str) -> TeamRefRequest {
    TeamRefRequest {
        team_id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        short_name: name[..3].to_string(),
    }
}

fn fixture(max_overs: u32) -> CreateMatchRequest {
    CreateMatchRequest {
        match_number: 21,
        team1: team("Stingrays"),
        team2: team("Cobras"),
        venue: "Indoor Centre, Court 1".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 10, 4)
            .unwrap()
            .and_hms_opt(18, 45, 0)
            .unwrap(),
        max_overs: Some(max_overs),
    }
}

async fn started(service: &ScoringService, max_overs: u32) -> Match {
    let game = service.create_match(fixture(max_overs)).await.unwrap();
    service
        .start_match(
            game.match_id,
            StartMatchRequest {
                toss_winner: game.team1.team_id.to_string(),
                toss_decision: TossDecision::Bat,
            },
        )
        .await
        .unwrap()
}

fn ball(bowler: Uuid, batsman: Uuid) -> ScoreBallRequest {
    ScoreBallRequest {
        bowler: bowler.to_string(),
        batsman: batsman.to_string(),
        ..Default::default()
    }
}

fn six(bowler: Uuid, batsman: Uuid) -> ScoreBallRequest {
    ScoreBallRequest {
        boundary_type: BoundaryType::Six,
        ..ball(bowler, batsman)
    }
}

fn single(bowler: Uuid, batsman: Uuid) -> ScoreBallRequest {
    ScoreBallRequest {
        runs: 1,
        ..ball(bowler, batsman)
    }
}

fn bowled(bowler: Uuid, batsman: Uuid) -> ScoreBallRequest {
    ScoreBallRequest {
        is_wicket: true,
        wicket_type: WicketType::Bowled,
        ..ball(bowler, batsman)
    }
}

#[tokio::test]
async fn chasing_side_wins_by_one_wicket() {
    let service = ScoringService::in_memory(ScoringConfig::default());
    let mut game = started(&service, 8).await;
    let id = game.match_id;

    // Innings 1: 11 sixes, 17 dots and a wicket at the end of every second over.
    let (opener, bowlers) = (Uuid::new_v4(), [Uuid::new_v4(), Uuid::new_v4()]);
    let mut sixes = 0;
    for index in 0..32u32 {
        let bowler = bowlers[(index / 4 % 2) as usize];
        let request = if index % 8 == 7 {
            bowled(bowler, opener)
        } else if sixes < 11 {
            sixes += 1;
            six(bowler, opener)
        } else {
            ball(bowler, opener)
        };
        game = service.score_ball(id, request).await.unwrap();
    }

    let first = &game.innings[0];
    assert_eq!((first.runs, first.wickets, first.balls), (50, 4, 32));
    assert_eq!(game.current_innings, 2);
    assert_eq!(first.batting_scorecard.get(&opener).unwrap().sixes, 11);

    // Innings 2: a wicket every fourth ball, the seventh on legal ball 28.
    let (chaser, bowlers) = (Uuid::new_v4(), [Uuid::new_v4(), Uuid::new_v4()]);
    let (mut sixes, mut singles) = (0, 0);
    for index in 0..28u32 {
        let bowler = bowlers[(index / 4 % 2) as usize];
        let request = if index % 4 == 3 {
            bowled(bowler, chaser)
        } else if sixes < 13 {
            sixes += 1;
            six(bowler, chaser)
        } else if singles < 5 {
            singles += 1;
            single(bowler, chaser)
        } else {
            ball(bowler, chaser)
        };
        game = service.score_ball(id, request).await.unwrap();
    }

    let second = &game.innings[1];
    assert_eq!((second.runs, second.wickets, second.balls), (55, 7, 28));
    assert_eq!(game.status, MatchStatus::Completed);
    assert_eq!(game.winner, Some(game.team2.team_id));
    assert_eq!(game.result_text, "Cobras won by 1 wicket");

    let winner = service.team_standing(game.team2.team_id).await.unwrap();
    let loser = service.team_standing(game.team1.team_id).await.unwrap();
    assert_eq!((winner.points, winner.matches_won, winner.matches_played), (2, 1, 1));
    assert_eq!((loser.points, loser.matches_lost, loser.matches_played), (0, 1, 1));

    let career = service.player_career(chaser).await.unwrap();
    assert_eq!(career.batting.runs, 55);
    assert_eq!(career.batting.balls_faced, 28);
    assert_eq!(career.batting.not_outs, 0);
    assert_eq!(career.batting.average, rust_decimal::Decimal::new(5500, 2));

    for report in service.reconcile_match(id).await.unwrap() {
        assert!(report.is_valid, "{:?}", report.discrepancies);
    }
}

#[tokio::test]
async fn level_scores_tie_the_match() {
    let service = ScoringService::in_memory(ScoringConfig::default());
    let mut game = started(&service, 1).await;
    let id = game.match_id;

    let (bowler, batter) = (Uuid::new_v4(), Uuid::new_v4());
    for request in [
        single(bowler, batter),
        single(bowler, batter),
        ball(bowler, batter),
        ball(bowler, batter),
    ] {
        game = service.score_ball(id, request).await.unwrap();
    }

    let (bowler, batter) = (Uuid::new_v4(), Uuid::new_v4());
    let two = ScoreBallRequest {
        runs: 2,
        ..ball(bowler, batter)
    };
    for request in [two, ball(bowler, batter), ball(bowler, batter), ball(bowler, batter)] {
        game = service.score_ball(id, request).await.unwrap();
    }

    assert_eq!(game.status, MatchStatus::Completed);
    assert_eq!(game.result_text, "Match tied");
    assert_eq!(game.winner, None);
    for team_id in [game.team1.team_id, game.team2.team_id] {
        let standing = service.team_standing(team_id).await.unwrap();
        assert_eq!((standing.points, standing.matches_tied), (1, 1));
    }
}

#[tokio::test]
async fn undo_restores_the_previous_state() {
    let service = ScoringService::in_memory(ScoringConfig::default());
    let game = started(&service, 8).await;
    let id = game.match_id;
    let (bowler, striker, partner) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());

    let paired = service
        .select_batting_pair(
            id,
            SelectPairRequest {
                striker: striker.to_string(),
                non_striker: partner.to_string(),
            },
        )
        .await
        .unwrap();
    let before = service.score_ball(id, single(bowler, striker)).await.unwrap();
    assert_eq!(before.batting_pair.unwrap().striker, partner);

    let run_out = ScoreBallRequest {
        is_wicket: true,
        wicket_type: WicketType::RunOut,
        dismissed_player: Some(striker.to_string()),
        ..ball(bowler, partner)
    };
    let after = service.score_ball(id, run_out).await.unwrap();
    assert_eq!(after.current().unwrap().runs, -3);

    let undone = service.undo_last_ball(id).await.unwrap();
    assert_eq!(undone.version, after.version + 1);
    assert_eq!(Match { version: before.version, ..undone }, before);

    let emptied = service.undo_last_ball(id).await.unwrap();
    assert_eq!(emptied.current(), paired.current());
    assert!(service.undo_last_ball(id).await.unwrap_err().is_no_op());
}

#[tokio::test]
async fn completed_match_refuses_further_balls() {
    let service = ScoringService::in_memory(ScoringConfig::default());
    let mut game = started(&service, 1).await;
    let (bowler, batter) = (Uuid::new_v4(), Uuid::new_v4());
    for _ in 0..8 {
        game = service
            .score_ball(game.match_id, single(bowler, batter))
            .await
            .unwrap();
    }
    assert_eq!(game.status, MatchStatus::Completed);

    let err = service
        .score_ball(game.match_id, single(bowler, batter))
        .await
        .unwrap_err();
    assert!(matches!(err, scorebook::ScoringError::InvalidState(_)));

    let restarted = service.restart_match(game.match_id).await.unwrap();
    assert_eq!(restarted.status, MatchStatus::Scheduled);
    let standing = service.team_standing(game.team1.team_id).await.unwrap();
    assert_eq!(standing.matches_played, 1);
}
