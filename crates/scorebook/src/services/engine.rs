use crate::config::ScoringConfig;
use crate::dto::CreateMatchRequest;
use crate::error::Result;
use crate::models::{BallInput, Match, PlayerId, TeamId, TossDecision};

use super::{innings, pair, reconciliation, undo};

/// Match reducers bound to a scoring configuration.
///
/// Scored and undone balls are reconciled before the new state is returned.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn create_match(&self, request: CreateMatchRequest) -> Result<Match> {
        request.into_match(self.config.default_max_overs)
    }

    pub fn start_match(&self, game: &Match, toss_winner: TeamId, decision: TossDecision) -> Result<Match> {
        innings::start_innings(game, toss_winner, decision)
    }

    pub fn score_ball(&self, game: &Match, input: &BallInput) -> Result<Match> {
        let next = innings::score_ball(game, input)?;
        reconciliation::enforce(&next, self.config.reconciliation)?;
        Ok(next)
    }

    pub fn undo_last_ball(&self, game: &Match) -> Result<Match> {
        let next = undo::undo_last_ball(game)?;
        reconciliation::enforce(&next, self.config.reconciliation)?;
        Ok(next)
    }

    pub fn select_batting_pair(
        &self,
        game: &Match,
        striker: PlayerId,
        non_striker: PlayerId,
    ) -> Result<Match> {
        pair::select_batting_pair(game, striker, non_striker)
    }

    pub fn set_bowler(&self, game: &Match, bowler: PlayerId) -> Result<Match> {
        pair::set_bowler(game, bowler)
    }

    pub fn restart_match(&self, game: &Match) -> Match {
        innings::restart_match(game)
    }
}
