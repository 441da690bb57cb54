use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{Result, ScoringError};
use crate::models::{Match, PlayerCareer, PlayerId, TeamId, TeamStanding};
use crate::services::settlement::Settlement;

/// Persistence seam for matches, standings and careers.
///
/// `save` is an optimistic write: it succeeds only when the stored version
/// still equals `expected_version`, and bumps the version on success.
/// `save_settled` does the same and applies the settlement in the same write;
/// either both land or neither does.
#[async_trait::async_trait]
pub trait MatchStore: Send + Sync {
    async fn insert(&self, game: Match) -> Result<Match>;

    async fn find_by_id(&self, match_id: Uuid) -> Result<Match>;

    async fn save(&self, game: Match, expected_version: u64) -> Result<Match>;

    async fn list(&self) -> Result<Vec<Match>>;

    async fn save_settled(
        &self,
        game: Match,
        expected_version: u64,
        settlement: &Settlement,
    ) -> Result<Match>;

    async fn team_standing(&self, team_id: TeamId) -> Result<TeamStanding>;

    async fn player_career(&self, player_id: PlayerId) -> Result<PlayerCareer>;
}

#[derive(Default)]
struct Tables {
    matches: HashMap<Uuid, Match>,
    standings: HashMap<TeamId, TeamStanding>,
    careers: HashMap<PlayerId, PlayerCareer>,
}

impl Tables {
    fn save(&mut self, mut game: Match, expected_version: u64) -> Result<Match> {
        let stored = self
            .matches
            .get_mut(&game.match_id)
            .ok_or_else(|| ScoringError::NotFound(format!("match {}", game.match_id)))?;

        if stored.version != expected_version {
            return Err(ScoringError::Conflict {
                expected: expected_version,
                found: stored.version,
            });
        }

        game.version = expected_version + 1;
        *stored = game.clone();
        Ok(game)
    }

    fn settle(&mut self, settlement: &Settlement) {
        for &(team_id, outcome) in &settlement.outcomes {
            self.standings
                .entry(team_id)
                .or_insert_with(|| TeamStanding::new(team_id))
                .record(outcome);
        }
        for row in &settlement.batting {
            self.careers
                .entry(row.player)
                .or_insert_with(|| PlayerCareer::new(row.player))
                .absorb_batting(row);
        }
        for row in &settlement.bowling {
            self.careers
                .entry(row.player)
                .or_insert_with(|| PlayerCareer::new(row.player))
                .absorb_bowling(row);
        }
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl MatchStore for InMemoryStore {
    async fn insert(&self, mut game: Match) -> Result<Match> {
        let mut tables = self.tables.write().await;
        if tables.matches.contains_key(&game.match_id) {
            return Err(ScoringError::validation(format!(
                "match_id: Match {} already exists",
                game.match_id
            )));
        }

        for team_id in [game.team1.team_id, game.team2.team_id] {
            tables
                .standings
                .entry(team_id)
                .or_insert_with(|| TeamStanding::new(team_id));
        }

        game.version = 1;
        tables.matches.insert(game.match_id, game.clone());
        Ok(game)
    }

    async fn find_by_id(&self, match_id: Uuid) -> Result<Match> {
        self.tables
            .read()
            .await
            .matches
            .get(&match_id)
            .cloned()
            .ok_or_else(|| ScoringError::NotFound(format!("match {}", match_id)))
    }

    async fn save(&self, game: Match, expected_version: u64) -> Result<Match> {
        self.tables.write().await.save(game, expected_version)
    }

    async fn list(&self) -> Result<Vec<Match>> {
        let tables = self.tables.read().await;
        let mut matches: Vec<Match> = tables.matches.values().cloned().collect();
        matches.sort_by_key(|game| (game.date, game.match_number));
        Ok(matches)
    }

    async fn save_settled(
        &self,
        game: Match,
        expected_version: u64,
        settlement: &Settlement,
    ) -> Result<Match> {
        let mut tables = self.tables.write().await;
        let saved = tables.save(game, expected_version)?;
        tables.settle(settlement);
        Ok(saved)
    }

    async fn team_standing(&self, team_id: TeamId) -> Result<TeamStanding> {
        self.tables
            .read()
            .await
            .standings
            .get(&team_id)
            .cloned()
            .ok_or_else(|| ScoringError::NotFound(format!("team {}", team_id)))
    }

    async fn player_career(&self, player_id: PlayerId) -> Result<PlayerCareer> {
        self.tables
            .read()
            .await
            .careers
            .get(&player_id)
            .cloned()
            .ok_or_else(|| ScoringError::NotFound(format!("player {}", player_id)))
    }
}
