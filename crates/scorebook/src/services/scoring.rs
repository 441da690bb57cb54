use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, broadcast};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::config::ScoringConfig;
use crate::dto::{
    CreateMatchRequest, ScoreBallRequest, SelectPairRequest, SetBowlerRequest, StartMatchRequest,
};
use crate::error::Result;
use crate::models::{Match, MatchStatus, PlayerCareer, PlayerId, TeamId, TeamStanding};
use crate::notify::{BroadcastNotifier, MatchNotifier};
use crate::repository::{InMemoryStore, MatchStore};

use super::engine::ScoringEngine;
use super::reconciliation::{self, ReconciliationReport};
use super::settlement;

/// Scoring front door: serialises writes per match, persists them with an
/// optimistic version check and announces every stored state.
pub struct ScoringService {
    engine: ScoringEngine,
    store: Arc<dyn MatchStore>,
    broadcaster: BroadcastNotifier,
    listeners: Vec<Arc<dyn MatchNotifier>>,
    locks: DashMap<Uuid, Arc<Mutex<()>>>,
}

impl ScoringService {
    pub fn new(config: ScoringConfig, store: Arc<dyn MatchStore>) -> Self {
        Self {
            broadcaster: BroadcastNotifier::new(config.broadcast_capacity),
            engine: ScoringEngine::new(config),
            store,
            listeners: Vec::new(),
            locks: DashMap::new(),
        }
    }

    pub fn in_memory(config: ScoringConfig) -> Self {
        Self::new(config, Arc::new(InMemoryStore::new()))
    }

    /// Adds a notifier that sees every persisted match alongside the broadcast subscribers.
    pub fn with_listener(mut self, listener: Arc<dyn MatchNotifier>) -> Self {
        self.listeners.push(listener);
        self
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Arc<Match>> {
        self.broadcaster.subscribe()
    }

    #[instrument(skip(self, request), fields(match_number = request.match_number))]
    pub async fn create_match(&self, request: CreateMatchRequest) -> Result<Match> {
        let game = self.engine.create_match(request)?;
        let game = self.store.insert(game).await?;
        info!(match_id = %game.match_id, "Match scheduled");
        self.publish(&game);
        Ok(game)
    }

    pub async fn get_match(&self, match_id: Uuid) -> Result<Match> {
        self.store.find_by_id(match_id).await
    }

    pub async fn list_matches(&self) -> Result<Vec<Match>> {
        self.store.list().await
    }

    #[instrument(skip(self, request))]
    pub async fn start_match(&self, match_id: Uuid, request: StartMatchRequest) -> Result<Match> {
        let toss_winner = request.toss_winner_id()?;
        self.mutate(match_id, |engine, game| {
            engine.start_match(game, toss_winner, request.toss_decision)
        })
        .await
    }

    #[instrument(skip(self, request))]
    pub async fn score_ball(&self, match_id: Uuid, request: ScoreBallRequest) -> Result<Match> {
        let input = request.into_input()?;
        self.mutate(match_id, |engine, game| engine.score_ball(game, &input))
            .await
    }

    #[instrument(skip(self))]
    pub async fn undo_last_ball(&self, match_id: Uuid) -> Result<Match> {
        self.mutate(match_id, |engine, game| engine.undo_last_ball(game))
            .await
    }

    pub async fn select_batting_pair(
        &self,
        match_id: Uuid,
        request: SelectPairRequest,
    ) -> Result<Match> {
        let (striker, non_striker) = request.players()?;
        self.mutate(match_id, |engine, game| {
            engine.select_batting_pair(game, striker, non_striker)
        })
        .await
    }

    pub async fn set_bowler(&self, match_id: Uuid, request: SetBowlerRequest) -> Result<Match> {
        let bowler = request.bowler_id()?;
        self.mutate(match_id, |engine, game| engine.set_bowler(game, bowler))
            .await
    }

    #[instrument(skip(self))]
    pub async fn restart_match(&self, match_id: Uuid) -> Result<Match> {
        self.mutate(match_id, |engine, game| Ok(engine.restart_match(game)))
            .await
    }

    /// Read-only reconciliation of every innings played so far.
    pub async fn reconcile_match(&self, match_id: Uuid) -> Result<Vec<ReconciliationReport>> {
        let game = self.store.find_by_id(match_id).await?;
        Ok(game.innings.iter().map(reconciliation::reconcile).collect())
    }

    pub async fn team_standing(&self, team_id: TeamId) -> Result<TeamStanding> {
        self.store.team_standing(team_id).await
    }

    pub async fn player_career(&self, player_id: PlayerId) -> Result<PlayerCareer> {
        self.store.player_career(player_id).await
    }

    /// Load, reduce, persist and announce under the match's lock.
    async fn mutate<F>(&self, match_id: Uuid, reduce: F) -> Result<Match>
    where
        F: FnOnce(&ScoringEngine, &Match) -> Result<Match>,
    {
        let lock = self.lock_for(match_id);
        let result = {
            let _guard = lock.lock().await;
            self.reduce_and_save(match_id, reduce).await
        };
        drop(lock);
        self.release_lock(match_id);

        let saved = result?;
        self.publish(&saved);
        Ok(saved)
    }

    async fn reduce_and_save<F>(&self, match_id: Uuid, reduce: F) -> Result<Match>
    where
        F: FnOnce(&ScoringEngine, &Match) -> Result<Match>,
    {
        let current = self.store.find_by_id(match_id).await?;
        let next = reduce(&self.engine, &current)?;

        if current.status == MatchStatus::Completed || next.status != MatchStatus::Completed {
            return self.store.save(next, current.version).await;
        }

        let settlement = settlement::settle(&next)?;
        let saved = self
            .store
            .save_settled(next, current.version, &settlement)
            .await?;
        info!(
            match_id = %saved.match_id,
            result = %saved.result_text,
            "Standings and careers updated"
        );
        Ok(saved)
    }

    fn lock_for(&self, match_id: Uuid) -> Arc<Mutex<()>> {
        self.locks
            .entry(match_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .value()
            .clone()
    }

    /// Drops the match's lock once no writer holds or waits on it.
    fn release_lock(&self, match_id: Uuid) {
        self.locks
            .remove_if(&match_id, |_, lock| Arc::strong_count(lock) == 1);
    }

    #[cfg(test)]
    fn held_locks(&self) -> usize {
        self.locks.len()
    }

    fn publish(&self, game: &Match) {
        self.broadcaster.notify(game);
        for listener in &self.listeners {
            listener.notify(game);
        }
    }
}
