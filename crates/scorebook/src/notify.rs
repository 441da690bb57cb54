use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::trace;

use crate::models::Match;

/// Receives every persisted match state. Delivery is fire-and-forget.
pub trait MatchNotifier: Send + Sync {
    fn notify(&self, game: &Match);
}

/// Fans match updates out to live scoreboard subscribers.
pub struct BroadcastNotifier {
    sender: broadcast::Sender<Arc<Match>>,
}

impl BroadcastNotifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Arc<Match>> {
        self.sender.subscribe()
    }
}

impl MatchNotifier for BroadcastNotifier {
    fn notify(&self, game: &Match) {
        if self.sender.receiver_count() > 0 {
            let _ = self.sender.send(Arc::new(game.clone()));
        } else {
            trace!(match_id = %game.match_id, "No scoreboard subscribers");
        }
    }
}
