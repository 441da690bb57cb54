pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod notify;
pub mod repository;
pub mod rules;
pub mod services;

pub use config::{ReconciliationMode, ScoringConfig};
pub use error::{Result, ScoringError};
pub use notify::{BroadcastNotifier, MatchNotifier};
pub use repository::{InMemoryStore, MatchStore};
pub use services::{ScoringEngine, ScoringService};
