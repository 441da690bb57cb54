pub mod match_store;

pub use match_store::{InMemoryStore, MatchStore};
