pub mod ball_resolver;
pub mod engine;
pub mod innings;
pub mod over_counter;
pub mod pair;
pub mod reconciliation;
pub mod scorecard;
pub mod scoring;
pub mod settlement;
pub mod undo;

pub use engine::ScoringEngine;
pub use innings::{decide_result, restart_match, score_ball, start_innings};
pub use pair::{select_batting_pair, set_bowler};
pub use reconciliation::{ReconciliationReport, reconcile};
pub use scoring::ScoringService;
pub use settlement::{Settlement, settle};
pub use undo::undo_last_ball;
