pub mod config;
pub mod error;
pub mod fixture;
pub mod runner;
pub mod summary;
pub mod validator;

pub use config::Config;
pub use error::{ReplayError, Result};
pub use fixture::{ReplayEvent, ReplayFixture};
pub use runner::{ReplayOutcome, Replayer};
pub use validator::{FixtureValidator, ValidationReport};
