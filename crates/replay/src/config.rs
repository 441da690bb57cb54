use anyhow::{Context, Result, anyhow};
use scorebook::{ReconciliationMode, ScoringConfig, rules};

#[derive(Debug, Clone)]
pub struct Config {
    pub max_overs: u32,
    pub reconciliation: ReconciliationMode,
    pub broadcast_capacity: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys fall back to the house defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = ScoringConfig::default();

        let max_overs = match lookup("YYC_MAX_OVERS") {
            Some(value) => value
                .trim()
                .parse()
                .context("YYC_MAX_OVERS must be a number")?,
            None => rules::DEFAULT_MAX_OVERS,
        };
        check_max_overs(max_overs).context("Cannot load YYC_MAX_OVERS env variable")?;

        let reconciliation = match lookup("YYC_RECONCILIATION") {
            Some(value) => value
                .parse()
                .map_err(|e: String| anyhow!(e))
                .context("Cannot load YYC_RECONCILIATION env variable")?,
            None => defaults.reconciliation,
        };

        let broadcast_capacity = match lookup("YYC_BROADCAST_CAPACITY") {
            Some(value) => value
                .trim()
                .parse()
                .context("YYC_BROADCAST_CAPACITY must be a number")?,
            None => defaults.broadcast_capacity,
        };

        Ok(Self {
            max_overs,
            reconciliation,
            broadcast_capacity,
        })
    }

    /// Replaces the default innings length, applying the same bound as the environment.
    pub fn with_max_overs(mut self, max_overs: u32) -> Result<Self> {
        check_max_overs(max_overs)?;
        self.max_overs = max_overs;
        Ok(self)
    }

    pub fn scoring(&self) -> ScoringConfig {
        ScoringConfig {
            default_max_overs: self.max_overs,
            reconciliation: self.reconciliation,
            broadcast_capacity: self.broadcast_capacity,
        }
    }
}

fn check_max_overs(max_overs: u32) -> Result<()> {
    if max_overs == 0 {
        return Err(anyhow!("max overs must be at least 1"));
    }
    Ok(())
}
