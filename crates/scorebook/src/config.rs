use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::rules;

/// What to do when an innings fails reconciliation after a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReconciliationMode {
    /// Reject the write; the stored match is left untouched.
    #[default]
    Strict,
    /// Log each mismatch and keep the write.
    Advisory,
}

impl FromStr for ReconciliationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "advisory" => Ok(Self::Advisory),
            other => Err(format!(
                "unknown reconciliation mode '{}', expected 'strict' or 'advisory'",
                other
            )),
        }
    }
}

impl fmt::Display for ReconciliationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Advisory => write!(f, "advisory"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Overs per innings when a match is created without an explicit value.
    pub default_max_overs: u32,
    pub reconciliation: ReconciliationMode,
    /// Buffered match updates per subscriber before slow receivers start lagging.
    pub broadcast_capacity: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            default_max_overs: rules::DEFAULT_MAX_OVERS,
            reconciliation: ReconciliationMode::Strict,
            broadcast_capacity: 64,
        }
    }
}
