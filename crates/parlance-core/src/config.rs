//! Orchestration configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunables for the query dispatcher.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OrchestratorConfig {
    /// How long one provider call may take before the attempt is failed
    /// with a timeout, in milliseconds.
    #[serde(default = "default_answer_timeout_ms")]
    pub answer_timeout_ms: u64,
}

fn default_answer_timeout_ms() -> u64 {
    30_000
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            answer_timeout_ms: default_answer_timeout_ms(),
        }
    }
}

impl OrchestratorConfig {
    /// The answer timeout as a `Duration`.
    pub fn answer_timeout(&self) -> Duration {
        Duration::from_millis(self.answer_timeout_ms)
    }
}
