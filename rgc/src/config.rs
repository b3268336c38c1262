use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use uldpack::eval::PenaltyWeights;

/// Configuration for the random greedy constructor
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct RGCConfig {
    /// Seed for the PRNG. If undefined, the algorithm will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Number of independent candidate solutions to construct
    pub n_candidates: usize,
    /// Construct the candidates on all available threads
    #[serde(default)]
    pub parallel: bool,
    /// Weights of the terms of the fitness function
    #[serde(default)]
    pub penalty_weights: PenaltyWeights,
}

impl Default for RGCConfig {
    fn default() -> Self {
        Self {
            prng_seed: Some(0),
            n_candidates: 50,
            parallel: true,
            penalty_weights: PenaltyWeights::default(),
        }
    }
}

impl RGCConfig {
    /// Checks that the optimizer can run with this configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.n_candidates > 0,
            "n_candidates must be at least 1, got {}",
            self.n_candidates
        );
        Ok(())
    }
}
