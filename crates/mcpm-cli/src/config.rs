//! MCPM report configuration

use std::path::PathBuf;

use anyhow::Result;
use mcpm_coherence::CoherenceConfig;
use mcpm_common::McpmError;
use serde::{Deserialize, Serialize};

/// Report binary configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct McpmConfig {
    /// Coupling function settings
    pub coherence: CoherenceConfig,
    /// JSON file of named systems to measure; built-in reports when unset
    pub scenario_path: Option<PathBuf>,
}

impl McpmConfig {
    /// Load configuration from `.env` and `MCPM_` environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        let mut cfg = Self::default();

        if let Some(alpha) = env_f64("MCPM_COUPLING_ALPHA")? {
            cfg.coherence.alpha = alpha;
        }
        if let Some(optimum) = env_f64("MCPM_COUPLING_OPTIMUM")? {
            cfg.coherence.scalar_optimum = optimum;
        }
        if let Ok(path) = std::env::var("MCPM_SCENARIO_PATH") {
            cfg.scenario_path = Some(PathBuf::from(path));
        }

        cfg.coherence.validate()?;
        Ok(cfg)
    }

    /// Command-line path wins over the environment
    pub fn with_scenario_arg(mut self, arg: Option<String>) -> Self {
        if let Some(path) = arg {
            self.scenario_path = Some(PathBuf::from(path));
        }
        self
    }
}

/// Numeric environment variable; unset is `None`
fn env_f64(key: &str) -> std::result::Result<Option<f64>, McpmError> {
    match std::env::var(key) {
        Ok(val) => val
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| McpmError::Config(format!("{key} is not a number: {val}"))),
        Err(_) => Ok(None),
    }
}
