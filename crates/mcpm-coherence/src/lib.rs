//! # MCPM Coherence
//!
//! Systemic coherence measurement. This crate MEASURES systems; it never
//! suggests interventions, optimizes toward targets, or applies control.
//!
//! ## Coherence Formula
//!
//! ```text
//! M(S) = (R_e × A × D × f(C)) − L
//! ```
//!
//! Where:
//! - R_e: Resonance energy (constructive interaction flow)
//! - A: Adaptability (recovery rate)
//! - D: Diversity (viable strategies)
//! - f(C): Coupling function, peaked at the optimal coupling C*
//! - L: Loss rate (waste/harm/entropy)
//!
//! ## Efficiency
//!
//! ```text
//! η = M(S) / E
//! ```
//!
//! Where E is the integrated energy cost in kWh/day.

pub mod comparison;
pub mod coupling;
pub mod efficiency;
pub mod metric;
pub mod presets;
pub mod replacement;

use mcpm_common::{ensure_non_negative, CouplingMatrix, McpmError, Result};
use serde::{Deserialize, Serialize};

pub use comparison::{compare_systems, rank, SystemComparison, SystemSummary};
pub use coupling::CouplingFunction;
pub use efficiency::{efficiency, EfficiencyCalculator};
pub use metric::{CoherenceBreakdown, CoherenceMetric};
pub use replacement::{
    EthicalFlag, FlagKind, ReplacementAnalysis, ReplacementReport, ReplacementScenario,
    Severity, ThermodynamicVerdict,
};

/// Default coupling sensitivity α in f(C) = exp(−α·d²)
pub const DEFAULT_COUPLING_ALPHA: f64 = 1.0;

/// Default peak of f(C) for scalar coupling
pub const DEFAULT_SCALAR_COUPLING_OPTIMUM: f64 = 0.5;

/// Coherence measurement configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoherenceConfig {
    /// Coupling sensitivity α (Gaussian width σ = 1/√(2α))
    pub alpha: f64,
    /// Scalar coupling at which f(C) peaks
    pub scalar_optimum: f64,
    /// Optimal coupling matrix C*; `None` uses I/φ of the input's dimension
    pub matrix_optimum: Option<CouplingMatrix>,
}

impl Default for CoherenceConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_COUPLING_ALPHA,
            scalar_optimum: DEFAULT_SCALAR_COUPLING_OPTIMUM,
            matrix_optimum: None,
        }
    }
}

impl CoherenceConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(McpmError::InvalidInput(format!(
                "coupling alpha must be positive and finite, got {}",
                self.alpha
            )));
        }
        ensure_non_negative("scalar_optimum", self.scalar_optimum)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(CoherenceConfig::default().validate().is_ok());
    }

    #[test]
    fn test_non_positive_alpha_rejected() {
        let config = CoherenceConfig {
            alpha: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
