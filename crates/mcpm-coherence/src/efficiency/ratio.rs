//! Efficiency calculation: η = M(S) / energy_cost

use mcpm_common::{ensure_finite, McpmError, Result, SystemState};
use mcpm_energy::EnergyIntegrator;

use crate::metric::CoherenceMetric;

/// Coherence per unit of energy (per kWh/day)
///
/// Fails with [`McpmError::DivisionByZero`] when `energy_cost` is zero.
pub fn efficiency(coherence: f64, energy_cost: f64) -> Result<f64> {
    EfficiencyCalculator::calculate(coherence, energy_cost)
}

pub struct EfficiencyCalculator;

impl EfficiencyCalculator {
    /// Calculate efficiency: η = M(S) / E
    pub fn calculate(coherence: f64, energy_cost: f64) -> Result<f64> {
        ensure_finite("coherence", coherence)?;
        ensure_finite("energy_cost", energy_cost)?;
        if energy_cost == 0.0 {
            return Err(McpmError::DivisionByZero);
        }
        if energy_cost < 0.0 {
            return Err(McpmError::InvalidInput(format!(
                "energy_cost must be non-negative, got {energy_cost}"
            )));
        }
        ensure_finite("efficiency", coherence / energy_cost)
    }

    /// Efficiency of a described system; `None` when it has no energy profile
    pub fn for_state(metric: &CoherenceMetric, state: &SystemState) -> Result<Option<f64>> {
        let Some(energy_cost) = EnergyIntegrator::energy_cost(state)? else {
            return Ok(None);
        };
        let coherence = metric.calculate_from_state(state)?;
        Self::calculate(coherence, energy_cost).map(Some)
    }
}

impl CoherenceMetric {
    /// Coherence per kWh/day of a described system
    pub fn efficiency_ratio(&self, state: &SystemState) -> Result<Option<f64>> {
        EfficiencyCalculator::for_state(self, state)
    }
}
