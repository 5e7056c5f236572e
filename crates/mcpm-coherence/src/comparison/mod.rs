//! System comparison
//!
//! Shows which of two systems creates more coherence, and at what energy
//! cost. Comparison never decides whether one system should replace the
//! other.

use mcpm_common::{Result, SystemState, ENERGY_UNIT};
use mcpm_energy::EnergyIntegrator;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::efficiency::EfficiencyCalculator;
use crate::metric::CoherenceMetric;

/// Measurements of one system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSummary {
    pub description: String,
    pub coherence: f64,
    /// Coherence per kWh/day, `None` without an energy profile
    pub efficiency: Option<f64>,
    /// kWh/day, `None` without an energy profile
    pub energy_cost: Option<f64>,
}

impl SystemSummary {
    pub fn measure(metric: &CoherenceMetric, state: &SystemState) -> Result<Self> {
        Ok(Self {
            description: state.label().to_string(),
            coherence: metric.calculate_from_state(state)?,
            efficiency: EfficiencyCalculator::for_state(metric, state)?,
            energy_cost: EnergyIntegrator::energy_cost(state)?,
        })
    }
}

/// Side-by-side measurement of two systems
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemComparison {
    pub system_a: SystemSummary,
    pub system_b: SystemSummary,
    /// M_b − M_a
    pub delta_coherence: f64,
    /// η_b − η_a, only when both efficiencies exist
    pub delta_efficiency: Option<f64>,
}

/// Compare two systems
#[instrument(skip_all, fields(a = a.label(), b = b.label()))]
pub fn compare_systems(
    metric: &CoherenceMetric,
    a: &SystemState,
    b: &SystemState,
) -> Result<SystemComparison> {
    let system_a = SystemSummary::measure(metric, a)?;
    let system_b = SystemSummary::measure(metric, b)?;

    let delta_efficiency = match (system_a.efficiency, system_b.efficiency) {
        (Some(eff_a), Some(eff_b)) => Some(eff_b - eff_a),
        _ => None,
    };

    Ok(SystemComparison {
        delta_coherence: system_b.coherence - system_a.coherence,
        delta_efficiency,
        system_a,
        system_b,
    })
}

/// Names ordered by coherence, highest first
pub fn rank<'a>(
    metric: &CoherenceMetric,
    systems: &'a [(String, SystemState)],
) -> Result<Vec<(&'a str, f64)>> {
    let mut ranking = systems
        .iter()
        .map(|(name, state)| Ok((name.as_str(), metric.calculate_from_state(state)?)))
        .collect::<Result<Vec<_>>>()?;
    ranking.sort_by(|a, b| b.1.total_cmp(&a.1));
    Ok(ranking)
}

fn fmt_energy(energy: Option<f64>) -> String {
    energy.map_or_else(|| "unknown".to_string(), |e| format!("{e} {ENERGY_UNIT}"))
}

fn fmt_efficiency(efficiency: Option<f64>) -> String {
    efficiency.map_or_else(|| "N/A".to_string(), |e| format!("{e:.4}"))
}

impl std::fmt::Display for SystemComparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (a, b) = (&self.system_a, &self.system_b);
        writeln!(
            f,
            "System A creates {:.2} coherence at {}.",
            a.coherence,
            fmt_energy(a.energy_cost)
        )?;
        writeln!(
            f,
            "System B creates {:.2} coherence at {}.",
            b.coherence,
            fmt_energy(b.energy_cost)
        )?;
        writeln!(
            f,
            "Efficiency ratio: A={}, B={} coherence/kWh.",
            fmt_efficiency(a.efficiency),
            fmt_efficiency(b.efficiency)
        )?;
        writeln!(f)?;
        write!(f, "This is MEASUREMENT, not prescription. You decide what it means.")
    }
}
