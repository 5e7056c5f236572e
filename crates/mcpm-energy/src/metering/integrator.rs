//! Energy integration
//!
//! Sums the per-period draws of a system's components. Every draw must be
//! present, finite, and non-negative; one bad component fails the whole sum.

use mcpm_common::{
    ensure_non_negative, EnergyComponent, EnergyProfile, McpmError, Result, SystemState,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Usage of a single component within a breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentUsage {
    /// Component name
    pub name: String,
    /// Draw per period (kWh/day)
    pub kwh_per_day: f64,
    /// Fraction of the total (0.0 - 1.0), 0 when the total is 0
    pub share: f64,
}

/// Energy cost with per-component breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyBreakdown {
    /// Total draw per period (kWh/day)
    pub total_kwh_per_day: f64,
    /// Component usages, in input order
    pub components: Vec<ComponentUsage>,
}

impl EnergyBreakdown {
    /// Largest consumer, if any
    pub fn dominant(&self) -> Option<&ComponentUsage> {
        self.components
            .iter()
            .max_by(|a, b| a.kwh_per_day.total_cmp(&b.kwh_per_day))
    }
}

impl std::fmt::Display for EnergyBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Energy: {:.1} {}",
            self.total_kwh_per_day,
            mcpm_common::ENERGY_UNIT
        )?;
        for usage in &self.components {
            writeln!(
                f,
                "  {:<20} {:>10.2} ({:>5.1}%)",
                usage.name,
                usage.kwh_per_day,
                usage.share * 100.0
            )?;
        }
        Ok(())
    }
}

/// Stateless energy integrator
pub struct EnergyIntegrator;

impl EnergyIntegrator {
    /// Validated draw of one component
    fn draw(component: &EnergyComponent) -> Result<f64> {
        let draw = component.draw_kwh_per_day.ok_or_else(|| {
            McpmError::InvalidInput(format!(
                "energy draw missing for component '{}'",
                component.name
            ))
        })?;
        ensure_non_negative(&format!("energy draw of '{}'", component.name), draw)
    }

    /// Sum of per-period draws (kWh/day); empty input integrates to 0
    pub fn integrate(components: &[EnergyComponent]) -> Result<f64> {
        let mut total = 0.0;
        for component in components {
            total += Self::draw(component)?;
        }
        debug!(components = components.len(), total_kwh = total, "Integrated energy");
        Ok(total)
    }

    /// Total plus each component's share of it
    #[instrument(skip(profile), fields(components = profile.len()))]
    pub fn breakdown(profile: &EnergyProfile) -> Result<EnergyBreakdown> {
        let draws = profile
            .components
            .iter()
            .map(|c| Self::draw(c).map(|kwh| (c.name.clone(), kwh)))
            .collect::<Result<Vec<_>>>()?;

        let total: f64 = draws.iter().map(|(_, kwh)| kwh).sum();
        let components = draws
            .into_iter()
            .map(|(name, kwh_per_day)| ComponentUsage {
                name,
                kwh_per_day,
                share: if total > 0.0 { kwh_per_day / total } else { 0.0 },
            })
            .collect();

        Ok(EnergyBreakdown {
            total_kwh_per_day: total,
            components,
        })
    }

    /// Energy cost of a system, `None` when it carries no energy profile
    pub fn energy_cost(state: &SystemState) -> Result<Option<f64>> {
        state
            .energy
            .as_ref()
            .map(|profile| Self::integrate(&profile.components))
            .transpose()
    }
}

/// Sum of per-period draws (kWh/day)
pub fn integrate(components: &[EnergyComponent]) -> Result<f64> {
    EnergyIntegrator::integrate(components)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_integrates_to_zero() {
        assert_eq!(integrate(&[]).unwrap(), 0.0);
    }

    #[test]
    fn test_sum_of_draws() {
        let components = vec![
            EnergyComponent::new("heating", 3.5),
            EnergyComponent::new("lighting", 0.5),
            EnergyComponent::new("cooking", 2.0),
        ];
        assert!((integrate(&components).unwrap() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_draw_rejected() {
        let components = vec![
            EnergyComponent::new("solar_export", -1.0),
            EnergyComponent::new("lighting", 0.5),
        ];
        let err = integrate(&components).unwrap_err();
        assert!(matches!(err, McpmError::InvalidInput(_)));
        assert!(err.to_string().contains("solar_export"));
    }

    #[test]
    fn test_missing_draw_rejected() {
        let components = vec![EnergyComponent::unmeasured("pump")];
        let err = integrate(&components).unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_nan_draw_rejected() {
        assert!(integrate(&[EnergyComponent::new("fan", f64::NAN)]).is_err());
    }

    #[test]
    fn test_breakdown_shares() {
        let profile = EnergyProfile::default().with("compute", 45.0).with("cooling", 15.0);
        let breakdown = EnergyIntegrator::breakdown(&profile).unwrap();

        assert!((breakdown.total_kwh_per_day - 60.0).abs() < 1e-12);
        assert!((breakdown.components[0].share - 0.75).abs() < 1e-12);
        assert!((breakdown.components[1].share - 0.25).abs() < 1e-12);
        assert_eq!(breakdown.dominant().unwrap().name, "compute");
        assert!(breakdown.to_string().contains("60.0 kWh/day"));
    }

    #[test]
    fn test_breakdown_zero_total_has_zero_shares() {
        let profile = EnergyProfile::default().with("idle", 0.0);
        let breakdown = EnergyIntegrator::breakdown(&profile).unwrap();
        assert_eq!(breakdown.components[0].share, 0.0);
    }

    #[test]
    fn test_energy_cost_of_state() {
        let state = SystemState::new(1.0, 1.0, 1.0, 0.5, 0.0);
        assert_eq!(EnergyIntegrator::energy_cost(&state).unwrap(), None);

        let state = state.with_energy(EnergyProfile::flat(6.0));
        assert_eq!(EnergyIntegrator::energy_cost(&state).unwrap(), Some(6.0));
    }
}
