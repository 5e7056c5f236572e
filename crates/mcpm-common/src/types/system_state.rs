//! SystemState - Raw measurements of the system being measured
//!
//! Coherence is computed from five measurements:
//! - R_e (resonance energy): constructive interaction flow
//! - A (adaptability): recovery rate coefficient
//! - D (diversity): effective number of viable strategies
//! - C (coupling): subsystem interaction strengths
//! - L (loss rate): waste, harm, or entropy rate
//!
//! Energy, population, and description are optional metadata used for
//! efficiency and reporting.

use serde::{Deserialize, Serialize};

use super::coupling::Coupling;
use super::energy::EnergyProfile;
use crate::error::Result;
use crate::ensure_non_negative;

/// State of a system being measured
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemState {
    /// R_e: constructive interaction flow
    pub resonance_energy: f64,

    /// A: recovery rate coefficient
    pub adaptability: f64,

    /// D: effective number of viable strategies
    pub diversity: f64,

    /// C: subsystem interaction strengths
    pub coupling: Coupling,

    /// L: waste/harm/entropy rate
    pub loss_rate: f64,

    /// Energy-consuming components (kWh/day)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<EnergyProfile>,

    /// Population covered by the measurement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,

    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SystemState {
    /// Create a state with no metadata
    pub fn new(
        resonance_energy: f64,
        adaptability: f64,
        diversity: f64,
        coupling: impl Into<Coupling>,
        loss_rate: f64,
    ) -> Self {
        Self {
            resonance_energy,
            adaptability,
            diversity,
            coupling: coupling.into(),
            loss_rate,
            energy: None,
            population: None,
            description: None,
        }
    }

    pub fn with_energy(mut self, energy: EnergyProfile) -> Self {
        self.energy = Some(energy);
        self
    }

    pub fn with_population(mut self, population: u64) -> Self {
        self.population = Some(population);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Description or a placeholder for reports
    pub fn label(&self) -> &str {
        self.description.as_deref().unwrap_or("(undescribed system)")
    }

    /// Check every measurement is inside its domain
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("resonance_energy", self.resonance_energy)?;
        ensure_non_negative("adaptability", self.adaptability)?;
        ensure_non_negative("diversity", self.diversity)?;
        ensure_non_negative("loss_rate", self.loss_rate)?;
        self.coupling.validate()
    }
}
