//! Coherence calculation: M(S) = (R_e × A × D × f(C)) − L

use mcpm_common::{ensure_finite, Coupling, Result, SystemState};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::coupling::CouplingFunction;
use crate::CoherenceConfig;

/// Term-by-term view of a coherence measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoherenceBreakdown {
    pub resonance_energy: f64,
    pub adaptability: f64,
    pub diversity: f64,
    /// f(C)
    pub coupling_factor: f64,
    /// R_e × A × D × f(C)
    pub gain: f64,
    pub loss_rate: f64,
    /// gain − loss
    pub coherence: f64,
}

impl CoherenceBreakdown {
    /// Positive coherence means the system's gains outweigh its losses
    pub fn is_coherent(&self) -> bool {
        self.coherence > 0.0
    }
}

impl std::fmt::Display for CoherenceBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "M(S) = {:.3} × {:.3} × {:.3} × f(C)={:.3} − {:.3} = {:.3}",
            self.resonance_energy,
            self.adaptability,
            self.diversity,
            self.coupling_factor,
            self.loss_rate,
            self.coherence
        )
    }
}

/// Calculates systemic coherence M(S)
///
/// Measures only. Positive values indicate a coherent system, negative
/// values a system whose losses exceed its gains.
#[derive(Debug, Clone, Default)]
pub struct CoherenceMetric {
    coupling: CouplingFunction,
}

impl CoherenceMetric {
    pub fn new(config: &CoherenceConfig) -> Result<Self> {
        Ok(Self {
            coupling: CouplingFunction::new(config)?,
        })
    }

    pub fn coupling(&self) -> &CouplingFunction {
        &self.coupling
    }

    /// f(C)
    pub fn coupling_function(&self, coupling: &Coupling) -> Result<f64> {
        self.coupling.evaluate(coupling)
    }

    /// M(S) from the five raw measurements
    pub fn calculate(
        &self,
        resonance_energy: f64,
        adaptability: f64,
        diversity: f64,
        coupling: &Coupling,
        loss_rate: f64,
    ) -> Result<f64> {
        let state = SystemState::new(
            resonance_energy,
            adaptability,
            diversity,
            coupling.clone(),
            loss_rate,
        );
        Ok(self.breakdown(&state)?.coherence)
    }

    pub fn calculate_from_state(&self, state: &SystemState) -> Result<f64> {
        Ok(self.breakdown(state)?.coherence)
    }

    /// Full term breakdown of M(S)
    pub fn breakdown(&self, state: &SystemState) -> Result<CoherenceBreakdown> {
        state.validate()?;

        let coupling_factor = self.coupling.evaluate(&state.coupling)?;
        // Large finite inputs can overflow the product
        let gain = ensure_finite(
            "gain",
            state.resonance_energy * state.adaptability * state.diversity * coupling_factor,
        )?;
        let coherence = ensure_finite("coherence", gain - state.loss_rate)?;

        debug!(
            system = state.label(),
            coupling_factor, gain, coherence, "Measured coherence"
        );

        Ok(CoherenceBreakdown {
            resonance_energy: state.resonance_energy,
            adaptability: state.adaptability,
            diversity: state.diversity,
            coupling_factor,
            gain,
            loss_rate: state.loss_rate,
            coherence,
        })
    }
}
