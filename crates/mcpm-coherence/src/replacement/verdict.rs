//! Thermodynamic verdict on a replacement (no ethics involved)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThermodynamicVerdict {
    /// Same coherence at the same energy
    Equivalent,
    /// Coherence does not drop and energy does not rise
    Superior,
    /// More coherence, more energy, but better efficiency
    Favorable,
    /// More coherence, more energy, no efficiency gain
    MixedGain,
    /// Less coherence, less energy
    MixedSaving,
    /// Less coherence at the same or higher energy, or more energy for nothing
    Regressive,
}

impl ThermodynamicVerdict {
    /// Classify coherence, energy, and efficiency deltas (replacement − current)
    pub fn assess(delta_coherence: f64, delta_energy: f64, delta_efficiency: Option<f64>) -> Self {
        let (dm, de) = (delta_coherence, delta_energy);
        if dm == 0.0 && de == 0.0 {
            Self::Equivalent
        } else if dm >= 0.0 && de <= 0.0 {
            Self::Superior
        } else if dm > 0.0 && de > 0.0 {
            match delta_efficiency {
                Some(deff) if deff > 0.0 => Self::Favorable,
                _ => Self::MixedGain,
            }
        } else if dm < 0.0 && de < 0.0 {
            Self::MixedSaving
        } else {
            Self::Regressive
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Equivalent => "THERMODYNAMICALLY_EQUIVALENT",
            Self::Superior => "THERMODYNAMICALLY_SUPERIOR",
            Self::Favorable => "THERMODYNAMICALLY_FAVORABLE",
            Self::MixedGain | Self::MixedSaving => "THERMODYNAMICALLY_MIXED",
            Self::Regressive => "THERMODYNAMICALLY_REGRESSIVE",
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            Self::Equivalent => "same coherence, same energy",
            Self::Superior => "higher or equal coherence, lower or equal energy",
            Self::Favorable => "efficiency improves despite energy increase",
            Self::MixedGain => "higher coherence but also higher energy",
            Self::MixedSaving => "lower energy but also lower coherence",
            Self::Regressive => "lower coherence or higher energy with nothing gained",
        }
    }
}

impl std::fmt::Display for ThermodynamicVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.explanation())
    }
}
