//! Energy descriptors - Per-period energy draws of a measured system
//!
//! Draws are expressed in kWh/day. A component with no recorded draw is kept
//! as `None` so integration can reject it instead of silently counting zero.

use serde::{Deserialize, Serialize};

/// Single energy-consuming component of a system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyComponent {
    /// Component name (e.g., "heating", "compute")
    pub name: String,

    /// Energy draw per period (kWh/day), `None` when not measured
    #[serde(default)]
    pub draw_kwh_per_day: Option<f64>,
}

impl EnergyComponent {
    pub fn new(name: impl Into<String>, draw_kwh_per_day: f64) -> Self {
        Self {
            name: name.into(),
            draw_kwh_per_day: Some(draw_kwh_per_day),
        }
    }

    /// Component whose draw has not been measured
    pub fn unmeasured(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            draw_kwh_per_day: None,
        }
    }
}

/// All energy-consuming components of a system
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnergyProfile {
    pub components: Vec<EnergyComponent>,
}

impl EnergyProfile {
    pub fn new(components: Vec<EnergyComponent>) -> Self {
        Self { components }
    }

    /// Profile with a single aggregate draw
    pub fn flat(kwh_per_day: f64) -> Self {
        Self::new(vec![EnergyComponent::new("total", kwh_per_day)])
    }

    /// Add a component, builder style
    pub fn with(mut self, name: impl Into<String>, kwh_per_day: f64) -> Self {
        self.components.push(EnergyComponent::new(name, kwh_per_day));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }
}
