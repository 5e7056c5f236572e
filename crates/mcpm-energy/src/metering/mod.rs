//! Metering module
//!
//! Integrates per-component energy draws into a single cost:
//! - EnergyIntegrator: Validates and sums component draws
//! - EnergyBreakdown: Total with per-component shares

pub mod integrator;

pub use integrator::{integrate, ComponentUsage, EnergyBreakdown, EnergyIntegrator};
