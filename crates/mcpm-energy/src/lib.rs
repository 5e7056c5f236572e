//! # MCPM Energy
//!
//! Energy integration for MCPM coherence measurement.
//!
//! ## Energy Cost
//!
//! ```text
//! E = Σ draw_i        (kWh/day)
//! ```
//!
//! Where each `draw_i` is the per-period draw of one energy-consuming
//! component. A missing or negative draw fails the integration; an empty
//! component set costs nothing.

pub mod metering;

pub use metering::{integrate, ComponentUsage, EnergyBreakdown, EnergyIntegrator};
