//! # MCPM Common
//!
//! Shared types, errors, and constants for MCPM systemic coherence measurement.
//!
//! ## Core Types
//!
//! - [`SystemState`]: Raw measurements describing the system being measured
//! - [`Coupling`]/[`CouplingMatrix`]: Interaction strength, scalar or matrix
//! - [`EnergyComponent`]/[`EnergyProfile`]: Per-period energy draws (kWh/day)
//!
//! Everything in this crate is read-only input. Correctness of the measured
//! values is the caller's responsibility; this crate only checks their domain.

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{McpmError, Result};
pub use types::{
    coupling::{Coupling, CouplingMatrix},
    energy::{EnergyComponent, EnergyProfile},
    system_state::SystemState,
};

/// MCPM version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Golden ratio φ
pub const PHI: f64 = 1.618_033_988_749_895;

/// Energy unit used throughout reports
pub const ENERGY_UNIT: &str = "kWh/day";

/// Reject NaN and infinities with a field-specific message
pub fn ensure_finite(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(McpmError::InvalidInput(format!("{field} must be finite, got {value}")))
    }
}

/// Reject negative, NaN, and infinite values
pub fn ensure_non_negative(field: &str, value: f64) -> Result<f64> {
    let value = ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(McpmError::InvalidInput(format!(
            "{field} must be non-negative, got {value}"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_non_negative() {
        assert_eq!(ensure_non_negative("diversity", 0.0).unwrap(), 0.0);
        assert_eq!(ensure_non_negative("diversity", 3.0).unwrap(), 3.0);
        assert!(ensure_non_negative("diversity", -0.1).is_err());
        assert!(ensure_non_negative("diversity", f64::INFINITY).is_err());
    }

    #[test]
    fn test_ensure_finite_message() {
        let err = ensure_finite("loss_rate", f64::NAN).unwrap_err();
        assert!(err.to_string().contains("loss_rate"));
    }
}
