//! Efficiency module
pub mod ratio;

pub use self::ratio::{efficiency, EfficiencyCalculator};
