//! Core data types for MCPM measurement

pub mod coupling;
pub mod energy;
pub mod system_state;
