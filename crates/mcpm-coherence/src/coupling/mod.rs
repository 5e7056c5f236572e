//! Coupling function module
pub mod gaussian;

pub use self::gaussian::CouplingFunction;
