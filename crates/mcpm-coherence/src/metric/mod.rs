//! Coherence metric module
pub mod calculator;

pub use self::calculator::{CoherenceBreakdown, CoherenceMetric};
