//! Error types for MCPM measurement
//!
//! Measurement only ever fails on bad input or a zero energy denominator.
//! The remaining variants cover loading descriptors from disk.

use thiserror::Error;

/// Result type alias using McpmError
pub type Result<T> = std::result::Result<T, McpmError>;

/// Unified error type for MCPM operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum McpmError {
    // Measurement errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Division by zero: energy cost is zero")]
    DivisionByZero,

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl McpmError {
    /// Shorthand for an [`McpmError::InvalidInput`]
    pub fn invalid(msg: impl Into<String>) -> Self {
        McpmError::InvalidInput(msg.into())
    }
}

impl From<serde_json::Error> for McpmError {
    fn from(err: serde_json::Error) -> Self {
        McpmError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for McpmError {
    fn from(err: std::io::Error) -> Self {
        McpmError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = McpmError::invalid("diversity must be non-negative");
        assert!(err.to_string().contains("diversity"));
        assert_eq!(
            McpmError::DivisionByZero.to_string(),
            "Division by zero: energy cost is zero"
        );
    }

    #[test]
    fn test_from_serde_json() {
        let err: McpmError = serde_json::from_str::<f64>("not json").unwrap_err().into();
        assert!(matches!(err, McpmError::Serialization(_)));
    }
}
