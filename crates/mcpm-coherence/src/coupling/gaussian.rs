//! Non-monotonic coupling function: f(C) = exp(−α · d(C, C*)²)
//!
//! Too weak a coupling fragments a system, too strong a coupling makes it
//! rigid. f peaks at 1.0 when C equals C* and falls off as a Gaussian of
//! the distance d: absolute difference for scalars, Frobenius norm for
//! matrices.

use mcpm_common::{Coupling, CouplingMatrix, McpmError, Result};

use crate::{CoherenceConfig, DEFAULT_COUPLING_ALPHA, DEFAULT_SCALAR_COUPLING_OPTIMUM};

#[derive(Debug, Clone)]
pub struct CouplingFunction {
    alpha: f64,
    scalar_optimum: f64,
    matrix_optimum: Option<CouplingMatrix>,
}

impl Default for CouplingFunction {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_COUPLING_ALPHA,
            scalar_optimum: DEFAULT_SCALAR_COUPLING_OPTIMUM,
            matrix_optimum: None,
        }
    }
}

impl CouplingFunction {
    pub fn new(config: &CoherenceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            alpha: config.alpha,
            scalar_optimum: config.scalar_optimum,
            matrix_optimum: config.matrix_optimum.clone(),
        })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Scalar coupling at which f peaks
    pub fn scalar_optimum(&self) -> f64 {
        self.scalar_optimum
    }

    /// Standard deviation of the Gaussian bump, σ = 1/√(2α)
    pub fn width(&self) -> f64 {
        (2.0 * self.alpha).sqrt().recip()
    }

    /// Optimal matrix for an input of dimension `dim`
    fn optimum_for(&self, dim: usize) -> Result<CouplingMatrix> {
        match &self.matrix_optimum {
            Some(c_star) if c_star.dim() == dim => Ok(c_star.clone()),
            Some(c_star) => Err(McpmError::InvalidInput(format!(
                "coupling dimension mismatch: {dim}x{dim} vs optimum {0}x{0}",
                c_star.dim()
            ))),
            None => CouplingMatrix::golden_optimum(dim),
        }
    }

    /// Distance from the optimal coupling
    pub fn distance(&self, coupling: &Coupling) -> Result<f64> {
        coupling.validate()?;
        match coupling {
            Coupling::Scalar(c) => Ok((c - self.scalar_optimum).abs()),
            Coupling::Matrix(c) => c.frobenius_distance(&self.optimum_for(c.dim())?),
        }
    }

    /// f(C) in (0, 1]
    pub fn evaluate(&self, coupling: &Coupling) -> Result<f64> {
        let d = self.distance(coupling)?;
        Ok((-self.alpha * d * d).exp())
    }
}
