//! Coupling - Interaction strength between subsystems
//!
//! Coupling is measured either as a single scalar strength or as a square
//! matrix of pairwise interaction strengths. Both shapes feed the unimodal
//! coupling function, which compares them against an optimal pattern C*.

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::{McpmError, Result};
use crate::{ensure_finite, ensure_non_negative, PHI};

/// Square matrix of subsystem interaction strengths (row-major)
///
/// Always non-empty, square, and finite. Deserializes from a nested JSON
/// array and rejects ragged input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct CouplingMatrix {
    dim: usize,
    values: Vec<f64>,
}

impl CouplingMatrix {
    /// Build a matrix from rows, validating shape and values
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let dim = rows.len();
        if dim == 0 {
            return Err(McpmError::invalid("coupling matrix must not be empty"));
        }

        let mut values = Vec::with_capacity(dim * dim);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != dim {
                return Err(McpmError::InvalidInput(format!(
                    "coupling matrix must be square: row {i} has {} entries, expected {dim}",
                    row.len()
                )));
            }
            for (j, value) in row.into_iter().enumerate() {
                values.push(ensure_finite(&format!("coupling[{i}][{j}]"), value)?);
            }
        }

        Ok(Self { dim, values })
    }

    /// Identity matrix of the given dimension
    pub fn identity(dim: usize) -> Result<Self> {
        Self::new(
            (0..dim)
                .map(|i| (0..dim).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
                .collect(),
        )
    }

    /// Default optimal coupling C* = I / φ
    pub fn golden_optimum(dim: usize) -> Result<Self> {
        Self::identity(dim)?.scaled(1.0 / PHI)
    }

    /// Matrix dimension (rows == columns)
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Entry at row `i`, column `j`
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.dim && j < self.dim {
            Some(self.values[i * self.dim + j])
        } else {
            None
        }
    }

    /// Multiply every entry by `factor`; fails if any entry stops being finite
    pub fn scaled(mut self, factor: f64) -> Result<Self> {
        ensure_finite("scale factor", factor)?;
        for (k, v) in self.values.iter_mut().enumerate() {
            *v = ensure_finite(
                &format!("coupling[{}][{}]", k / self.dim, k % self.dim),
                *v * factor,
            )?;
        }
        Ok(self)
    }

    /// Rows as nested vectors
    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.values.chunks(self.dim).map(<[f64]>::to_vec).collect()
    }

    /// Frobenius norm of `self - other`
    pub fn frobenius_distance(&self, other: &CouplingMatrix) -> Result<f64> {
        if self.dim != other.dim {
            return Err(McpmError::InvalidInput(format!(
                "coupling dimension mismatch: {}x{} vs optimum {}x{}",
                self.dim, self.dim, other.dim, other.dim
            )));
        }
        let sum_sq: f64 = self
            .values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| (a - b).powi(2))
            .sum();
        Ok(sum_sq.sqrt())
    }
}

impl TryFrom<Vec<Vec<f64>>> for CouplingMatrix {
    type Error = McpmError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<CouplingMatrix> for Vec<Vec<f64>> {
    fn from(matrix: CouplingMatrix) -> Self {
        matrix.rows()
    }
}

/// Coupling measurement: a single strength or a full interaction matrix
///
/// JSON form is a bare number or a nested array of rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Coupling {
    /// Aggregate interaction strength (non-negative)
    Scalar(f64),
    /// Pairwise subsystem interaction strengths
    Matrix(CouplingMatrix),
}

impl<'de> Deserialize<'de> for Coupling {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Shape {
            Scalar(f64),
            Rows(Vec<Vec<f64>>),
        }

        match Shape::deserialize(deserializer)? {
            Shape::Scalar(value) => Ok(Coupling::Scalar(value)),
            // Shape checks run after the match so their message survives
            Shape::Rows(rows) => CouplingMatrix::new(rows)
                .map(Coupling::Matrix)
                .map_err(de::Error::custom),
        }
    }
}

impl Coupling {
    /// Check the coupling is inside its domain
    pub fn validate(&self) -> Result<()> {
        match self {
            Coupling::Scalar(value) => ensure_non_negative("coupling", *value).map(|_| ()),
            // Construction and scaling keep entries finite
            Coupling::Matrix(_) => Ok(()),
        }
    }
}

impl From<f64> for Coupling {
    fn from(value: f64) -> Self {
        Coupling::Scalar(value)
    }
}

impl From<CouplingMatrix> for Coupling {
    fn from(matrix: CouplingMatrix) -> Self {
        Coupling::Matrix(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_rejects_ragged() {
        let err = CouplingMatrix::new(vec![vec![1.0, 0.0], vec![0.0]]).unwrap_err();
        assert!(matches!(err, McpmError::InvalidInput(_)));
        assert!(CouplingMatrix::new(vec![]).is_err());
    }

    #[test]
    fn test_matrix_rejects_nan() {
        assert!(CouplingMatrix::new(vec![vec![f64::NAN]]).is_err());
    }

    #[test]
    fn test_golden_optimum() {
        let c_star = CouplingMatrix::golden_optimum(2).unwrap();
        assert!((c_star.get(0, 0).unwrap() - 1.0 / PHI).abs() < 1e-12);
        assert_eq!(c_star.get(0, 1), Some(0.0));
        assert_eq!(c_star.get(2, 0), None);
    }

    #[test]
    fn test_frobenius_distance() {
        let a = CouplingMatrix::new(vec![vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
        let b = CouplingMatrix::new(vec![vec![0.0, 0.0], vec![0.0, 0.0]]).unwrap();
        assert!((a.frobenius_distance(&b).unwrap() - 2f64.sqrt()).abs() < 1e-12);

        let c = CouplingMatrix::identity(3).unwrap();
        assert!(a.frobenius_distance(&c).is_err());
    }

    #[test]
    fn test_coupling_deserialize_untagged() {
        let scalar: Coupling = serde_json::from_str("0.5").unwrap();
        assert_eq!(scalar, Coupling::Scalar(0.5));

        let matrix: Coupling = serde_json::from_str("[[0.6, 0.3], [0.3, 0.6]]").unwrap();
        match matrix {
            Coupling::Matrix(m) => assert_eq!(m.dim(), 2),
            other => panic!("expected matrix, got {other:?}"),
        }

        assert!(serde_json::from_str::<CouplingMatrix>("[[1.0, 2.0], [3.0]]").is_err());
    }

    #[test]
    fn test_ragged_coupling_keeps_shape_message() {
        let err = serde_json::from_str::<Coupling>("[[1.0, 2.0], [3.0]]").unwrap_err();
        assert!(err.to_string().contains("must be square"), "{err}");

        let err = serde_json::from_str::<Coupling>("[]").unwrap_err();
        assert!(err.to_string().contains("must not be empty"), "{err}");

        assert!(serde_json::from_str::<Coupling>("\"strong\"").is_err());
    }

    #[test]
    fn test_coupling_serializes_untagged() {
        let matrix = Coupling::Matrix(CouplingMatrix::identity(2).unwrap());
        assert_eq!(serde_json::to_string(&matrix).unwrap(), "[[1.0,0.0],[0.0,1.0]]");
        assert_eq!(serde_json::to_string(&Coupling::Scalar(0.5)).unwrap(), "0.5");
    }

    #[test]
    fn test_scaled_rejects_overflow() {
        let m = CouplingMatrix::new(vec![vec![1e300, 0.0], vec![0.0, 1.0]]).unwrap();
        assert!(matches!(m.clone().scaled(1e10), Err(McpmError::InvalidInput(_))));
        assert!(m.clone().scaled(f64::NAN).is_err());

        let half = m.scaled(0.5).unwrap();
        assert_eq!(half.get(1, 1), Some(0.5));
    }

    #[test]
    fn test_negative_scalar_invalid() {
        assert!(Coupling::Scalar(-0.1).validate().is_err());
        assert!(Coupling::Scalar(0.0).validate().is_ok());
    }
}
