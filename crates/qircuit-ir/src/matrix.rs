//! Square gate matrices.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

use crate::error::{IrError, IrResult};

/// A square matrix of complex amplitudes, stored row-major.
///
/// Deserialization goes through [`Matrix::new`], so `data.len() == dim * dim`
/// and `dim >= 1` hold for every value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct Matrix {
    dim: usize,
    data: Vec<Complex64>,
}

/// Unchecked serialized form of [`Matrix`].
#[derive(Deserialize)]
struct RawMatrix {
    dim: usize,
    data: Vec<Complex64>,
}

impl TryFrom<RawMatrix> for Matrix {
    type Error = IrError;

    fn try_from(raw: RawMatrix) -> IrResult<Self> {
        Self::new(raw.dim, raw.data)
    }
}

impl Matrix {
    /// Build a matrix from a row-major entry vector of length `dim * dim`.
    pub fn new(dim: usize, data: Vec<Complex64>) -> IrResult<Self> {
        if dim == 0 || data.len() != dim * dim {
            return Err(IrError::NonSquareMatrix(format!(
                "{} entries cannot form a {dim}x{dim} matrix",
                data.len()
            )));
        }
        Ok(Self { dim, data })
    }

    /// Build a matrix from its rows.
    pub fn from_rows(rows: Vec<Vec<Complex64>>) -> IrResult<Self> {
        let dim = rows.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != dim) {
            return Err(IrError::NonSquareMatrix(format!(
                "row {i} has {} entries, expected {dim}",
                row.len()
            )));
        }
        Self::new(dim, rows.into_iter().flatten().collect())
    }

    /// Build a matrix from rows of real entries.
    pub fn from_real_rows<R: AsRef<[f64]>>(rows: &[R]) -> IrResult<Self> {
        Self::from_rows(
            rows.iter()
                .map(|r| r.as_ref().iter().map(|&x| Complex64::new(x, 0.0)).collect())
                .collect(),
        )
    }

    /// The identity matrix of the given dimension.
    ///
    /// # Panics
    ///
    /// Panics if `dim` is zero.
    pub fn identity(dim: usize) -> Self {
        assert!(dim > 0, "identity matrix needs a nonzero dimension");
        let mut data = vec![Complex64::new(0.0, 0.0); dim * dim];
        for i in 0..dim {
            data[i * dim + i] = Complex64::new(1.0, 0.0);
        }
        Self { dim, data }
    }

    /// Number of rows (equal to the number of columns).
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.dim, self.dim)
    }

    /// Entry at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Complex64> {
        (row < self.dim && col < self.dim).then(|| self.data[row * self.dim + col])
    }

    /// Positions `(row, col)` of every nonzero entry, row-major.
    pub fn nonzero_positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let zero = Complex64::new(0.0, 0.0);
        self.data
            .iter()
            .enumerate()
            .filter(move |(_, v)| **v != zero)
            .map(|(k, _)| (k / self.dim, k % self.dim))
    }

    /// True if no nonzero entry lies off the main diagonal.
    ///
    /// An all-zero matrix is diagonal.
    pub fn is_diagonal(&self) -> bool {
        self.nonzero_positions().all(|(i, j)| i == j)
    }

    /// Rows of the matrix.
    pub fn rows(&self) -> impl Iterator<Item = &[Complex64]> {
        self.data.chunks(self.dim)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Complex64;

    fn index(&self, (row, col): (usize, usize)) -> &Complex64 {
        assert!(
            row < self.dim && col < self.dim,
            "index ({row}, {col}) out of range for {0}x{0} matrix",
            self.dim
        );
        &self.data[row * self.dim + col]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                if v.im == 0.0 {
                    write!(f, "{}", v.re)?;
                } else {
                    write!(f, "{v}")?;
                }
            }
        }
        write!(f, "]")
    }
}
