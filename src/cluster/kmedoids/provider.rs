//! Dissimilarity providers: the single seam between the algorithm and its data.
//!
//! Assignment, medoid selection and the convergence check only ever ask for
//! `d(i, j)` between two item indices. Whether that value is computed from raw
//! coordinates or read from a precomputed matrix is decided once per run.

use crate::error::{Error, Result};
use crate::metric::Metric;
use ndarray::ArrayView2;

/// Pairwise dissimilarity over items `0..len()`.
///
/// Values should be nonnegative, symmetric and zero on the diagonal.
pub trait Dissimilarity: Sync {
    /// Number of items.
    fn len(&self) -> usize;

    /// Whether there are no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dissimilarity between items `i` and `j`.
    fn dissimilarity(&self, i: usize, j: usize) -> f64;
}

/// Point mode: evaluates a metric over raw coordinates on every call.
#[derive(Debug, Clone, Copy)]
pub struct PointDistances<'a, M: ?Sized> {
    data: &'a [Vec<f64>],
    metric: &'a M,
}

impl<'a, M: Metric + ?Sized> PointDistances<'a, M> {
    /// Wrap a dataset, checking every point has the dimensionality of the first.
    pub fn new(data: &'a [Vec<f64>], metric: &'a M) -> Result<Self> {
        let d = data.first().map_or(0, Vec::len);
        if let Some(p) = data.iter().find(|p| p.len() != d) {
            return Err(Error::DimensionMismatch {
                expected: d,
                found: p.len(),
            });
        }
        Ok(Self { data, metric })
    }

    /// Dimensionality of the wrapped points.
    pub fn dim(&self) -> usize {
        self.data.first().map_or(0, Vec::len)
    }
}

impl<M: Metric + ?Sized> Dissimilarity for PointDistances<'_, M> {
    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn dissimilarity(&self, i: usize, j: usize) -> f64 {
        self.metric.distance(&self.data[i], &self.data[j])
    }
}

/// Matrix mode over dataset rows: row `i` holds the distances from item `i`.
#[derive(Debug, Clone, Copy)]
pub struct RowMatrix<'a> {
    rows: &'a [Vec<f64>],
}

impl<'a> RowMatrix<'a> {
    /// Wrap rows as an n×n matrix, rejecting any row whose width is not n
    /// and any entry that is negative or not finite.
    pub fn new(rows: &'a [Vec<f64>]) -> Result<Self> {
        let n = rows.len();
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(Error::NotSquare {
                row,
                expected: n,
                found: r.len(),
            });
        }
        for (row, r) in rows.iter().enumerate() {
            for (col, &value) in r.iter().enumerate() {
                check_entry(row, col, value)?;
            }
        }
        Ok(Self { rows })
    }
}

impl Dissimilarity for RowMatrix<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    fn dissimilarity(&self, i: usize, j: usize) -> f64 {
        self.rows[i][j]
    }
}

/// Matrix mode over an ndarray view. Callers must validate the view first,
/// see [`check_matrix`].
impl Dissimilarity for ArrayView2<'_, f64> {
    #[inline]
    fn len(&self) -> usize {
        self.nrows()
    }

    #[inline]
    fn dissimilarity(&self, i: usize, j: usize) -> f64 {
        self[[i, j]]
    }
}

/// Reject non-square matrices and entries that are negative or not finite.
pub fn check_matrix(matrix: &ArrayView2<'_, f64>) -> Result<()> {
    let (rows, cols) = matrix.dim();
    if rows != cols {
        return Err(Error::ShapeMismatch {
            expected: format!("{rows}x{rows}"),
            actual: format!("{rows}x{cols}"),
        });
    }
    for ((row, col), &value) in matrix.indexed_iter() {
        check_entry(row, col, value)?;
    }
    Ok(())
}

#[inline]
fn check_entry(row: usize, col: usize, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidDistance { row, col, value })
    }
}
