//! Pairwise point metrics.
//!
//! K-medoids only ever asks "how far apart are points `i` and `j`?", so any
//! function of two coordinate slices returning a nonnegative real is a valid
//! metric. Closures implement [`Metric`] directly:
//!
//! ```rust
//! use medoid::metric::{Metric, SquaredEuclidean};
//!
//! let cosine_ish = |a: &[f64], b: &[f64]| 1.0 - a.iter().zip(b).map(|(x, y)| x * y).sum::<f64>();
//! assert_eq!(cosine_ish.distance(&[1.0, 0.0], &[1.0, 0.0]), 0.0);
//! assert_eq!(SquaredEuclidean.distance(&[0.0, 0.0], &[3.0, 4.0]), 25.0);
//! ```
//!
//! # Choosing a Metric
//!
//! | Metric | Formula | Note |
//! |--------|---------|------|
//! | [`SquaredEuclidean`] | Σ (aᵢ - bᵢ)² | Default; no sqrt, same ordering as Euclidean |
//! | [`Euclidean`] | √Σ (aᵢ - bᵢ)² | |
//! | [`Manhattan`] | Σ \|aᵢ - bᵢ\| | Robust to single-coordinate outliers |
//! | [`Chebyshev`] | max \|aᵢ - bᵢ\| | |
//! | [`Minkowski`] | (Σ \|aᵢ - bᵢ\|ᵖ)^(1/p) | p = 1 Manhattan, p = 2 Euclidean |
//!
//! Unlike k-means, k-medoids does not need the metric to be Euclidean: the
//! medoid is always a real data point, so any dissimilarity works.

use crate::error::{Error, Result};
use ndarray::Array2;

/// Distance between two points of equal dimensionality.
///
/// Implementations must be symmetric and return zero for identical points.
/// Callers guarantee `a.len() == b.len()`.
pub trait Metric: Send + Sync {
    /// Distance between `a` and `b`.
    fn distance(&self, a: &[f64], b: &[f64]) -> f64;
}

impl<F> Metric for F
where
    F: Fn(&[f64], &[f64]) -> f64 + Send + Sync,
{
    #[inline]
    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        self(a, b)
    }
}

/// Squared Euclidean distance. The default metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SquaredEuclidean;

impl Metric for SquaredEuclidean {
    #[inline]
    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| {
                let d = x - y;
                d * d
            })
            .sum()
    }
}

/// Euclidean distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl Metric for Euclidean {
    #[inline]
    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        SquaredEuclidean.distance(a, b).sqrt()
    }
}

/// Manhattan (L1, taxicab) distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Metric for Manhattan {
    #[inline]
    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum()
    }
}

/// Chebyshev (L∞) distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Chebyshev;

impl Metric for Chebyshev {
    #[inline]
    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f64::max)
    }
}

/// Minkowski distance of order `p`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minkowski {
    p: f64,
}

impl Minkowski {
    /// Create a Minkowski metric. `p` below 1 does not satisfy the triangle
    /// inequality but is still usable as a dissimilarity.
    ///
    /// `p` must be positive and finite.
    pub fn new(p: f64) -> Result<Self> {
        if !(p > 0.0 && p.is_finite()) {
            return Err(Error::InvalidParameter {
                name: "p",
                message: "must be positive and finite",
            });
        }
        Ok(Self { p })
    }

    /// Order of the metric.
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Metric for Minkowski {
    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y).abs().powf(self.p))
            .sum::<f64>()
            .powf(1.0 / self.p)
    }
}

/// Full n×n matrix of pairwise distances.
///
/// Every entry, the diagonal included, is computed by calling the metric on
/// `(data[i], data[j])` (no mirroring), so running k-medoids over the matrix reproduces a
/// points-mode run with the same metric exactly.
pub fn pairwise_distances<M: Metric + ?Sized>(data: &[Vec<f64>], metric: &M) -> Array2<f64> {
    let n = data.len();
    Array2::from_shape_fn((n, n), |(i, j)| metric.distance(&data[i], &data[j]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_metrics() {
        let a = [0.0, 0.0];
        let b = [3.0, 4.0];

        assert_eq!(SquaredEuclidean.distance(&a, &b), 25.0);
        assert_eq!(Euclidean.distance(&a, &b), 5.0);
        assert_eq!(Manhattan.distance(&a, &b), 7.0);
        assert_eq!(Chebyshev.distance(&a, &b), 4.0);
    }

    #[test]
    fn test_minkowski_matches_special_cases() {
        let a = [1.0, -2.0, 0.5];
        let b = [4.0, 2.0, -1.5];

        let l1 = Minkowski::new(1.0).unwrap().distance(&a, &b);
        let l2 = Minkowski::new(2.0).unwrap().distance(&a, &b);

        assert!((l1 - Manhattan.distance(&a, &b)).abs() < 1e-12);
        assert!((l2 - Euclidean.distance(&a, &b)).abs() < 1e-12);
    }

    #[test]
    fn test_minkowski_rejects_bad_order() {
        for p in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert_eq!(
                Minkowski::new(p).unwrap_err(),
                Error::InvalidParameter {
                    name: "p",
                    message: "must be positive and finite",
                },
                "p = {p}"
            );
        }
        assert_eq!(Minkowski::new(0.5).unwrap().p(), 0.5);
    }

    #[test]
    fn test_closure_is_metric() {
        let scaled = |a: &[f64], b: &[f64]| 2.0 * Manhattan.distance(a, b);
        assert_eq!(scaled.distance(&[0.0], &[1.5]), 3.0);
    }

    #[test]
    fn test_pairwise_distances_shape_and_symmetry() {
        let data = vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 2.0]];
        let m = pairwise_distances(&data, &SquaredEuclidean);

        assert_eq!(m.dim(), (3, 3));
        for i in 0..3 {
            assert_eq!(m[[i, i]], 0.0);
            for j in 0..3 {
                assert_eq!(m[[i, j]], m[[j, i]]);
            }
        }
        assert_eq!(m[[1, 2]], 5.0);
    }
}
