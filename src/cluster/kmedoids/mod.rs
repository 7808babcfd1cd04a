//! K-medoids clustering (PAM, Partitioning Around Medoids).
//!
//! Partitions data into k clusters, each represented by one of its own
//! members: the **medoid**. Where k-means moves a synthetic centroid to the
//! mean, k-medoids picks the member minimising total dissimilarity to the rest
//! of its cluster.
//!
//! # The Objective
//!
//! ```text
//! cost = Σₖ Σᵢ∈Cₖ d(xᵢ, mₖ)      with every mₖ a data point
//! ```
//!
//! # The Loop
//!
//! 1. **Assign**: each item → nearest medoid (ties → lowest position)
//! 2. **Recompute**: each cluster → member with least total dissimilarity
//!    (ties → lowest index)
//! 3. **Check**: the largest distance any medoid moved; stop when it is at
//!    or below the tolerance, otherwise go to 1 with the new medoids
//!
//! Because only `d(i, j)` is ever needed, the same loop runs over raw points
//! with any [`Metric`] or over a precomputed distance matrix.
//!
//! # Failure Modes
//!
//! - **Local optima**: the result depends on the initial medoids; see
//!   [`crate::cluster::init`]
//! - **Quadratic cost**: the recompute step is O(|C|²) per cluster
//! - **Empty clusters**: kept as-is, never reseeded; check
//!   [`ClusteringResult::empty_clusters`]

mod assign;
mod convergence;
mod provider;
mod result;
mod select;


pub use assign::assign_clusters;
pub use convergence::{is_converged, max_displacement};
pub use provider::{check_matrix, Dissimilarity, PointDistances, RowMatrix};
pub use result::ClusteringResult;
pub use select::{select_medoid, update_medoids};

use super::traits::Clustering;
use crate::error::{Error, Result};
use crate::metric::{Metric, SquaredEuclidean};
use ndarray::ArrayView2;
use std::collections::HashSet;
use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the rows handed to [`Clustering::process`] are interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DataKind {
    /// Rows are points; distances come from the configured metric.
    #[default]
    Points,
    /// Rows are a precomputed n×n distance matrix.
    DistanceMatrix,
}

/// K-medoids clustering algorithm.
#[derive(Debug, Clone)]
pub struct Kmedoids<M = SquaredEuclidean> {
    /// Initial medoids; their count is k and their order fixes cluster positions.
    initial_medoids: Vec<usize>,
    /// Convergence tolerance on maximum medoid displacement.
    tol: f64,
    /// Maximum recompute rounds.
    max_iter: usize,
    /// Interpretation of input rows.
    data_kind: DataKind,
    /// Point metric, unused for distance matrices.
    metric: M,
}

impl Kmedoids {
    /// Create a new k-medoids clusterer starting from `initial_medoids`.
    pub fn new(initial_medoids: Vec<usize>) -> Self {
        Self {
            initial_medoids,
            tol: 0.01,
            max_iter: 200,
            data_kind: DataKind::Points,
            metric: SquaredEuclidean,
        }
    }
}

impl<M: Metric> Kmedoids<M> {
    /// Set convergence tolerance.
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Set maximum iterations.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set how input rows are interpreted.
    pub fn with_data_kind(mut self, data_kind: DataKind) -> Self {
        self.data_kind = data_kind;
        self
    }

    /// Replace the point metric.
    pub fn with_metric<N: Metric>(self, metric: N) -> Kmedoids<N> {
        Kmedoids {
            initial_medoids: self.initial_medoids,
            tol: self.tol,
            max_iter: self.max_iter,
            data_kind: self.data_kind,
            metric,
        }
    }

    /// Initial medoids.
    pub fn initial_medoids(&self) -> &[usize] {
        &self.initial_medoids
    }

    /// Convergence tolerance.
    pub fn tol(&self) -> f64 {
        self.tol
    }

    /// Maximum iterations.
    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    /// Configured data kind.
    pub fn data_kind(&self) -> DataKind {
        self.data_kind
    }

    /// Configured point metric.
    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Cluster a precomputed distance matrix, ignoring the configured data kind.
    pub fn process_matrix(&self, matrix: ArrayView2<'_, f64>) -> Result<ClusteringResult> {
        check_matrix(&matrix)?;
        self.process_with(&matrix)
    }

    /// Cluster over any dissimilarity provider.
    pub fn process_with<D: Dissimilarity + ?Sized>(&self, d: &D) -> Result<ClusteringResult> {
        self.validate(d.len())?;

        let mut medoids = self.initial_medoids.clone();
        let mut assignment = assign::assign(d, &medoids);
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.max_iter {
            iterations += 1;

            let candidate = update_medoids(d, &assignment.clusters, &medoids);
            let displacement = max_displacement(d, &medoids, &candidate);

            medoids = candidate;
            assignment = assign::assign(d, &medoids);

            debug!(
                iteration = iterations,
                displacement,
                total_deviation = assignment.total_deviation,
                "k-medoids round"
            );

            if is_converged(displacement, self.tol) {
                converged = true;
                break;
            }
        }

        if converged {
            debug!(iterations, "k-medoids converged");
        } else {
            warn!(
                max_iter = self.max_iter,
                tol = self.tol,
                "k-medoids stopped at iteration limit before converging"
            );
        }

        let result = ClusteringResult {
            clusters: assignment.clusters,
            medoids,
            iterations,
            converged,
            total_deviation: assignment.total_deviation,
        };

        let empty = result.empty_clusters();
        if !empty.is_empty() {
            warn!(clusters = ?empty, "k-medoids finished with empty clusters");
        }

        Ok(result)
    }

    /// Label new points by their nearest medoid.
    ///
    /// `data` is the dataset the medoids index into; `points` must share its
    /// dimensionality. Ties go to the lowest medoid position. Only meaningful
    /// for point data.
    pub fn predict(
        &self,
        data: &[Vec<f64>],
        medoids: &[usize],
        points: &[Vec<f64>],
    ) -> Result<Vec<usize>> {
        if self.data_kind == DataKind::DistanceMatrix {
            return Err(Error::InvalidParameter {
                name: "data_kind",
                message: "prediction requires point data",
            });
        }
        if data.is_empty() {
            return Err(Error::EmptyInput);
        }
        check_medoids(medoids, data.len())?;

        let provider = PointDistances::new(data, &self.metric)?;
        let dim = provider.dim();
        if let Some(p) = points.iter().find(|p| p.len() != dim) {
            return Err(Error::DimensionMismatch {
                expected: dim,
                found: p.len(),
            });
        }

        Ok(points
            .iter()
            .map(|point| {
                let mut best_pos = 0;
                let mut best_dist = f64::INFINITY;
                for (pos, &m) in medoids.iter().enumerate() {
                    let dist = self.metric.distance(point, &data[m]);
                    if dist < best_dist {
                        best_dist = dist;
                        best_pos = pos;
                    }
                }
                best_pos
            })
            .collect())
    }

    fn validate(&self, n: usize) -> Result<()> {
        if n == 0 {
            return Err(Error::EmptyInput);
        }
        if self.tol.is_nan() || self.tol < 0.0 {
            return Err(Error::InvalidParameter {
                name: "tol",
                message: "must be non-negative",
            });
        }
        if self.max_iter == 0 {
            return Err(Error::InvalidParameter {
                name: "max_iter",
                message: "must be at least 1",
            });
        }
        check_medoids(&self.initial_medoids, n)
    }
}

/// Medoids must be a non-empty set of distinct indices below `n`.
fn check_medoids(medoids: &[usize], n: usize) -> Result<()> {
    if medoids.is_empty() || medoids.len() > n {
        return Err(Error::InvalidClusterCount {
            requested: medoids.len(),
            n_items: n,
        });
    }

    let mut seen = HashSet::with_capacity(medoids.len());
    for &m in medoids {
        if m >= n {
            return Err(Error::MedoidOutOfRange {
                index: m,
                n_items: n,
            });
        }
        if !seen.insert(m) {
            return Err(Error::DuplicateMedoid { index: m });
        }
    }
    Ok(())
}

impl<M: Metric> Clustering for Kmedoids<M> {
    type Output = ClusteringResult;

    fn process(&self, data: &[Vec<f64>]) -> Result<ClusteringResult> {
        match self.data_kind {
            DataKind::Points => self.process_with(&PointDistances::new(data, &self.metric)?),
            DataKind::DistanceMatrix => self.process_with(&RowMatrix::new(data)?),
        }
    }

    fn n_clusters(&self) -> usize {
        self.initial_medoids.len()
    }
}
