//! # medoid
//!
//! K-medoids (PAM) clustering over point data or precomputed distance matrices.
//!
//! Every cluster is represented by one of its own members, so the algorithm
//! only needs a pairwise dissimilarity: a [`Metric`] over coordinates, or an
//! n×n matrix.
//!
//! Enable the `parallel` feature to spread each round's assignment and medoid
//! search over rayon; results are identical to the sequential build.

pub mod cluster;
/// Error types used across `medoid`.
pub mod error;
pub mod metric;
pub mod quality;

pub use cluster::{
    Clustering, ClusteringResult, DataKind, Dissimilarity, Kmedoids, Partition, PointDistances,
    RowMatrix,
};
pub use error::{Error, Result};
pub use metric::{
    pairwise_distances, Chebyshev, Euclidean, Manhattan, Metric, Minkowski, SquaredEuclidean,
};
pub use quality::{mean_silhouette, silhouette, total_deviation};
