//! Medoid-based clustering.
//!
//! ## Medoids vs Centroids
//!
//! K-means represents a cluster by its **centroid**, the coordinate-wise
//! mean. That point usually is not in the dataset, and it only makes sense
//! when a mean makes sense (vectors under a Euclidean-like metric).
//!
//! K-medoids represents a cluster by its **medoid**, the member with the
//! smallest total dissimilarity to the other members. Because the
//! representative is always an actual item:
//!
//! - any dissimilarity works, including non-metric ones and precomputed
//!   matrices over things that have no coordinates at all
//! - results are more robust to outliers (an outlier drags a mean, not a medoid)
//! - the representative can be shown to a user as a real example
//!
//! The price is the update step: finding a medoid is a search over the
//! members, O(|C|²) instead of O(|C|).
//!
//! ## Algorithm
//!
//! [`Kmedoids`] implements the alternating PAM loop:
//!
//! ```text
//! assign → recompute medoids → check displacement ≤ tol ? stop : repeat
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use medoid::cluster::{Clustering, Kmedoids};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![1.0, 0.0],
//!     vec![0.0, 1.0],
//!     vec![10.0, 10.0],
//!     vec![11.0, 10.0],
//!     vec![10.0, 11.0],
//! ];
//!
//! let result = Kmedoids::new(vec![0, 3]).process(&data).unwrap();
//! assert_eq!(result.clusters(), &[vec![0, 1, 2], vec![3, 4, 5]]);
//! assert_eq!(result.medoids(), &[0, 3]);
//!
//! // Flat labels
//! let labels = Kmedoids::new(vec![0, 3]).fit_predict(&data).unwrap();
//! assert_eq!(labels, vec![0, 0, 0, 1, 1, 1]);
//! ```

pub mod init;
pub mod kmedoids;
mod traits;

pub use kmedoids::{
    assign_clusters, check_matrix, is_converged, max_displacement, select_medoid, update_medoids,
    ClusteringResult, DataKind, Dissimilarity, Kmedoids, PointDistances, RowMatrix,
};
pub use traits::{Clustering, Partition};
