//! Medoid selection: the discrete minimisation that replaces the k-means mean.
//!
//! For a cluster C the new medoid is
//!
//! ```text
//! argmin_{c ∈ C} Σ_{o ∈ C, o ≠ c} d(c, o)
//! ```
//!
//! There is no closed form, so every member is tried as a candidate:
//! O(|C|²) dissimilarity evaluations per cluster, O(n²) per round in the worst
//! case (one cluster holding everything). This is the dominant cost of a run.

use super::provider::Dissimilarity;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Member of `cluster` with the smallest total dissimilarity to the others.
///
/// Ties go to the lowest index. Returns `None` for an empty cluster.
pub fn select_medoid<D: Dissimilarity + ?Sized>(d: &D, cluster: &[usize]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for &candidate in cluster {
        let total: f64 = cluster
            .iter()
            .filter(|&&other| other != candidate)
            .map(|&other| d.dissimilarity(candidate, other))
            .sum();

        best = match best {
            Some((idx, cost)) if cost < total || (cost == total && idx < candidate) => {
                Some((idx, cost))
            }
            _ => Some((candidate, total)),
        };
    }

    best.map(|(idx, _)| idx)
}

/// New medoid for every cluster. An empty cluster keeps its previous medoid.
pub fn update_medoids<D: Dissimilarity + ?Sized>(
    d: &D,
    clusters: &[Vec<usize>],
    previous: &[usize],
) -> Vec<usize> {
    debug_assert_eq!(clusters.len(), previous.len());

    #[cfg(feature = "parallel")]
    let medoids = clusters
        .par_iter()
        .zip(previous.par_iter())
        .map(|(cluster, &prev)| select_medoid(d, cluster).unwrap_or(prev))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let medoids = clusters
        .iter()
        .zip(previous.iter())
        .map(|(cluster, &prev)| select_medoid(d, cluster).unwrap_or(prev))
        .collect();

    medoids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::kmedoids::provider::{PointDistances, RowMatrix};
    use crate::metric::{Manhattan, SquaredEuclidean};

    #[test]
    fn test_select_central_member() {
        let data = vec![vec![0.0], vec![1.0], vec![2.0], vec![10.0]];
        let d = PointDistances::new(&data, &Manhattan).unwrap();

        // Totals: 0 -> 13, 1 -> 11, 2 -> 11, 3 -> 27; tie broken by index.
        assert_eq!(select_medoid(&d, &[0, 1, 2, 3]), Some(1));
        assert_eq!(select_medoid(&d, &[0, 1, 2]), Some(1));
    }

    #[test]
    fn test_tie_goes_to_lowest_index_regardless_of_order() {
        let data = vec![vec![0.0], vec![1.0]];
        let d = PointDistances::new(&data, &SquaredEuclidean).unwrap();

        assert_eq!(select_medoid(&d, &[0, 1]), Some(0));
        assert_eq!(select_medoid(&d, &[1, 0]), Some(0));
    }

    #[test]
    fn test_empty_and_singleton() {
        let data = vec![vec![0.0], vec![1.0]];
        let d = PointDistances::new(&data, &SquaredEuclidean).unwrap();

        assert_eq!(select_medoid(&d, &[]), None);
        assert_eq!(select_medoid(&d, &[1]), Some(1));
    }

    #[test]
    fn test_self_distance_ignored() {
        // Item 0 has a nonzero diagonal entry; it must not count against it.
        let rows = vec![
            vec![100.0, 1.0, 1.0],
            vec![1.0, 0.0, 5.0],
            vec![1.0, 5.0, 0.0],
        ];
        let d = RowMatrix::new(&rows).unwrap();
        assert_eq!(select_medoid(&d, &[0, 1, 2]), Some(0));
    }

    #[test]
    fn test_update_keeps_previous_for_empty_cluster() {
        let data = vec![vec![0.0], vec![1.0], vec![2.0], vec![8.0]];
        let d = PointDistances::new(&data, &SquaredEuclidean).unwrap();

        let clusters = vec![vec![0, 1, 2], vec![]];
        assert_eq!(update_medoids(&d, &clusters, &[0, 3]), vec![1, 3]);
    }
}
