//! Internal quality measures for a partition.
//!
//! Unlike external metrics (ARI, NMI), these need no ground truth: they only
//! look at the dissimilarities and the clusters.
//!
//! # Measures
//!
//! | Measure | Range | Best | Properties |
//! |---------|-------|------|------------|
//! | [`silhouette`] | [-1, 1] per item | 1 | Cohesion vs separation |
//! | [`mean_silhouette`] | [-1, 1] | 1 | Average over all items |
//! | [`total_deviation`] | [0, ∞) | 0 | The k-medoids objective |
//!
//! # Example
//!
//! ```rust
//! use medoid::cluster::{Clustering, Kmedoids, PointDistances};
//! use medoid::metric::Euclidean;
//! use medoid::quality::mean_silhouette;
//!
//! let data = vec![vec![0.0], vec![0.5], vec![10.0], vec![10.5]];
//! let result = Kmedoids::new(vec![0, 2]).with_metric(Euclidean).process(&data).unwrap();
//!
//! let d = PointDistances::new(&data, &Euclidean).unwrap();
//! assert!(mean_silhouette(&d, result.clusters()) > 0.9);
//! ```
//!
//! # References
//!
//! - Rousseeuw (1987). "Silhouettes: a graphical aid to the interpretation and
//!   validation of cluster analysis"

use crate::cluster::kmedoids::Dissimilarity;

/// Silhouette coefficient of every item.
///
/// ```text
/// s(i) = (b(i) - a(i)) / max(a(i), b(i))
/// ```
///
/// where a(i) is the mean dissimilarity to the other members of i's cluster
/// and b(i) the smallest mean dissimilarity to any other non-empty cluster.
/// Items in singleton clusters, and all items when there is only one
/// non-empty cluster, score 0.
///
/// Returned in item order; items missing from `clusters` score 0.
pub fn silhouette<D: Dissimilarity + ?Sized>(d: &D, clusters: &[Vec<usize>]) -> Vec<f64> {
    let mut scores = vec![0.0; d.len()];

    for (own, members) in clusters.iter().enumerate() {
        if members.len() < 2 {
            continue;
        }

        for &i in members {
            let a = mean_to(d, i, members);

            let b = clusters
                .iter()
                .enumerate()
                .filter(|(k, other)| *k != own && !other.is_empty())
                .map(|(_, other)| mean_to(d, i, other))
                .fold(f64::INFINITY, f64::min);

            if b.is_finite() {
                let denom = a.max(b);
                if denom > 0.0 {
                    scores[i] = (b - a) / denom;
                }
            }
        }
    }

    scores
}

/// Mean silhouette over all items; 0 for an empty dataset.
pub fn mean_silhouette<D: Dissimilarity + ?Sized>(d: &D, clusters: &[Vec<usize>]) -> f64 {
    let scores = silhouette(d, clusters);
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}

/// Sum over clusters of each member's dissimilarity to the cluster medoid.
pub fn total_deviation<D: Dissimilarity + ?Sized>(
    d: &D,
    clusters: &[Vec<usize>],
    medoids: &[usize],
) -> f64 {
    clusters
        .iter()
        .zip(medoids.iter())
        .map(|(members, &m)| {
            members
                .iter()
                .map(|&i| d.dissimilarity(i, m))
                .sum::<f64>()
        })
        .sum()
}

/// Mean dissimilarity from `i` to the members of `cluster`, excluding `i`.
fn mean_to<D: Dissimilarity + ?Sized>(d: &D, i: usize, cluster: &[usize]) -> f64 {
    let (sum, count) = cluster
        .iter()
        .filter(|&&j| j != i)
        .fold((0.0, 0usize), |(s, c), &j| (s + d.dissimilarity(i, j), c + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::kmedoids::{PointDistances, RowMatrix};
    use crate::metric::Manhattan;

    #[test]
    fn test_silhouette_by_hand() {
        let data = vec![vec![0.0], vec![1.0], vec![5.0], vec![6.0]];
        let d = PointDistances::new(&data, &Manhattan).unwrap();
        let clusters = vec![vec![0, 1], vec![2, 3]];

        let s = silhouette(&d, &clusters);
        // Item 0: a = 1, b = (5 + 6) / 2 = 5.5.
        assert!((s[0] - 4.5 / 5.5).abs() < 1e-12);
        // Item 1: a = 1, b = (4 + 5) / 2 = 4.5.
        assert!((s[1] - 3.5 / 4.5).abs() < 1e-12);
        assert!(s.iter().all(|&x| x > 0.0));
    }

    #[test]
    fn test_bad_partition_scores_negative() {
        let data = vec![vec![0.0], vec![1.0], vec![5.0], vec![6.0]];
        let d = PointDistances::new(&data, &Manhattan).unwrap();

        let crossed = vec![vec![0, 2], vec![1, 3]];
        assert!(mean_silhouette(&d, &crossed) < 0.0);
    }

    #[test]
    fn test_singletons_and_single_cluster_score_zero() {
        let rows = vec![
            vec![0.0, 2.0, 3.0],
            vec![2.0, 0.0, 1.0],
            vec![3.0, 1.0, 0.0],
        ];
        let d = RowMatrix::new(&rows).unwrap();

        assert_eq!(silhouette(&d, &[vec![0, 1, 2]]), vec![0.0; 3]);
        assert_eq!(silhouette(&d, &[vec![0], vec![1, 2]])[0], 0.0);
    }

    #[test]
    fn test_total_deviation() {
        let data = vec![vec![0.0], vec![1.0], vec![5.0], vec![7.0]];
        let d = PointDistances::new(&data, &Manhattan).unwrap();

        let dev = total_deviation(&d, &[vec![0, 1], vec![2, 3]], &[0, 3]);
        assert_eq!(dev, 3.0);
    }
}
