//! Cluster assignment: every item goes to its nearest medoid.

use super::provider::Dissimilarity;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A partition of `0..n` by nearest medoid.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Assignment {
    /// Members per medoid position, ascending.
    pub clusters: Vec<Vec<usize>>,
    /// Sum of each item's dissimilarity to its medoid.
    pub total_deviation: f64,
}

/// Partition all items by nearest medoid.
///
/// Ties go to the lowest medoid position, so a medoid sitting at distance
/// zero from an earlier one leaves its own cluster empty.
///
/// Panics if a medoid index is not below `d.len()`.
pub fn assign_clusters<D: Dissimilarity + ?Sized>(d: &D, medoids: &[usize]) -> Vec<Vec<usize>> {
    assign(d, medoids).clusters
}

pub(crate) fn assign<D: Dissimilarity + ?Sized>(d: &D, medoids: &[usize]) -> Assignment {
    let n = d.len();

    #[cfg(feature = "parallel")]
    let nearest: Vec<(usize, f64)> = (0..n)
        .into_par_iter()
        .map(|p| nearest_medoid(d, p, medoids))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let nearest: Vec<(usize, f64)> = (0..n)
        .map(|p| nearest_medoid(d, p, medoids))
        .collect();

    // Merged in index order so members stay ascending and the deviation sum
    // does not depend on scheduling.
    let mut clusters = vec![Vec::new(); medoids.len()];
    let mut total_deviation = 0.0;
    for (p, (pos, dist)) in nearest.into_iter().enumerate() {
        clusters[pos].push(p);
        total_deviation += dist;
    }

    Assignment {
        clusters,
        total_deviation,
    }
}

#[inline]
fn nearest_medoid<D: Dissimilarity + ?Sized>(
    d: &D,
    p: usize,
    medoids: &[usize],
) -> (usize, f64) {
    let mut best_pos = 0;
    let mut best_dist = f64::INFINITY;
    for (pos, &m) in medoids.iter().enumerate() {
        let dist = d.dissimilarity(p, m);
        if dist < best_dist {
            best_dist = dist;
            best_pos = pos;
        }
    }
    (best_pos, best_dist)
}
