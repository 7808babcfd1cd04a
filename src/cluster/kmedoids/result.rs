use crate::cluster::traits::Partition;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of a k-medoids run.
///
/// `clusters[i]` holds the members whose nearest medoid is `medoids[i]`;
/// together the clusters partition `0..n`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClusteringResult {
    pub(crate) clusters: Vec<Vec<usize>>,
    pub(crate) medoids: Vec<usize>,
    pub(crate) iterations: usize,
    pub(crate) converged: bool,
    pub(crate) total_deviation: f64,
}

impl ClusteringResult {
    /// Member indices per cluster, ascending within each cluster.
    pub fn clusters(&self) -> &[Vec<usize>] {
        &self.clusters
    }

    /// Final medoid per cluster position.
    pub fn medoids(&self) -> &[usize] {
        &self.medoids
    }

    /// Number of recompute rounds run.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Whether the displacement tolerance was met before the iteration limit.
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Sum over all items of the dissimilarity to their medoid.
    pub fn total_deviation(&self) -> f64 {
        self.total_deviation
    }

    /// Positions of clusters that ended up with no members.
    pub fn empty_clusters(&self) -> Vec<usize> {
        self.clusters
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(k, _)| k)
            .collect()
    }

    /// Consume into `(clusters, medoids)`.
    pub fn into_parts(self) -> (Vec<Vec<usize>>, Vec<usize>) {
        (self.clusters, self.medoids)
    }
}

impl Partition for ClusteringResult {
    fn clusters(&self) -> &[Vec<usize>] {
        &self.clusters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ClusteringResult {
        ClusteringResult {
            clusters: vec![vec![0, 2], vec![], vec![1, 3, 4]],
            medoids: vec![0, 5, 3],
            iterations: 2,
            converged: true,
            total_deviation: 3.5,
        }
    }

    #[test]
    fn test_labels_from_clusters() {
        assert_eq!(sample().labels(), vec![0, 2, 0, 2, 2]);
    }

    #[test]
    fn test_empty_clusters() {
        assert_eq!(sample().empty_clusters(), vec![1]);
    }

    #[test]
    fn test_into_parts() {
        let (clusters, medoids) = sample().into_parts();
        assert_eq!(clusters.len(), 3);
        assert_eq!(medoids, vec![0, 5, 3]);
    }
}
