//! Clustering traits.

use crate::error::Result;

/// A hard partition of items `0..n` into ordered clusters.
pub trait Partition {
    /// Member indices per cluster.
    fn clusters(&self) -> &[Vec<usize>];

    /// Flat encoding: `labels[i]` is the position of the cluster holding item `i`.
    fn labels(&self) -> Vec<usize> {
        let clusters = self.clusters();
        let n = clusters.iter().map(Vec::len).sum();
        let mut labels = vec![0; n];
        for (k, members) in clusters.iter().enumerate() {
            for &i in members {
                labels[i] = k;
            }
        }
        labels
    }
}

/// Trait for clustering algorithms.
pub trait Clustering {
    /// What a run produces.
    type Output: Partition;

    /// Run the algorithm over a dataset.
    fn process(&self, data: &[Vec<f64>]) -> Result<Self::Output>;

    /// Run the algorithm and return cluster labels, one per input item.
    fn fit_predict(&self, data: &[Vec<f64>]) -> Result<Vec<usize>> {
        Ok(self.process(data)?.labels())
    }

    /// Get the number of clusters.
    fn n_clusters(&self) -> usize;
}
