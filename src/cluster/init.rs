//! Initial medoid selection.
//!
//! K-medoids only finds a local optimum, so the starting medoids matter.
//! Two strategies:
//!
//! - [`random_medoids`]: k distinct indices sampled uniformly.
//! - [`kmeans_plusplus_medoids`]: the k-means++ seeding rule applied to data
//!   points. The first medoid is uniform; each next one is drawn with
//!   probability proportional to its dissimilarity to the nearest medoid
//!   chosen so far. With [`SquaredEuclidean`](crate::metric::SquaredEuclidean)
//!   this is exactly the D(x)² weighting of Arthur & Vassilvitskii (2007).
//!
//! Both return indices in draw order; that order becomes the cluster order.

use crate::cluster::kmedoids::Dissimilarity;
use crate::error::{Error, Result};
use rand::prelude::*;

fn check_k(n: usize, k: usize) -> Result<()> {
    if n == 0 {
        return Err(Error::EmptyInput);
    }
    if k == 0 || k > n {
        return Err(Error::InvalidClusterCount {
            requested: k,
            n_items: n,
        });
    }
    Ok(())
}

/// Sample `k` distinct indices from `0..n` uniformly at random.
pub fn random_medoids<R: Rng>(n: usize, k: usize, rng: &mut R) -> Result<Vec<usize>> {
    check_k(n, k)?;
    Ok(rand::seq::index::sample(rng, n, k).into_vec())
}

/// Choose `k` distinct medoids with k-means++ seeding.
pub fn kmeans_plusplus_medoids<D, R>(d: &D, k: usize, rng: &mut R) -> Result<Vec<usize>>
where
    D: Dissimilarity + ?Sized,
    R: Rng,
{
    let n = d.len();
    check_k(n, k)?;

    let mut medoids = Vec::with_capacity(k);
    let mut chosen = vec![false; n];

    // First medoid: random point
    let first = rng.random_range(0..n);
    medoids.push(first);
    chosen[first] = true;

    // Distance from every point to its nearest medoid so far.
    let mut nearest: Vec<f64> = (0..n).map(|j| d.dissimilarity(j, first)).collect();

    while medoids.len() < k {
        let total: f64 = (0..n).filter(|&j| !chosen[j]).map(|j| nearest[j]).sum();

        let selected = if total > 0.0 && total.is_finite() {
            // Sample proportional to distance
            let threshold = rng.random::<f64>() * total;
            let mut cumsum = 0.0;
            let mut selected = None;
            for j in (0..n).filter(|&j| !chosen[j] && nearest[j] > 0.0) {
                cumsum += nearest[j];
                selected = Some(j);
                if cumsum >= threshold {
                    break;
                }
            }
            selected
        } else {
            None
        };

        // Every remaining point coincides with a medoid: pick uniformly.
        let next = match selected {
            Some(j) => j,
            None => {
                let remaining: Vec<usize> = (0..n).filter(|&j| !chosen[j]).collect();
                remaining[rng.random_range(0..remaining.len())]
            }
        };

        medoids.push(next);
        chosen[next] = true;
        for (j, near) in nearest.iter_mut().enumerate() {
            *near = near.min(d.dissimilarity(j, next));
        }
    }

    Ok(medoids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::kmedoids::PointDistances;
    use crate::metric::SquaredEuclidean;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_random_medoids_distinct_and_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let medoids = random_medoids(20, 5, &mut rng).unwrap();

        assert_eq!(medoids.len(), 5);
        let unique: HashSet<_> = medoids.iter().collect();
        assert_eq!(unique.len(), 5);
        assert!(medoids.iter().all(|&m| m < 20));
    }

    #[test]
    fn test_random_medoids_errors() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_medoids(0, 1, &mut rng).is_err());
        assert!(random_medoids(3, 0, &mut rng).is_err());
        assert!(random_medoids(3, 4, &mut rng).is_err());
    }

    #[test]
    fn test_plusplus_spreads_over_groups() {
        // Three tight, far-apart groups: seeding should hit each one.
        let data: Vec<Vec<f64>> = [0.0, 100.0, 200.0]
            .iter()
            .flat_map(|&c| (0..5).map(move |i| vec![c + i as f64 * 0.01]))
            .collect();
        let d = PointDistances::new(&data, &SquaredEuclidean).unwrap();

        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let medoids = kmeans_plusplus_medoids(&d, 3, &mut rng).unwrap();
            let groups: HashSet<usize> = medoids.iter().map(|&m| m / 5).collect();
            assert_eq!(groups.len(), 3, "seed {seed}: {medoids:?}");
        }
    }

    #[test]
    fn test_plusplus_identical_points() {
        let data = vec![vec![1.0, 1.0]; 4];
        let d = PointDistances::new(&data, &SquaredEuclidean).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        let medoids = kmeans_plusplus_medoids(&d, 4, &mut rng).unwrap();
        let unique: HashSet<_> = medoids.iter().collect();
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn test_plusplus_deterministic_with_seed() {
        let data: Vec<Vec<f64>> = (0..30).map(|i| vec![(i * 7 % 11) as f64, i as f64]).collect();
        let d = PointDistances::new(&data, &SquaredEuclidean).unwrap();

        let a = kmeans_plusplus_medoids(&d, 4, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = kmeans_plusplus_medoids(&d, 4, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }
}
