use medoid::cluster::init::kmeans_plusplus_medoids;
use medoid::cluster::{Clustering, Kmedoids, PointDistances};
use medoid::metric::Euclidean;
use medoid::quality::mean_silhouette;
use rand::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=debug shows one line per round.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Two obvious groups in 2D.
    let data: Vec<Vec<f64>> = vec![
        // Group A (near (0,0))
        vec![0.0, 0.0],
        vec![1.0, 0.0],
        vec![0.0, 1.0],
        vec![0.5, 0.5],
        // Group B (near (10,10))
        vec![10.0, 10.0],
        vec![11.0, 10.0],
        vec![10.0, 11.0],
        vec![10.5, 10.5],
    ];

    // Seed with k-means++ over the same dissimilarity the run will use.
    let d = PointDistances::new(&data, &Euclidean)?;
    let mut rng = StdRng::seed_from_u64(42);
    let initial = kmeans_plusplus_medoids(&d, 2, &mut rng)?;

    let result = Kmedoids::new(initial.clone())
        .with_metric(Euclidean)
        .with_tol(0.0)
        .process(&data)?;

    println!("initial medoids={initial:?}");
    println!(
        "rounds={} converged={} total_deviation={:.3}",
        result.iterations(),
        result.converged(),
        result.total_deviation()
    );
    for (k, (members, medoid)) in result.clusters().iter().zip(result.medoids()).enumerate() {
        println!("  cluster {k}: medoid={medoid} members={members:?}");
    }
    println!("silhouette={:.3}", mean_silhouette(&d, result.clusters()));

    Ok(())
}
