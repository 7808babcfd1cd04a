use medoid::cluster::{Clustering, DataKind, Kmedoids};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Edit distances between six short words; there are no coordinates here,
    // only pairwise dissimilarities.
    let words = ["cat", "bat", "hat", "house", "mouse", "horse"];
    let rows: Vec<Vec<f64>> = vec![
        vec![0.0, 1.0, 1.0, 4.0, 4.0, 4.0],
        vec![1.0, 0.0, 1.0, 4.0, 4.0, 4.0],
        vec![1.0, 1.0, 0.0, 4.0, 4.0, 4.0],
        vec![4.0, 4.0, 4.0, 0.0, 1.0, 1.0],
        vec![4.0, 4.0, 4.0, 1.0, 0.0, 2.0],
        vec![4.0, 4.0, 4.0, 1.0, 2.0, 0.0],
    ];

    let result = Kmedoids::new(vec![0, 4])
        .with_data_kind(DataKind::DistanceMatrix)
        .process(&rows)?;

    for (members, &medoid) in result.clusters().iter().zip(result.medoids()) {
        let names: Vec<&str> = members.iter().map(|&i| words[i]).collect();
        println!("{}: {:?}", words[medoid], names);
    }

    Ok(())
}
