use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use flowdata::prelude::*;

/// Draws samples from a dataset and prints per-axis statistics.
#[derive(Parser, Debug)]
struct Args {
    /// Dataset name (mnist, cifar10, circles, moons, normals, swiss, s_curve)
    #[arg(default_value = "moons")]
    name: String,

    /// Directory containing data/
    #[arg(long)]
    root: Option<PathBuf>,

    /// Number of samples to draw
    #[arg(long, default_value_t = 4096)]
    count: usize,

    /// Rows per synthetic epoch
    #[arg(long, default_value_t = N_DATASET_SIZE)]
    samples: usize,

    #[arg(long)]
    seed: Option<u64>,

    /// Only use files already on disk
    #[arg(long)]
    offline: bool,
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut config = Config::new(args.name).samples(args.samples).download(!args.offline);
    if let Some(root) = args.root {
        config = config.root(root);
    }
    if let Some(seed) = args.seed {
        config = config.seed(seed);
    }

    let mut dataset = FlowDataset::from_config(&config)?;
    println!("{} ({}), dims {:?}, len {}", dataset.name(), dataset.category(), dataset.dims(), dataset.len());

    let mut min = Vec::new();
    let mut max = Vec::new();
    let mut sum = Vec::new();
    let mut drawn = 0usize;
    for sample in dataset.samples().take(args.count) {
        let sample = sample?;
        let flat = sample.iter().copied().collect::<Vec<f32>>();
        if drawn == 0 {
            min = flat.clone();
            max = flat.clone();
            sum = vec![0f64; flat.len()];
        }
        for (i, x) in flat.into_iter().enumerate() {
            min[i] = min[i].min(x);
            max[i] = max[i].max(x);
            sum[i] += f64::from(x);
        }
        drawn += 1;
    }

    if drawn == 0 {
        println!("no samples");
        return Ok(());
    }
    let shown = min.len().min(8);
    for i in 0..shown {
        println!("axis {i}: min {:+.4} max {:+.4} mean {:+.4}", min[i], max[i], sum[i] / drawn as f64);
    }
    if shown < min.len() {
        println!("... {} more axes", min.len() - shown);
    }
    if let Some(ring) = dataset.points() {
        println!("epoch {}, cursor {}", ring.epoch(), ring.cursor());
    }
    Ok(())
}
