use mztrace::models::config::TraceConfig;
use mztrace::models::feature::Polarity;
use mztrace::models::scan::RawScan;
use mztrace::pipeline::FileTracer;
use mztrace::readers::InMemoryScanSource;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::env;
use std::path::PathBuf;
use std::time::Instant;
use tracing::subscriber::set_global_default;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::Registry;
use tracing_subscriber::EnvFilter;

/// Centroided-looking scan: sorted, strictly increasing m/z inside the range.
fn synthetic_scan(rng: &mut ChaCha8Rng, index: usize, num_peaks: usize) -> RawScan {
    let mut mzs: Vec<f64> = (0..num_peaks).map(|_| rng.gen_range(50.0..500.0)).collect();
    mzs.sort_by(|a, b| a.total_cmp(b));
    mzs.dedup();
    let intensities = mzs.iter().map(|_| rng.gen_range(0.0..1e6)).collect();
    RawScan::from_peaks(index, mzs, intensities)
}

fn main() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let formatting_layer = BunyanFormattingLayer::new("mztrace".into(), std::io::stdout);
    let subscriber = Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer);

    set_global_default(subscriber).expect("Setting default subscriber failed");

    let num_scans: usize = env::var("NUM_SCANS")
        .ok()
        .and_then(|x| x.parse().ok())
        .unwrap_or(200);
    let num_peaks: usize = env::var("NUM_PEAKS")
        .ok()
        .and_then(|x| x.parse().ok())
        .unwrap_or(2_000);

    let config = TraceConfig::default();
    let axis = config.build_axis().unwrap();
    let features = config.feature_set();

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let scans = (0..num_scans)
        .map(|i| synthetic_scan(&mut rng, i, num_peaks))
        .collect();
    let path = PathBuf::from("synthetic_pos.mzML");
    let source = InMemoryScanSource::new().with_file(path.clone(), scans);

    println!(
        "Starting resampling of {} scans with {} peaks onto {} axis points",
        num_scans,
        num_peaks,
        axis.len()
    );
    let start = Instant::now();
    let tracer = FileTracer::new(&axis, &source, config.half_window);
    let result = tracer.trace(&path, features.for_polarity(Polarity::Positive)).unwrap();
    let elapsed = start.elapsed();
    println!("{}", result);
    println!(
        "Elapsed: {:.2?} ({:.2?} per scan)",
        elapsed,
        elapsed / num_scans.max(1) as u32
    );
}
