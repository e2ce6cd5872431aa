//! Hop scaling with a fixed seed for reproducibility
//!
//! Run with: cargo run --example fixed_seed_scaling

mod hop_scaling;

use hop_scaling::config::HopScalingConfig;
use hop_scaling::runner::HopScalingRunner;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

fn main() {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .expect("logger initialised twice");

    // Use a fixed seed for reproducible results
    let fixed_seed = 42;

    info!("Running experiment twice with fixed seed: {}", fixed_seed);

    let config = HopScalingConfig {
        min_nodes: 100,
        max_nodes: 500,
        step: 100,
        batches: 10,
        trials_per_batch: 50,
        seed: Some(fixed_seed),
        ..Default::default()
    };

    let first = HopScalingRunner::new(config.clone()).and_then(|runner| runner.run());
    let second = HopScalingRunner::new(config).and_then(|runner| runner.run());

    let (first, second) = match (first, second) {
        (Ok(a), Ok(b)) => (a, b),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("Simulation failed: {}", e);
            std::process::exit(1);
        }
    };

    first.print_summary();

    // Verify the seed was used correctly
    assert_eq!(first.seed_used, fixed_seed, "Seed mismatch!");
    assert_eq!(first.sizes, second.sizes, "Runs with the same seed diverged!");
    info!("✓ Reproducibility check passed!");
}
