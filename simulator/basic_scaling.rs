//! Basic Hop Scaling Example
//!
//! Run with: cargo run --example basic_scaling --release

mod hop_scaling;

use hop_scaling::config::{HopScalingConfig, OutputConfig};
use hop_scaling::runner::HopScalingRunner;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

fn main() {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .expect("logger initialised twice");

    println!("╔════════════════════════════════════════════════════════╗");
    println!("║        Pastry Hop Scaling Simulator                    ║");
    println!("╚════════════════════════════════════════════════════════╝\n");

    let config = HopScalingConfig {
        min_nodes: 1000,
        max_nodes: 10000,
        step: 1000,
        batches: 20,
        trials_per_batch: 100,
        seed: None, // Will be auto-generated
        output: OutputConfig {
            csv_path: Some("hop_scaling.csv".to_string()),
            print_table: true,
        },
        ..Default::default()
    };

    info!("Configuration:");
    info!("  Sizes: {}..={} step {}", config.min_nodes, config.max_nodes, config.step);
    info!("  Routes per size: {}", config.batches * config.trials_per_batch);
    info!("  Digest: {}", config.digest);

    let csv_path = config.output.csv_path.clone();
    let result = match HopScalingRunner::new(config).and_then(|runner| runner.run()) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Simulation failed: {}", e);
            std::process::exit(1);
        }
    };

    result.print_summary();

    if let Some(path) = csv_path {
        match result.write_csv(&path) {
            Ok(()) => info!("Results exported to: {}", path),
            Err(e) => eprintln!("Failed to write {}: {}", path, e),
        }
    }

    info!("✓ Simulation complete!");
}
