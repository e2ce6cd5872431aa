// Hop Runner - Load and execute hop-scaling scenario YAML files
//
// Usage:
//   cargo run --bin hop_runner scenarios/log_scaling.yaml
//   cargo run --bin hop_runner scenarios/  (runs all .yaml files in directory)
//   cargo run --bin hop_runner scenarios/log_scaling.yaml --seed 42

mod hop_scaling;

use hop_scaling::config::ScenarioFile;
use hop_scaling::runner::HopScalingRunner;
use log::{info, LevelFilter};
use pastry_sim::Seed;
use simple_logger::SimpleLogger;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()
        .expect("logger initialised twice");

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <scenario.yaml | directory/> [--seed SEED]", args[0]);
        eprintln!("\nExamples:");
        eprintln!("  {} scenarios/log_scaling.yaml", args[0]);
        eprintln!("  {} scenarios/", args[0]);
        eprintln!("  {} scenarios/log_scaling.yaml --seed 42", args[0]);
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);

    // Parse optional seed
    let seed: Option<Seed> = if args.len() >= 4 && args[2] == "--seed" {
        match parse_seed(&args[3]) {
            Some(seed) => Some(seed),
            None => {
                eprintln!("Invalid seed: {}", args[3]);
                std::process::exit(1);
            }
        }
    } else {
        None
    };

    let result = if path.is_file() {
        run_scenario_file(path, seed)
    } else if path.is_dir() {
        run_scenario_directory(path, seed)
    } else {
        Err(format!("Path does not exist: {}", path.display()))
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_scenario_directory(dir: &Path, seed: Option<Seed>) -> Result<(), String> {
    let entries =
        fs::read_dir(dir).map_err(|e| format!("Failed to read {}: {}", dir.display(), e))?;

    // Find all .yaml files
    let mut scenarios: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            matches!(
                path.extension().and_then(|s| s.to_str()),
                Some("yaml") | Some("yml")
            )
        })
        .collect();

    scenarios.sort();

    if scenarios.is_empty() {
        return Err(format!("No .yaml files found in {}", dir.display()));
    }

    println!("\n╔════════════════════════════════════════════════════════╗");
    println!("║  HOP RUNNER - Multiple Scenarios                       ║");
    println!("╚════════════════════════════════════════════════════════╝\n");
    println!("Found {} scenario(s) to run\n", scenarios.len());

    for (i, scenario_path) in scenarios.iter().enumerate() {
        println!("\n{}/{} Running: {}\n", i + 1, scenarios.len(), scenario_path.display());
        run_scenario_file(scenario_path, seed)?;
    }

    println!("\n╔════════════════════════════════════════════════════════╗");
    println!("║  All scenarios complete!                               ║");
    println!("╚════════════════════════════════════════════════════════╝\n");

    Ok(())
}

fn run_scenario_file(path: &Path, seed: Option<Seed>) -> Result<(), String> {
    println!("Loading scenario from: {}", path.display());

    let yaml_content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let scenario = ScenarioFile::from_yaml(&yaml_content)
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;

    // Print scenario header
    let name = scenario.meta.name.clone().unwrap_or_else(|| {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    });
    println!("\n╔════════════════════════════════════════════════════════╗");
    println!("║  {}", name);
    println!("╚════════════════════════════════════════════════════════╝\n");

    if let Some(ref desc) = scenario.meta.description {
        println!("{}\n", desc);
    }

    if let Some(ref hypothesis) = scenario.meta.hypothesis {
        println!("Hypothesis:");
        println!("  {}\n", hypothesis);
    }

    let mut config = scenario.config;
    if seed.is_some() {
        config.seed = seed;
    }

    println!("Configuration:");
    println!(
        "  Sizes: {}..={} step {}",
        config.min_nodes, config.max_nodes, config.step
    );
    println!(
        "  Trials: {} batches x {} routes",
        config.batches, config.trials_per_batch
    );
    println!("  Digest: {}", config.digest);
    println!("\nStarting simulation...\n");

    let output = config.output.clone();
    let runner =
        HopScalingRunner::new(config).map_err(|e| format!("{}: {}", path.display(), e))?;
    info!("Using seed {}", runner.seed());
    let result = runner
        .run()
        .map_err(|e| format!("{}: {}", path.display(), e))?;

    if output.print_table {
        result.print_summary();
    }

    if let Some(ref csv_path) = output.csv_path {
        result
            .write_csv(csv_path)
            .map_err(|e| format!("Failed to write {}: {}", csv_path, e))?;
        info!("Results exported to: {}", csv_path);
    }

    println!("\n✓ Scenario complete! (seed {})\n", result.seed_used);
    Ok(())
}

fn parse_seed(text: &str) -> Option<Seed> {
    match text.strip_prefix("0x") {
        Some(hex) => Seed::from_str_radix(hex, 16).ok(),
        None => text.parse().ok(),
    }
}
