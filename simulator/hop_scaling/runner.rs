//! Hop-scaling experiment runner

use super::config::HopScalingConfig;
use super::stats::{fit_log_linear, mean, sample_stddev, ExperimentResult, SizeResult};
use log::info;
use pastry_sim::{RoutingSimulator, Seed, SimError};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Runs random routes over a range of network sizes
pub struct HopScalingRunner {
    config: HopScalingConfig,
    rng: StdRng,
    seed: Seed,
}

impl HopScalingRunner {
    /// Create a new runner; fails on an invalid configuration
    pub fn new(config: HopScalingConfig) -> Result<Self, SimError> {
        config.validate()?;

        let seed = config.resolve_seed();
        let rng = StdRng::seed_from_u64(seed);

        Ok(Self { config, rng, seed })
    }

    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// Run every configured network size
    ///
    /// One sampling generator is shared across all sizes, so results depend on
    /// the whole size sequence, not only on the size itself.
    pub fn run(mut self) -> Result<ExperimentResult, SimError> {
        let sizes: Vec<usize> = self.config.sizes().collect();
        let mut results = Vec::with_capacity(sizes.len());
        let mut total_routes = 0;

        for nodes in sizes {
            let result = self.run_size(nodes)?;
            info!(
                "{} nodes: mean {:.4} hops, stddev {:.4}, max {}",
                result.nodes, result.mean_hops, result.stddev_hops, result.max_hops
            );
            total_routes += self.config.batches * self.config.trials_per_batch;
            results.push(result);
        }

        let fit = fit_log_linear(&results);
        if let Some(ref fit) = fit {
            info!("fit: hops = {:.3} + {:.3} log10(N)", fit.a, fit.b);
        }

        Ok(ExperimentResult {
            seed_used: self.seed,
            digest: self.config.digest,
            sizes: results,
            fit,
            total_routes,
        })
    }

    fn run_size(&mut self, nodes: usize) -> Result<SizeResult, SimError> {
        let sim = RoutingSimulator::with_digest(nodes, self.seed, self.config.digest)?;
        let trials = self.config.trials_per_batch;

        let mut batch_means = Vec::with_capacity(self.config.batches);
        let mut max_hops = 0;

        for _ in 0..self.config.batches {
            let mut sum = 0;
            for _ in 0..trials {
                let hops = sim.run_trial(&mut self.rng)?;
                sum += hops;
                max_hops = max_hops.max(hops);
            }
            batch_means.push(sum as f64 / trials as f64);
        }

        Ok(SizeResult {
            nodes,
            mean_hops: mean(&batch_means),
            stddev_hops: sample_stddev(&batch_means),
            max_hops,
        })
    }
}
