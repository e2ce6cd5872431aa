//! Configuration for the hop-scaling experiment

use pastry_sim::{DigestAlgorithm, Seed, SimError};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Experiment configuration
///
/// Network sizes run from `min_nodes` to `max_nodes` (inclusive) in increments
/// of `step`. Each size gets `batches` batch means of `trials_per_batch` routes.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct HopScalingConfig {
    /// Smallest network size
    pub min_nodes: usize,

    /// Largest network size (inclusive bound)
    pub max_nodes: usize,

    /// Increment between network sizes
    pub step: usize,

    /// Batch means collected per network size
    pub batches: usize,

    /// Random routes per batch
    pub trials_per_batch: usize,

    /// Random seed (None = generate random)
    pub seed: Option<Seed>,

    /// Identifier digest
    pub digest: DigestAlgorithm,

    /// Output configuration
    pub output: OutputConfig,
}

impl Default for HopScalingConfig {
    fn default() -> Self {
        Self {
            min_nodes: 100,
            max_nodes: 1000,
            step: 100,
            batches: 50,
            trials_per_batch: 50,
            seed: None,
            digest: DigestAlgorithm::Md5,
            output: OutputConfig::default(),
        }
    }
}

impl HopScalingConfig {
    /// Get or generate seed
    pub fn resolve_seed(&self) -> Seed {
        self.seed.unwrap_or_else(|| StdRng::from_entropy().next_u64())
    }

    /// Network sizes covered by this experiment, ascending
    pub fn sizes(&self) -> impl Iterator<Item = usize> {
        (self.min_nodes..=self.max_nodes).step_by(self.step.max(1))
    }

    pub fn validate(&self) -> Result<(), SimError> {
        let reason = if self.min_nodes == 0 {
            "min_nodes must be positive"
        } else if self.max_nodes < self.min_nodes {
            "max_nodes must not be below min_nodes"
        } else if self.step == 0 {
            "step must be positive"
        } else if self.batches == 0 {
            "batches must be positive"
        } else if self.trials_per_batch == 0 {
            "trials_per_batch must be positive"
        } else {
            return Ok(());
        };

        Err(SimError::Configuration {
            reason: reason.to_string(),
        })
    }
}

/// Output configuration
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Write per-size results as CSV for external plotting
    pub csv_path: Option<String>,

    /// Print the results table after the run
    pub print_table: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: None,
            print_table: true,
        }
    }
}

/// Scenario file format
#[derive(Debug, serde::Deserialize)]
pub struct ScenarioFile {
    /// Scenario metadata
    #[serde(default)]
    pub meta: ScenarioMeta,

    /// Experiment configuration (missing keys use defaults)
    #[serde(default)]
    pub config: HopScalingConfig,
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct ScenarioMeta {
    pub name: Option<String>,
    pub description: Option<String>,
    pub hypothesis: Option<String>,
}

impl ScenarioFile {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sizes() {
        let config = HopScalingConfig::default();
        let sizes: Vec<usize> = config.sizes().collect();
        assert_eq!(sizes.len(), 10);
        assert_eq!(sizes.first(), Some(&100));
        assert_eq!(sizes.last(), Some(&1000));
    }

    #[test]
    fn test_sizes_stop_at_upper_bound() {
        let config = HopScalingConfig {
            min_nodes: 10,
            max_nodes: 35,
            step: 10,
            ..Default::default()
        };
        assert_eq!(config.sizes().collect::<Vec<_>>(), vec![10, 20, 30]);
    }

    #[test]
    fn test_validate() {
        assert!(HopScalingConfig::default().validate().is_ok());

        let bad = [
            HopScalingConfig { min_nodes: 0, ..Default::default() },
            HopScalingConfig { min_nodes: 500, max_nodes: 100, ..Default::default() },
            HopScalingConfig { step: 0, ..Default::default() },
            HopScalingConfig { batches: 0, ..Default::default() },
            HopScalingConfig { trials_per_batch: 0, ..Default::default() },
        ];
        for config in bad {
            assert!(matches!(
                config.validate(),
                Err(SimError::Configuration { .. })
            ));
        }
    }

    #[test]
    fn test_resolve_seed_keeps_fixed_seed() {
        let config = HopScalingConfig {
            seed: Some(42),
            ..Default::default()
        };
        assert_eq!(config.resolve_seed(), 42);
    }

    #[test]
    fn test_parse_scenario_yaml() {
        let yaml = r#"
meta:
  name: Small networks
  hypothesis: hops grow with log N
config:
  min_nodes: 20
  max_nodes: 200
  step: 20
  seed: 7
  digest: sha256
  output:
    csv_path: small.csv
"#;
        let scenario = ScenarioFile::from_yaml(yaml).unwrap();
        assert_eq!(scenario.meta.name.as_deref(), Some("Small networks"));
        assert!(scenario.meta.description.is_none());

        let config = scenario.config;
        assert_eq!(config.min_nodes, 20);
        assert_eq!(config.max_nodes, 200);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.digest, DigestAlgorithm::Sha256);
        assert_eq!(config.output.csv_path.as_deref(), Some("small.csv"));
        assert!(config.output.print_table);
        // untouched keys keep their defaults
        assert_eq!(config.batches, 50);
        assert_eq!(config.trials_per_batch, 50);
    }

    #[test]
    fn test_parse_rejects_unknown_digest() {
        let yaml = "config:\n  digest: whirlpool\n";
        let err = ScenarioFile::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("whirlpool"), "unexpected error: {}", err);
    }

    #[test]
    fn test_digest_defaults_to_md5() {
        assert_eq!(HopScalingConfig::default().digest, DigestAlgorithm::Md5);

        let scenario = ScenarioFile::from_yaml("config:\n  min_nodes: 20\n").unwrap();
        assert_eq!(scenario.config.digest, DigestAlgorithm::Md5);

        let scenario = ScenarioFile::from_yaml("config:\n  digest: MD5\n").unwrap();
        assert_eq!(scenario.config.digest, DigestAlgorithm::Md5);
    }
}
