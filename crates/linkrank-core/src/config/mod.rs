//! Configuration management

use crate::error::{LinkRankError, Result};
use crate::rank::{validate_damping, IterateConfig, SampleConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Estimator parameters shared by the CLI and library callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Probability of following a link rather than jumping to a random page
    #[serde(default = "default_damping")]
    pub damping: f64,

    /// Random-surfer steps taken by the sampling estimator
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Per-page change below which the iterative estimator stops
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Safety cap on iterative rounds
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Seed for the sampling estimator (random when unset)
    #[serde(default)]
    pub seed: Option<u64>,

    /// Independent sampling chains, run in parallel
    #[serde(default = "default_shards")]
    pub shards: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            samples: default_samples(),
            threshold: default_threshold(),
            max_iterations: default_max_iterations(),
            seed: None,
            shards: default_shards(),
        }
    }
}

fn default_damping() -> f64 {
    crate::DEFAULT_DAMPING
}

fn default_samples() -> usize {
    crate::DEFAULT_SAMPLES
}

fn default_threshold() -> f64 {
    crate::DEFAULT_THRESHOLD
}

fn default_max_iterations() -> usize {
    crate::DEFAULT_MAX_ITERATIONS
}

fn default_shards() -> usize {
    1
}

impl RankConfig {
    /// Load config from the default path, falling back to defaults when the
    /// file does not exist, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        let config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };
        config.with_env_overrides()
    }

    /// Load config from an explicit file, then apply environment overrides.
    pub fn load_from(path: &Path) -> Result<Self> {
        Self::from_file(path)?.with_env_overrides()
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: RankConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    /// Apply `LINKRANK_*` environment variables on top of this config.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("LINKRANK_DAMPING") {
            self.damping = parse_env("LINKRANK_DAMPING", &v)?;
        }
        if let Some(v) = lookup("LINKRANK_SAMPLES") {
            self.samples = parse_env("LINKRANK_SAMPLES", &v)?;
        }
        if let Some(v) = lookup("LINKRANK_THRESHOLD") {
            self.threshold = parse_env("LINKRANK_THRESHOLD", &v)?;
        }
        if let Some(v) = lookup("LINKRANK_SEED") {
            self.seed = Some(parse_env("LINKRANK_SEED", &v)?);
        }
        Ok(self)
    }

    /// Check every parameter before any estimator runs.
    pub fn validate(&self) -> Result<()> {
        validate_damping(self.damping)?;
        if self.samples == 0 {
            return Err(LinkRankError::InvalidParameter(
                "sample count must be positive".to_string(),
            ));
        }
        if self.shards == 0 {
            return Err(LinkRankError::InvalidParameter(
                "shard count must be at least 1".to_string(),
            ));
        }
        self.iterate_config().validate()
    }

    pub fn sample_config(&self) -> SampleConfig {
        SampleConfig {
            damping: self.damping,
            samples: self.samples,
            seed: self.seed,
            shards: self.shards,
        }
    }

    pub fn iterate_config(&self) -> IterateConfig {
        IterateConfig {
            damping: self.damping,
            threshold: self.threshold,
            max_iterations: self.max_iterations,
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| LinkRankError::Config(format!("{} has an invalid value: '{}'", key, value)))
}
