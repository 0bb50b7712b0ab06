//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use linkrank_core::RankConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linkrank")]
#[command(
    author,
    version,
    about = "Rank the pages of an HTML corpus with PageRank"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Crawl a corpus and rank its pages
    Rank(RankArgs),

    /// Show the link graph of a corpus
    Links(LinksArgs),

    /// Show the effective configuration
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct RankArgs {
    /// Directory of HTML pages
    pub corpus: PathBuf,

    /// Which estimators to run
    #[arg(short, long, value_enum, default_value = "both")]
    pub method: Method,

    #[command(flatten)]
    pub params: ParamArgs,
}

/// Estimator parameters; each one overrides the config file
#[derive(Args, Default)]
pub struct ParamArgs {
    /// Probability of following a link (0 to 1)
    #[arg(short, long)]
    pub damping: Option<f64>,

    /// Random-surfer steps for the sampling estimator
    #[arg(short = 'n', long)]
    pub samples: Option<usize>,

    /// Convergence threshold for the iterative estimator
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Cap on iterative rounds
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Seed for reproducible sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Parallel sampling chains
    #[arg(long)]
    pub shards: Option<usize>,

    /// Config file (defaults to the user config directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ParamArgs {
    /// Overlay the flags that were given on top of `config`.
    pub fn apply(&self, mut config: RankConfig) -> RankConfig {
        if let Some(damping) = self.damping {
            config.damping = damping;
        }
        if let Some(samples) = self.samples {
            config.samples = samples;
        }
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(max_iterations) = self.max_iterations {
            config.max_iterations = max_iterations;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(shards) = self.shards {
            config.shards = shards;
        }
        config
    }
}

#[derive(Args)]
pub struct LinksArgs {
    /// Directory of HTML pages
    pub corpus: PathBuf,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub params: ParamArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Method {
    Both,
    Sample,
    Iterate,
}

impl Method {
    pub fn samples(self) -> bool {
        matches!(self, Method::Both | Method::Sample)
    }

    pub fn iterates(self) -> bool {
        matches!(self, Method::Both | Method::Iterate)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
    Csv,
    Md,
}
