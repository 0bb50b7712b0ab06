//! Linkrank Core Library
//!
//! Ranks the pages of a hyperlinked corpus with PageRank.
//!
//! # Features
//! - Link graph built from a directory of HTML pages
//! - Random-surfer transition model with uniform handling of dead ends
//! - Monte-Carlo estimation by sampling the surfer's walk, optionally
//!   sharded across threads
//! - Deterministic estimation by power iteration with an iteration cap

pub mod config;
pub mod error;
pub mod graph;
pub mod rank;

pub use config::RankConfig;
pub use error::{Error, LinkRankError, Result};
pub use graph::{crawl, crawl_with, extract_links, CrawlOptions, LinkGraph};
pub use rank::{
    iterate_rank, iterate_rank_with, max_deviation, sample_rank, sample_rank_with,
    sample_rank_with_rng, transition, Distribution, IterateConfig, IterationReport, RankMapping,
    SampleConfig,
};

/// Conventional damping factor
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Default number of random-surfer steps
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Default per-page convergence threshold for power iteration
pub const DEFAULT_THRESHOLD: f64 = 0.001;

/// Default cap on power-iteration rounds
pub const DEFAULT_MAX_ITERATIONS: usize = 1_000;

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "linkrank";
