//! Monte-Carlo PageRank: follow a random surfer and count where it lands.

use super::transition::fill_row;
use super::{validate_damping, RankMapping};
use crate::error::{LinkRankError, Result};
use crate::graph::LinkGraph;
use rand::prelude::*;
use rand_xorshift::XorShiftRng;
use rayon::prelude::*;

/// Configuration for the sampling estimator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleConfig {
    /// Probability of following a link rather than jumping anywhere.
    pub damping: f64,
    /// Total number of pages visited across all shards.
    pub samples: usize,
    /// Random seed; `None` draws one from entropy.
    pub seed: Option<u64>,
    /// Number of independent chains to split the samples across.
    /// Each chain runs on the rayon pool.
    pub shards: usize,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            damping: crate::DEFAULT_DAMPING,
            samples: crate::DEFAULT_SAMPLES,
            seed: None,
            shards: 1,
        }
    }
}

/// Estimate PageRank by sampling `n_samples` steps of a random surfer,
/// starting from a uniformly random page.
///
/// Uses the thread-local random source, so repeated calls give different
/// (but converging) estimates.
pub fn sample_rank(graph: &LinkGraph, damping: f64, n_samples: usize) -> Result<RankMapping> {
    sample_rank_with_rng(graph, damping, n_samples, &mut rand::thread_rng())
}

/// [`sample_rank`] with a caller-supplied random source.
pub fn sample_rank_with_rng<R: Rng + ?Sized>(
    graph: &LinkGraph,
    damping: f64,
    n_samples: usize,
    rng: &mut R,
) -> Result<RankMapping> {
    validate(damping, n_samples)?;
    let counts = walk(graph, damping, n_samples, rng);
    Ok(to_mapping(graph, &counts, n_samples))
}

/// Estimate PageRank as configured, splitting the samples across
/// `config.shards` independent chains when more than one is requested.
///
/// Shard `i` is seeded with `seed + i`, so a seeded run is reproducible for
/// a fixed shard count.
pub fn sample_rank_with(graph: &LinkGraph, config: &SampleConfig) -> Result<RankMapping> {
    validate(config.damping, config.samples)?;
    if config.shards == 0 {
        return Err(LinkRankError::InvalidParameter(
            "shard count must be at least 1".to_string(),
        ));
    }

    let base_seed = config.seed.unwrap_or_else(rand::random::<u64>);

    if config.shards == 1 {
        let mut rng = XorShiftRng::seed_from_u64(base_seed);
        let counts = walk(graph, config.damping, config.samples, &mut rng);
        return Ok(to_mapping(graph, &counts, config.samples));
    }

    let shards = config.shards;
    let per_shard = config.samples / shards;
    let remainder = config.samples % shards;
    tracing::debug!("Sampling {} steps across {} chains", config.samples, shards);

    let counts = (0..shards)
        .into_par_iter()
        .map(|shard| {
            let quota = per_shard + usize::from(shard < remainder);
            let mut rng = XorShiftRng::seed_from_u64(base_seed.wrapping_add(shard as u64));
            walk(graph, config.damping, quota, &mut rng)
        })
        .reduce(
            || vec![0u64; graph.len()],
            |mut acc, shard_counts| {
                for (total, c) in acc.iter_mut().zip(shard_counts) {
                    *total += c;
                }
                acc
            },
        );

    Ok(to_mapping(graph, &counts, config.samples))
}

fn validate(damping: f64, n_samples: usize) -> Result<()> {
    validate_damping(damping)?;
    if n_samples == 0 {
        return Err(LinkRankError::InvalidParameter(
            "sample count must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Walk `steps` pages and return visit counts indexed like `graph.pages()`.
fn walk<R: Rng + ?Sized>(graph: &LinkGraph, damping: f64, steps: usize, rng: &mut R) -> Vec<u64> {
    let mut counts = vec![0u64; graph.len()];
    if steps == 0 {
        return counts;
    }

    let mut row = Vec::with_capacity(graph.len());
    let mut cumulative = Vec::with_capacity(graph.len());
    let mut current = rng.gen_range(0..graph.len());

    for _ in 0..steps {
        counts[current] += 1;
        fill_row(graph, current, damping, &mut row);
        current = choose_weighted(&row, &mut cumulative, rng);
    }

    counts
}

/// Pick an index with probability proportional to its weight by inverting
/// the cumulative distribution.
fn choose_weighted<R: Rng + ?Sized>(
    weights: &[f64],
    cumulative: &mut Vec<f64>,
    rng: &mut R,
) -> usize {
    cumulative.clear();
    let mut acc = 0.0;
    for w in weights {
        acc += w;
        cumulative.push(acc);
    }

    let x = rng.gen::<f64>() * acc;
    let i = cumulative.partition_point(|&c| c <= x);
    if i < weights.len() {
        return i;
    }

    // rounding pushed the draw past the last prefix sum
    weights
        .iter()
        .rposition(|&w| w > 0.0)
        .unwrap_or(weights.len() - 1)
}

#[allow(clippy::cast_precision_loss)]
fn to_mapping(graph: &LinkGraph, counts: &[u64], n_samples: usize) -> RankMapping {
    let n = n_samples as f64;
    graph.label(counts.iter().map(|&c| c as f64 / n).collect())
}
