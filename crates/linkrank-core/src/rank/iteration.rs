//! Power-iteration PageRank.
//!
//! Repeatedly applies `PR(p) = (1 - d) / N + d * sum(PR(q) / L(q))` over the
//! pages `q` linking to `p` until no score moves by more than the threshold.
//! Pages without links count as linking to every page, so their mass is
//! spread uniformly. The result is deterministic for a given graph.

use super::{normalize, validate_damping, RankMapping};
use crate::error::{LinkRankError, Result};
use crate::graph::LinkGraph;

/// Configuration for the iterative estimator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterateConfig {
    /// Probability of following a link rather than jumping anywhere.
    pub damping: f64,
    /// Stop once every page moves by less than this between rounds.
    pub threshold: f64,
    /// Give up after this many rounds.
    pub max_iterations: usize,
}

impl Default for IterateConfig {
    fn default() -> Self {
        Self {
            damping: crate::DEFAULT_DAMPING,
            threshold: crate::DEFAULT_THRESHOLD,
            max_iterations: crate::DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl IterateConfig {
    pub fn validate(&self) -> Result<()> {
        validate_damping(self.damping)?;
        if !(self.threshold.is_finite() && self.threshold > 0.0) {
            return Err(LinkRankError::InvalidParameter(format!(
                "convergence threshold must be positive, got {}",
                self.threshold
            )));
        }
        if self.max_iterations == 0 {
            return Err(LinkRankError::InvalidParameter(
                "max iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Outcome of an iterative run
#[derive(Debug, Clone, PartialEq)]
pub struct IterationReport {
    pub ranks: RankMapping,
    /// Rounds computed, including the one that met the threshold
    pub iterations: usize,
    /// False when `max_iterations` ran out first
    pub converged: bool,
}

/// Compute PageRank by power iteration with the default threshold and
/// iteration cap.
pub fn iterate_rank(graph: &LinkGraph, damping: f64) -> Result<RankMapping> {
    let config = IterateConfig {
        damping,
        ..Default::default()
    };
    Ok(iterate_rank_with(graph, &config)?.ranks)
}

/// Compute PageRank by power iteration.
///
/// Convergence is judged on the raw scores; the final scores are then
/// normalized to sum to 1.0. If the cap is hit first, the latest scores are
/// normalized and returned with `converged` unset.
#[allow(clippy::cast_precision_loss)]
pub fn iterate_rank_with(graph: &LinkGraph, config: &IterateConfig) -> Result<IterationReport> {
    config.validate()?;

    let n = graph.len() as f64;
    let mut ranks = vec![1.0 / n; graph.len()];
    let mut iterations = 0;
    let mut converged = false;

    while iterations < config.max_iterations {
        let next = iterate_once(graph, &ranks, config.damping);
        iterations += 1;

        let delta = ranks
            .iter()
            .zip(&next)
            .map(|(old, new)| (old - new).abs())
            .fold(0.0, f64::max);
        tracing::debug!("Round {}: max change {:.6}", iterations, delta);

        if delta < config.threshold {
            converged = true;
            break;
        }
        ranks = next;
    }

    if converged {
        tracing::debug!("Converged after {} rounds", iterations);
    } else {
        tracing::warn!(
            "PageRank did not converge within {} rounds (threshold {})",
            config.max_iterations,
            config.threshold
        );
    }

    normalize(&mut ranks);

    Ok(IterationReport {
        ranks: graph.label(ranks),
        iterations,
        converged,
    })
}

#[allow(clippy::cast_precision_loss)]
fn iterate_once(graph: &LinkGraph, ranks: &[f64], damping: f64) -> Vec<f64> {
    let n = graph.len() as f64;
    let teleport = (1.0 - damping) / n;

    // Mass of pages without links, spread evenly over every page
    let dangling: f64 = (0..graph.len())
        .filter(|&q| graph.targets(q).is_empty())
        .map(|q| ranks[q])
        .sum::<f64>()
        / n;

    let mut incoming = vec![dangling; graph.len()];
    for (q, rank) in ranks.iter().enumerate() {
        let targets = graph.targets(q);
        if targets.is_empty() {
            continue;
        }
        let share = rank / targets.len() as f64;
        for &p in targets {
            incoming[p] += share;
        }
    }

    incoming
        .into_iter()
        .map(|inbound| teleport + damping * inbound)
        .collect()
}
