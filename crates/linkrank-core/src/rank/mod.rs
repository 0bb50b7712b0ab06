//! PageRank estimation: transition model, random-surfer sampling and power
//! iteration, plus the numeric helpers they share.

mod iteration;
mod sampling;
mod transition;

pub use iteration::{iterate_rank, iterate_rank_with, IterateConfig, IterationReport};
pub use sampling::{sample_rank, sample_rank_with, sample_rank_with_rng, SampleConfig};
pub use transition::transition;

use crate::error::{LinkRankError, Result};
use std::collections::BTreeMap;

/// Probability of moving to each page next, keyed by page
pub type Distribution = BTreeMap<String, f64>;

/// Rank score per page, keyed by page; scores sum to 1.0
pub type RankMapping = BTreeMap<String, f64>;

/// Check that a damping factor is a probability.
pub fn validate_damping(damping: f64) -> Result<()> {
    if damping.is_finite() && (0.0..=1.0).contains(&damping) {
        Ok(())
    } else {
        Err(LinkRankError::InvalidParameter(format!(
            "damping factor must be within [0, 1], got {}",
            damping
        )))
    }
}

/// Scale `values` so they sum to 1.0. Leaves them untouched if the sum is
/// not positive.
pub fn normalize(values: &mut [f64]) {
    let total: f64 = values.iter().sum();
    if total > 0.0 {
        for v in values.iter_mut() {
            *v /= total;
        }
    }
}

/// Sum of all scores in a mapping
pub fn total(mapping: &BTreeMap<String, f64>) -> f64 {
    mapping.values().sum()
}

/// Largest per-page absolute difference between two mappings.
///
/// A page missing from one side counts as zero there.
pub fn max_deviation(a: &RankMapping, b: &RankMapping) -> f64 {
    a.keys()
        .chain(b.keys())
        .map(|page| {
            let x = a.get(page).copied().unwrap_or(0.0);
            let y = b.get(page).copied().unwrap_or(0.0);
            (x - y).abs()
        })
        .fold(0.0, f64::max)
}

/// Pages ordered by score, highest first; ties keep page order.
pub fn ranked_desc(mapping: &RankMapping) -> Vec<(&str, f64)> {
    let mut ranked: Vec<(&str, f64)> = mapping.iter().map(|(p, r)| (p.as_str(), *r)).collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}
