//! Output formatters

pub mod csv;
pub mod json;
pub mod markdown;
pub mod terminal;

use crate::app::OutputFormat;
use linkrank_core::RankMapping;

/// One estimator's results
pub struct RankSection {
    /// Heading shown above the scores
    pub title: String,
    /// Short machine-readable estimator name
    pub method: &'static str,
    pub ranks: RankMapping,
    /// Rounds used by the iterative estimator
    pub iterations: Option<usize>,
}

/// Format the results of every estimator that ran.
///
/// `deviation` is the largest per-page disagreement between the estimators,
/// present when more than one ran.
pub fn format_rankings(
    sections: &[RankSection],
    deviation: Option<f64>,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Json => json::format_rankings(sections, deviation),
        OutputFormat::Csv => csv::format_rankings(sections),
        OutputFormat::Md => markdown::format_rankings(sections, deviation),
        OutputFormat::Cli => terminal::format_rankings(sections, deviation),
    }
}

#[cfg(test)]
pub(crate) fn sample_sections() -> Vec<RankSection> {
    vec![
        RankSection {
            title: "PageRank Results from Sampling (n = 4)".to_string(),
            method: "sampling",
            ranks: [("a.html".to_string(), 0.75), ("b.html".to_string(), 0.25)].into(),
            iterations: None,
        },
        RankSection {
            title: "PageRank Results from Iteration".to_string(),
            method: "iteration",
            ranks: [("a.html".to_string(), 0.649_496), ("b.html".to_string(), 0.350_504)].into(),
            iterations: Some(12),
        },
    ]
}
