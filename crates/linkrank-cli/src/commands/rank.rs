//! PageRank computation command

use crate::app::{OutputFormat, RankArgs};
use crate::output::{format_rankings, RankSection};
use anyhow::Result;
use linkrank_core::{crawl, iterate_rank_with, max_deviation, sample_rank_with};

/// Crawl the corpus and rank its pages with the selected estimators
pub fn run(args: RankArgs, format: OutputFormat) -> Result<()> {
    let config = super::resolve_config(&args.params)?;
    let graph = crawl(&args.corpus)?;
    tracing::info!(
        "Ranking {} pages (damping {}, method {:?})",
        graph.len(),
        config.damping,
        args.method
    );

    let mut sections = Vec::new();

    if args.method.samples() {
        let ranks = sample_rank_with(&graph, &config.sample_config())?;
        sections.push(RankSection {
            title: format!("PageRank Results from Sampling (n = {})", config.samples),
            method: "sampling",
            ranks,
            iterations: None,
        });
    }

    if args.method.iterates() {
        let report = iterate_rank_with(&graph, &config.iterate_config())?;
        sections.push(RankSection {
            title: "PageRank Results from Iteration".to_string(),
            method: "iteration",
            ranks: report.ranks,
            iterations: Some(report.iterations),
        });
    }

    let deviation = match sections.as_slice() {
        [first, second] => Some(max_deviation(&first.ranks, &second.ranks)),
        _ => None,
    };

    print!("{}", format_rankings(&sections, deviation, format));
    Ok(())
}
