// Rank a small link graph using linkrank as a library

use linkrank_core::{iterate_rank_with, max_deviation, sample_rank_with, LinkGraph, RankConfig};

fn main() -> linkrank_core::Result<()> {
    println!("Linkrank Library Example\n");

    let graph = LinkGraph::new([
        ("ai.html", vec!["algorithms.html", "inference.html"]),
        ("algorithms.html", vec!["programming.html", "recursion.html"]),
        ("c.html", vec!["programming.html"]),
        ("inference.html", vec!["ai.html"]),
        ("logic.html", vec!["inference.html"]),
        ("programming.html", vec!["c.html", "python.html"]),
        ("python.html", vec!["ai.html", "programming.html"]),
        ("recursion.html", vec![]),
    ])?;
    println!(
        "Graph: {} pages, {} links, dead ends: {:?}\n",
        graph.len(),
        graph.edge_count(),
        graph.dead_ends()
    );

    let config = RankConfig {
        seed: Some(42),
        ..Default::default()
    };

    let sampled = sample_rank_with(&graph, &config.sample_config())?;
    println!("Sampling (n = {}):", config.samples);
    for (page, rank) in &sampled {
        println!("  {}: {:.4}", page, rank);
    }

    let report = iterate_rank_with(&graph, &config.iterate_config())?;
    println!("\nIteration ({} rounds):", report.iterations);
    for (page, rank) in &report.ranks {
        println!("  {}: {:.4}", page, rank);
    }

    println!(
        "\nLargest disagreement: {:.4}",
        max_deviation(&sampled, &report.ranks)
    );

    Ok(())
}
