//! Integration tests: crawl a corpus and compare both estimators

use linkrank_core::{
    crawl, iterate_rank, iterate_rank_with, max_deviation, sample_rank_with, IterateConfig,
    LinkGraph, RankConfig, SampleConfig,
};
use std::fs;
use tempfile::TempDir;

fn write_corpus(dir: &TempDir, pages: &[(&str, &[&str])]) {
    for (name, links) in pages {
        let body: String = links
            .iter()
            .map(|l| format!("<li><a href=\"{}\">{}</a></li>\n", l, l))
            .collect();
        let html = format!(
            "<!DOCTYPE html>\n<html>\n<head><title>{}</title></head>\n<body>\n<ul>\n{}</ul>\n</body>\n</html>\n",
            name, body
        );
        fs::write(dir.path().join(name), html).unwrap();
    }
}

fn small_corpus() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_corpus(
        &dir,
        &[
            ("1.html", &["2.html"]),
            ("2.html", &["1.html", "3.html"]),
            ("3.html", &["2.html", "4.html"]),
            ("4.html", &["2.html"]),
        ],
    );
    dir
}

#[test]
fn test_crawled_corpus_iteration() {
    let dir = small_corpus();
    let graph = crawl(dir.path()).unwrap();
    assert_eq!(graph.len(), 4);
    assert_eq!(graph.edge_count(), 6);

    let ranks = iterate_rank(&graph, 0.85).unwrap();
    assert!((ranks["2.html"] - 0.4289).abs() < 1e-3, "{ranks:?}");
    assert!((ranks["4.html"] - 0.1307).abs() < 1e-3, "{ranks:?}");
}

#[test]
fn test_crawled_corpus_estimators_agree() {
    let dir = small_corpus();
    let graph = crawl(dir.path()).unwrap();

    let iterated = iterate_rank(&graph, 0.85).unwrap();
    let sampled = sample_rank_with(
        &graph,
        &SampleConfig {
            samples: 200_000,
            seed: Some(2024),
            ..Default::default()
        },
    )
    .unwrap();

    let deviation = max_deviation(&iterated, &sampled);
    assert!(deviation < 0.02, "deviation={deviation} {sampled:?}");
}

#[test]
fn test_cycle_sampling_matches_iteration() {
    let graph = LinkGraph::new([("A", vec!["B"]), ("B", vec!["C"]), ("C", vec!["A"])]).unwrap();

    let iterated = iterate_rank(&graph, 0.85).unwrap();
    let sampled = sample_rank_with(
        &graph,
        &SampleConfig {
            samples: 200_000,
            seed: Some(1),
            ..Default::default()
        },
    )
    .unwrap();

    for page in graph.pages() {
        assert!(
            (iterated[page] - sampled[page]).abs() < 0.01,
            "{page}: iterated={} sampled={}",
            iterated[page],
            sampled[page]
        );
        assert!((iterated[page] - 0.333).abs() < 0.001);
    }
}

#[test]
fn test_sharded_sampling_matches_iteration() {
    let dir = small_corpus();
    let graph = crawl(dir.path()).unwrap();
    let config = RankConfig {
        samples: 200_000,
        seed: Some(99),
        shards: 8,
        ..Default::default()
    };

    let iterated = iterate_rank_with(&graph, &config.iterate_config()).unwrap();
    let sampled = sample_rank_with(&graph, &config.sample_config()).unwrap();

    assert!(iterated.converged);
    assert!(max_deviation(&iterated.ranks, &sampled) < 0.02);
}

#[test]
fn test_tighter_threshold_needs_more_rounds() {
    let dir = small_corpus();
    let graph = crawl(dir.path()).unwrap();

    let loose = iterate_rank_with(&graph, &IterateConfig::default()).unwrap();
    let tight = iterate_rank_with(
        &graph,
        &IterateConfig {
            threshold: 1e-10,
            ..Default::default()
        },
    )
    .unwrap();

    assert!(tight.converged);
    assert!(tight.iterations > loose.iterations);
    assert!(max_deviation(&loose.ranks, &tight.ranks) < 0.01);
}

#[test]
fn test_dead_end_scenario() {
    let dir = TempDir::new().unwrap();
    write_corpus(&dir, &[("a.html", &[]), ("b.html", &["a.html"])]);
    let graph = crawl(dir.path()).unwrap();

    let dist = linkrank_core::transition(&graph, "a.html", 0.85).unwrap();
    assert_eq!(dist["a.html"], 0.5);
    assert_eq!(dist["b.html"], 0.5);

    let ranks = iterate_rank(&graph, 0.85).unwrap();
    assert!(ranks["a.html"] > ranks["b.html"]);
}
