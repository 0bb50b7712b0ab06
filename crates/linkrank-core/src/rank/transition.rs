//! Random-surfer transition model

use super::{validate_damping, Distribution};
use crate::error::{LinkRankError, Result};
use crate::graph::LinkGraph;

/// Distribution over the page a random surfer visits after `page`.
///
/// With probability `damping` the surfer follows one of `page`'s links,
/// chosen uniformly; otherwise it jumps to any page uniformly. A page with
/// no links is treated as linking to every page, so its distribution is
/// uniform whatever the damping.
pub fn transition(graph: &LinkGraph, page: &str, damping: f64) -> Result<Distribution> {
    validate_damping(damping)?;
    let idx = graph
        .index_of(page)
        .ok_or_else(|| LinkRankError::InvalidGraph(format!("unknown page '{}'", page)))?;

    let mut row = Vec::with_capacity(graph.len());
    fill_row(graph, idx, damping, &mut row);
    Ok(graph.label(row))
}

/// Write the transition probabilities out of page `idx` into `row`,
/// indexed like `graph.pages()`.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn fill_row(graph: &LinkGraph, idx: usize, damping: f64, row: &mut Vec<f64>) {
    let n = graph.len() as f64;
    let targets = graph.targets(idx);

    row.clear();
    if targets.is_empty() {
        row.resize(graph.len(), 1.0 / n);
        return;
    }

    row.resize(graph.len(), (1.0 - damping) / n);
    let follow = damping / targets.len() as f64;
    for &t in targets {
        row[t] += follow;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> LinkGraph {
        LinkGraph::new([
            ("1.html", vec!["2.html"]),
            ("2.html", vec!["1.html", "3.html"]),
            ("3.html", vec!["2.html", "4.html"]),
            ("4.html", vec!["2.html"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_transition_with_links() {
        let graph = corpus();
        let dist = transition(&graph, "1.html", 0.85).unwrap();

        assert!((dist["1.html"] - 0.0375).abs() < 1e-12);
        assert!((dist["2.html"] - 0.8875).abs() < 1e-12);
        assert!((dist["3.html"] - 0.0375).abs() < 1e-12);
        assert!((dist["4.html"] - 0.0375).abs() < 1e-12);
    }

    #[test]
    fn test_transition_dead_end_is_uniform() {
        let graph = LinkGraph::new([("A", vec![]), ("B", vec!["A"])]).unwrap();
        let dist = transition(&graph, "A", 0.85).unwrap();

        assert_eq!(dist.len(), 2);
        assert_eq!(dist["A"], 0.5);
        assert_eq!(dist["B"], 0.5);
    }

    #[test]
    fn test_transition_sums_to_one_for_any_damping() {
        let graph = corpus();
        for step in 0..=20 {
            let d = f64::from(step) / 20.0;
            for page in graph.pages() {
                let dist = transition(&graph, page, d).unwrap();
                let sum: f64 = dist.values().sum();
                assert!((sum - 1.0).abs() < 1e-9, "page={page} d={d} sum={sum}");
            }
        }
    }

    #[test]
    fn test_transition_rejects_unknown_page() {
        let err = transition(&corpus(), "9.html", 0.85).unwrap_err();
        assert!(matches!(err, LinkRankError::InvalidGraph(_)));
    }

    #[test]
    fn test_transition_rejects_bad_damping() {
        let err = transition(&corpus(), "1.html", 1.2).unwrap_err();
        assert!(matches!(err, LinkRankError::InvalidParameter(_)));
    }
}
