//! Property tests for the transition model and both estimators

use linkrank_core::rank::total;
use linkrank_core::{iterate_rank, sample_rank_with_rng, transition, LinkGraph};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

/// Graphs of 1 to 7 pages with arbitrary links (no self-links).
fn arb_graph() -> impl Strategy<Value = LinkGraph> {
    (1usize..8).prop_flat_map(|n| {
        proptest::collection::vec(any::<bool>(), n * n).prop_map(move |bits| {
            let links = (0..n).map(|i| {
                let targets: Vec<String> = (0..n)
                    .filter(|&j| j != i && bits[i * n + j])
                    .map(|j| format!("p{j}"))
                    .collect();
                (format!("p{i}"), targets)
            });
            LinkGraph::new(links).unwrap()
        })
    })
}

proptest! {
    #[test]
    fn transition_sums_to_one(graph in arb_graph(), damping in 0.0f64..=1.0) {
        for page in graph.pages() {
            let dist = transition(&graph, page, damping).unwrap();
            prop_assert_eq!(dist.len(), graph.len());
            let sum: f64 = dist.values().sum();
            prop_assert!((sum - 1.0).abs() < 1e-9, "sum={}", sum);
        }
    }

    #[test]
    fn dead_ends_are_uniform(graph in arb_graph(), damping in 0.0f64..=1.0) {
        let uniform = 1.0 / graph.len() as f64;
        for page in graph.dead_ends() {
            let dist = transition(&graph, page, damping).unwrap();
            for p in dist.values() {
                prop_assert_eq!(*p, uniform);
            }
        }
    }

    #[test]
    fn neighbors_outweigh_non_neighbors(graph in arb_graph(), damping in 0.01f64..=1.0) {
        let base = (1.0 - damping) / graph.len() as f64;
        for page in graph.pages() {
            let neighbors: Vec<&str> = graph.links(page).unwrap().collect();
            if neighbors.is_empty() {
                continue;
            }
            let dist = transition(&graph, page, damping).unwrap();
            let lowest_neighbor = neighbors
                .iter()
                .map(|n| dist[*n])
                .fold(f64::INFINITY, f64::min);

            for (p, prob) in &dist {
                if neighbors.contains(&p.as_str()) {
                    prop_assert!(*prob >= base);
                } else {
                    prop_assert!((prob - base).abs() < 1e-12);
                    prop_assert!(lowest_neighbor > *prob);
                }
            }
        }
    }

    #[test]
    fn iteration_is_normalized_and_deterministic(graph in arb_graph(), damping in 0.0f64..0.95) {
        let ranks = iterate_rank(&graph, damping).unwrap();
        prop_assert!(ranks.keys().eq(graph.pages().iter()));
        prop_assert!(ranks.values().all(|r| *r >= 0.0));
        let sum = total(&ranks);
        prop_assert!((sum - 1.0).abs() < 1e-6, "sum={}", sum);
        prop_assert_eq!(ranks, iterate_rank(&graph, damping).unwrap());
    }

    #[test]
    fn sampling_is_normalized(graph in arb_graph(), damping in 0.0f64..=1.0, seed in any::<u64>()) {
        let mut rng = XorShiftRng::seed_from_u64(seed);
        let ranks = sample_rank_with_rng(&graph, damping, 500, &mut rng).unwrap();
        prop_assert!(ranks.keys().eq(graph.pages().iter()));
        let sum = total(&ranks);
        prop_assert!((sum - 1.0).abs() < 1e-6, "sum={}", sum);
    }
}
