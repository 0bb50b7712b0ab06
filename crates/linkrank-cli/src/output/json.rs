//! JSON output formatter

use super::RankSection;

pub fn format_rankings(sections: &[RankSection], deviation: Option<f64>) -> String {
    let results: Vec<serde_json::Value> = sections
        .iter()
        .map(|s| {
            serde_json::json!({
                "method": s.method,
                "title": s.title,
                "iterations": s.iterations,
                "ranks": s.ranks,
            })
        })
        .collect();

    let output = serde_json::json!({
        "results": results,
        "max_difference": deviation,
    });

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string()) + "\n"
}
