//! Markdown output formatter

use super::RankSection;
use linkrank_core::rank::ranked_desc;

pub fn format_rankings(sections: &[RankSection], deviation: Option<f64>) -> String {
    let mut output = String::from("# PageRank Results\n\n");

    for section in sections {
        output.push_str(&format!("## {}\n\n", section.title));
        if let Some(iterations) = section.iterations {
            output.push_str(&format!("*Iterated {} rounds*\n\n", iterations));
        }
        output.push_str("| # | Page | Rank |\n|---|------|------|\n");
        for (i, (page, rank)) in ranked_desc(&section.ranks).into_iter().enumerate() {
            output.push_str(&format!("| {} | `{}` | {:.4} |\n", i + 1, page, rank));
        }
        output.push('\n');
    }

    if let Some(deviation) = deviation {
        output.push_str(&format!("**Max difference between methods**: {:.4}\n", deviation));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::sample_sections;

    #[test]
    fn test_markdown_orders_by_rank() {
        let output = format_rankings(&sample_sections(), Some(0.1));

        assert!(output.contains("| 1 | `a.html` | 0.7500 |"), "{output}");
        assert!(output.contains("*Iterated 12 rounds*"));
        assert!(output.ends_with("**Max difference between methods**: 0.1000\n"));
    }
}
