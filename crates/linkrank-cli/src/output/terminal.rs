//! Terminal output formatter

use super::RankSection;

pub fn format_rankings(sections: &[RankSection], deviation: Option<f64>) -> String {
    let mut output = String::new();

    for section in sections {
        output.push_str(&section.title);
        output.push('\n');
        for (page, rank) in &section.ranks {
            output.push_str(&format!("  {}: {:.4}\n", page, rank));
        }
    }

    if let Some(deviation) = deviation {
        output.push_str(&format!("Max difference between methods: {:.4}\n", deviation));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::sample_sections;

    #[test]
    fn test_terminal_layout() {
        let output = format_rankings(&sample_sections(), Some(0.1005));
        let expected = "PageRank Results from Sampling (n = 4)\n  a.html: 0.7500\n  b.html: 0.2500\n\
                        PageRank Results from Iteration\n  a.html: 0.6495\n  b.html: 0.3505\n\
                        Max difference between methods: 0.1005\n";
        assert_eq!(output, expected);
    }
}
