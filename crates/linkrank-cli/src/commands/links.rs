//! Link graph inspection command

use crate::app::{LinksArgs, OutputFormat};
use crate::output::csv::escape_csv;
use anyhow::Result;
use linkrank_core::{crawl, LinkGraph};

/// Print every page of the corpus with the pages it links to
pub fn run(args: LinksArgs, format: OutputFormat) -> Result<()> {
    let graph = crawl(&args.corpus)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&graph)?);
        }
        OutputFormat::Csv => {
            print!("{}", format_edges_csv(&graph));
        }
        OutputFormat::Md => {
            println!("# Link Graph\n");
            for (page, targets) in graph.iter() {
                let rendered: Vec<String> = targets.iter().map(|t| format!("`{}`", t)).collect();
                println!("- `{}` → {}", page, or_none(&rendered.join(", ")));
            }
        }
        OutputFormat::Cli => {
            for (page, targets) in graph.iter() {
                println!("{} -> {}", page, or_none(&targets.join(", ")));
            }
            println!();
            println!("Pages:      {}", graph.len());
            println!("Links:      {}", graph.edge_count());
            println!("Dead ends:  {}", graph.dead_ends().len());
        }
    }
    Ok(())
}

/// One `source,target` row per link
fn format_edges_csv(graph: &LinkGraph) -> String {
    let mut output = String::from("source,target\n");
    for (page, targets) in graph.iter() {
        for target in targets {
            output.push_str(&format!("{},{}\n", escape_csv(page), escape_csv(target)));
        }
    }
    output
}

fn or_none(joined: &str) -> &str {
    if joined.is_empty() {
        "(none)"
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_csv_escapes_names() {
        let graph = LinkGraph::new([
            ("a,b.html", vec!["q\"uote.html"]),
            ("q\"uote.html", vec!["plain.html"]),
            ("plain.html", vec![]),
        ])
        .unwrap();

        let output = format_edges_csv(&graph);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines,
            vec![
                "source,target",
                "\"a,b.html\",\"q\"\"uote.html\"",
                "\"q\"\"uote.html\",plain.html",
            ]
        );
    }
}
