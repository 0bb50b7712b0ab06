//! CSV output formatter

use super::RankSection;

pub fn format_rankings(sections: &[RankSection]) -> String {
    let mut output = String::from("method,page,rank\n");

    for section in sections {
        for (page, rank) in &section.ranks {
            output.push_str(&format!("{},{},{}\n", section.method, escape_csv(page), rank));
        }
    }

    output
}

pub(crate) fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
