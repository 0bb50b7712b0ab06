//! Link extraction from HTML documents

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

lazy_static! {
    static ref ANCHOR_HREF_RE: Regex =
        Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("Invalid regex");
}

/// Extract the `href` targets of every anchor tag in `content`.
///
/// Targets are returned verbatim and deduplicated; resolving them against
/// the corpus is the crawler's job.
pub fn extract_links(content: &str) -> BTreeSet<String> {
    ANCHOR_HREF_RE
        .captures_iter(content)
        .filter_map(|cap| cap.get(1))
        .map(|target| target.as_str().to_string())
        .collect()
}
