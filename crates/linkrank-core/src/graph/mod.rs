//! Link graph model and corpus crawling

mod crawler;
mod link_extractor;
mod link_graph;

pub use crawler::{crawl, crawl_with, CrawlOptions};
pub use link_extractor::extract_links;
pub use link_graph::LinkGraph;
