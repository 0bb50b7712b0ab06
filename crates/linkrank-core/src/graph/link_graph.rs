//! Immutable link graph over a closed set of pages

use crate::error::{LinkRankError, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Directed graph of pages and the pages they link to.
///
/// Pages are kept in sorted order and addressed internally by dense index,
/// so every traversal visits pages in the same order. Every link target is
/// itself a page of the graph and no page links to itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkGraph {
    pages: Vec<String>,
    index: HashMap<String, usize>,
    links: Vec<Vec<usize>>,
}

impl LinkGraph {
    /// Build a graph from `page -> linked pages`, rejecting anything that
    /// breaks the closed-universe invariant.
    ///
    /// Fails with [`LinkRankError::InvalidGraph`] when there are no pages,
    /// when a page links to something that is not a page, or when a page
    /// links to itself.
    pub fn new<I, P, L>(links: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        let map = collect_links(links);

        for (page, targets) in &map {
            if targets.contains(page) {
                return Err(LinkRankError::InvalidGraph(format!(
                    "page '{}' links to itself",
                    page
                )));
            }
            if let Some(missing) = targets.iter().find(|t| !map.contains_key(*t)) {
                return Err(LinkRankError::InvalidGraph(format!(
                    "page '{}' links to '{}', which is not in the graph",
                    page, missing
                )));
            }
        }

        Self::from_checked(map)
    }

    /// Build a graph from raw extracted links, dropping self-links and links
    /// to pages outside the key set instead of rejecting them.
    pub fn from_raw_links<I, P, L>(links: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        let map = collect_links(links);
        let keys: BTreeSet<String> = map.keys().cloned().collect();

        let filtered = map
            .into_iter()
            .map(|(page, targets)| {
                let kept = targets
                    .into_iter()
                    .filter(|t| *t != page && keys.contains(t))
                    .collect::<BTreeSet<_>>();
                (page, kept)
            })
            .collect();

        Self::from_checked(filtered)
    }

    fn from_checked(map: BTreeMap<String, BTreeSet<String>>) -> Result<Self> {
        if map.is_empty() {
            return Err(LinkRankError::InvalidGraph(
                "graph contains no pages".to_string(),
            ));
        }

        let pages: Vec<String> = map.keys().cloned().collect();
        let index: HashMap<String, usize> = pages
            .iter()
            .enumerate()
            .map(|(i, p)| (p.clone(), i))
            .collect();

        // BTreeSet iteration is sorted, so targets come out in page order
        let links = map
            .values()
            .map(|targets| targets.iter().map(|t| index[t]).collect())
            .collect();

        Ok(Self {
            pages,
            index,
            links,
        })
    }

    /// Number of pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false for a constructed graph
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Pages in sorted order
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn contains(&self, page: &str) -> bool {
        self.index.contains_key(page)
    }

    /// Pages linked to by `page`, or `None` if `page` is unknown
    pub fn links(&self, page: &str) -> Option<impl Iterator<Item = &str> + '_> {
        let idx = self.index_of(page)?;
        Some(self.links[idx].iter().map(|&t| self.pages[t].as_str()))
    }

    pub fn out_degree(&self, page: &str) -> Option<usize> {
        self.index_of(page).map(|idx| self.links[idx].len())
    }

    /// Pages without outbound links
    pub fn dead_ends(&self) -> Vec<&str> {
        self.links
            .iter()
            .enumerate()
            .filter(|(_, targets)| targets.is_empty())
            .map(|(i, _)| self.pages[i].as_str())
            .collect()
    }

    /// Total number of links
    pub fn edge_count(&self) -> usize {
        self.links.iter().map(Vec::len).sum()
    }

    /// Iterate `(page, linked pages)` in page order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Vec<&str>)> + '_ {
        self.pages.iter().zip(&self.links).map(|(page, targets)| {
            let names = targets.iter().map(|&t| self.pages[t].as_str()).collect();
            (page.as_str(), names)
        })
    }

    pub(crate) fn index_of(&self, page: &str) -> Option<usize> {
        self.index.get(page).copied()
    }

    pub(crate) fn targets(&self, idx: usize) -> &[usize] {
        &self.links[idx]
    }

    /// Pair each page with the value at its index.
    pub(crate) fn label(&self, values: Vec<f64>) -> BTreeMap<String, f64> {
        self.pages.iter().cloned().zip(values).collect()
    }
}

fn collect_links<I, P, L>(links: I) -> BTreeMap<String, BTreeSet<String>>
where
    I: IntoIterator<Item = (P, L)>,
    P: Into<String>,
    L: IntoIterator,
    L::Item: Into<String>,
{
    let mut map: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for (page, targets) in links {
        map.entry(page.into())
            .or_default()
            .extend(targets.into_iter().map(Into::into));
    }
    map
}

impl Serialize for LinkGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (page, targets) in self.iter() {
            map.serialize_entry(page, &targets)?;
        }
        map.end()
    }
}
