//! Pairlist post-processing for the scraper's stdout.

use std::collections::HashSet;

/// Default number of pairs kept from a scrape.
pub const DEFAULT_PAIR_COUNT: usize = 50;

/// Parse scraper output into at most `count` unique pairs.
///
/// Anything that is not a JSON array of strings (including `null` and empty
/// output) yields an empty list. Duplicates are dropped keeping the first
/// occurrence, then the list is truncated.
#[must_use]
pub fn parse_pairlist(stdout: &str, count: usize) -> Vec<String> {
    let Ok(Some(pairs)) = serde_json::from_str::<Option<Vec<String>>>(stdout.trim()) else {
        return Vec::new();
    };
    let mut seen = HashSet::new();
    pairs
        .into_iter()
        .filter(|pair| seen.insert(pair.clone()))
        .take(count)
        .collect()
}
