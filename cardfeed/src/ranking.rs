//! Relevance scoring and ranking for the client-side filter box.
//!
//! Substring tests against the normalized title, the raw keyword list and
//! the raw blob, with title > keywords > blob weighting and a small
//! score-derived jitter that fans out ties. The blob scans dominate cost;
//! the weighting just keeps the ordering looking organic.

use crate::interface::{Item, RankedResults};
use crate::text::normalize;

/// Relevance added when the normalized title contains the query.
pub const TITLE_WEIGHT: u32 = 50;
/// Relevance added when the space-joined keyword list contains the query.
pub const KEYWORD_WEIGHT: u32 = 20;
/// Relevance added when the raw blob contains the query.
pub const BLOB_WEIGHT: u32 = 10;
/// Modulus for the base-score jitter term applied to matching items.
pub const RELEVANCE_JITTER_MOD: u32 = 7;

/// Sort key - derived Ord gives lexicographic comparison, higher = better.
/// Relevance dominates; the item's base score breaks ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RankScore {
    pub relevance: u32,
    pub base: u32,
}

/// Relevance of one item against a non-empty normalized query. Zero means
/// no field matched; the jitter term only applies to actual matches so a
/// miss stays a miss.
pub fn relevance_score(item: &Item, normalized_query: &str) -> u32 {
    debug_assert!(!normalized_query.is_empty());
    let mut relevance = 0;
    if normalize(&item.title).contains(normalized_query) {
        relevance += TITLE_WEIGHT;
    }
    if item.keywords.join(" ").contains(normalized_query) {
        relevance += KEYWORD_WEIGHT;
    }
    if item.blob.contains(normalized_query) {
        relevance += BLOB_WEIGHT;
    }
    if relevance == 0 {
        return 0;
    }
    relevance + item.score % RELEVANCE_JITTER_MOD
}

/// Score, filter, sort and truncate a batch for display.
///
/// An empty (post-normalization) filter keeps every item at relevance 0;
/// a non-empty one drops non-matches. Output is sorted descending by
/// `(relevance, base score)` and truncated to `display_limit`.
pub fn rank(items: &[Item], raw_filter: &str, display_limit: usize) -> RankedResults {
    #[cfg(feature = "perf-log")]
    let t0 = std::time::Instant::now();

    let query = normalize(raw_filter);
    let total_count = items.len() as u64;

    let mut scored: Vec<(RankScore, &Item)> = if query.is_empty() {
        items
            .iter()
            .map(|item| {
                (
                    RankScore {
                        relevance: 0,
                        base: item.score,
                    },
                    item,
                )
            })
            .collect()
    } else {
        items
            .iter()
            .filter_map(|item| {
                let relevance = relevance_score(item, &query);
                (relevance > 0).then_some((
                    RankScore {
                        relevance,
                        base: item.score,
                    },
                    item,
                ))
            })
            .collect()
    };

    let match_count = scored.len() as u64;
    scored.sort_unstable_by(|a, b| b.0.cmp(&a.0));

    let shown: Vec<Item> = scored
        .into_iter()
        .take(display_limit)
        .map(|(_, item)| item.clone())
        .collect();

    #[cfg(feature = "perf-log")]
    eprintln!(
        "[perf] rank total={:.1}ms items={} matched={} shown={}",
        t0.elapsed().as_secs_f64() * 1000.0,
        total_count,
        match_count,
        shown.len(),
    );

    RankedResults {
        shown,
        total_count,
        match_count,
    }
}
