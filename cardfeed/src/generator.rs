//! Deterministic item generation and the "server-side" substring filter.
//!
//! `generate_items(count, query)` is a pure function of its inputs: the
//! query seeds the mulberry32 stream, and every field of every item is
//! derived from that stream plus string formatting. Two calls with the
//! same inputs produce field-for-field identical batches.

use crate::interface::Item;
use crate::rng::{fnv1a_32, Mulberry32};
use crate::text::normalize;

/// Seed fallback when the query is empty, so unfiltered batches are still
/// fully deterministic.
const FALLBACK_SEED: &str = "seed";

/// Keywords drawn per item.
const KEYWORDS_PER_ITEM: usize = 12;
/// Keywords shown in the subtitle.
const SUBTITLE_KEYWORDS: usize = 5;
/// Words appended per blob-filling round.
const BLOB_BATCH_WORDS: usize = 24;
/// Blob target size is `BLOB_BASE_LEN + [0, BLOB_LEN_SPREAD)` bytes.
const BLOB_BASE_LEN: usize = 1200;
const BLOB_LEN_SPREAD: usize = 800;
/// Base scores are drawn from `[0, SCORE_RANGE)`.
const SCORE_RANGE: f64 = 100_000.0;

/// Fixed vocabulary for keyword and blob draws. All-ASCII, all-lowercase,
/// so blob byte length equals char length and raw substring tests against
/// a normalized query behave.
pub const WORDS: &[&str] = &[
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "gamma", "hotel", "india",
    "juliet", "kilo", "lima", "micro", "nano", "omega", "pixel", "quantum", "react",
    "router", "state", "signal", "stream", "cache", "render", "commit", "fiber", "hook",
    "closure", "scheduler", "concurrent", "transition", "deferred", "batch", "priority",
    "token", "session", "shard",
];

fn pick_word(rng: &mut Mulberry32) -> &'static str {
    // next_f64() < 1.0, so the index never reaches WORDS.len()
    WORDS[(rng.next_f64() * WORDS.len() as f64) as usize]
}

/// Build a space-joined filler text of exactly `size` bytes. Words are
/// appended in rounds of [`BLOB_BATCH_WORDS`] until the joined length
/// reaches the target, then the result is truncated exactly (mid-word cuts
/// are fine).
fn make_blob(rng: &mut Mulberry32, size: usize) -> String {
    let mut parts: Vec<&'static str> = Vec::new();
    let mut joined_len = 0usize;
    while joined_len < size {
        for _ in 0..BLOB_BATCH_WORDS {
            let word = pick_word(rng);
            joined_len += word.len() + usize::from(!parts.is_empty());
            parts.push(word);
        }
    }
    let mut blob = parts.join(" ");
    blob.truncate(size);
    blob
}

/// Generate `count` items seeded by `query`, sorted by descending `score`.
///
/// Draw order per item is part of the determinism contract: score, then
/// [`KEYWORDS_PER_ITEM`] keywords, then the blob target size, then the
/// blob words. Ties in `score` may reorder (unstable sort).
pub fn generate_items(count: usize, query: &str) -> Vec<Item> {
    let seed_input = if query.is_empty() { FALLBACK_SEED } else { query };
    let mut rng = Mulberry32::new(fnv1a_32(seed_input));
    let mut items = Vec::with_capacity(count);

    for i in 0..count {
        let score = (rng.next_f64() * SCORE_RANGE) as u32;
        let keywords: Vec<String> = (0..KEYWORDS_PER_ITEM)
            .map(|_| pick_word(&mut rng).to_string())
            .collect();
        let blob_len = BLOB_BASE_LEN + (rng.next_f64() * BLOB_LEN_SPREAD as f64) as usize;
        let blob = make_blob(&mut rng, blob_len);

        let title = if query.is_empty() {
            format!("Item #{} {} {}", i + 1, keywords[0], keywords[1])
        } else {
            format!("Item #{} {} {} • \"{}\"", i + 1, keywords[0], keywords[1], query)
        };
        let subtitle = format!(
            "kws={} • score={}",
            keywords[..SUBTITLE_KEYWORDS].join(", "),
            score
        );
        let batch_tag = if query.is_empty() { "all" } else { query };
        let id = format!("{}-{}-{}", batch_tag, i, score);

        items.push(Item {
            id,
            title,
            subtitle,
            score,
            keywords,
            blob,
        });
    }

    items.sort_unstable_by(|a, b| b.score.cmp(&a.score));
    items
}

/// "Server-side" filter, applied only when the normalized query is
/// non-empty: keep items whose haystack (normalized title + raw keyword
/// list + raw blob) contains it as a substring. Survivors keep their
/// score-sorted relative order.
pub fn server_filter(items: Vec<Item>, normalized_query: &str) -> Vec<Item> {
    if normalized_query.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| {
            let mut haystack = normalize(&item.title);
            haystack.push(' ');
            haystack.push_str(&item.keywords.join(" "));
            haystack.push(' ');
            haystack.push_str(&item.blob);
            haystack.contains(normalized_query)
        })
        .collect()
}
