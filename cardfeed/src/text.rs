//! Pinned text normalization shared by the server-side filter and the
//! ranking pipeline.
//!
//! Lowercase, NFKD decomposition, strip combining marks in
//! U+0300..=U+036F, map every char outside `[a-z0-9]`/whitespace to a
//! space, collapse whitespace runs, trim. The transform is fully spelled
//! out here instead of delegated to a platform text API so independent
//! implementations agree byte-for-byte. Idempotent.

use unicode_normalization::UnicodeNormalization;

pub fn normalize(input: &str) -> String {
    let mapped: String = input
        .to_lowercase()
        .nfkd()
        .filter(|c| !('\u{0300}'..='\u{036F}').contains(c))
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}
