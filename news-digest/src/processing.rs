use crate::types::{DedupKey, GroupedDigest, Headline};
use std::collections::HashSet;
use tracing::debug;

/// Drop headlines whose (lang, category, lowercased title) was already seen.
/// Stable: the first occurrence wins and relative order is kept.
pub fn dedupe(items: Vec<Headline>) -> Vec<Headline> {
    let mut seen: HashSet<DedupKey> = HashSet::with_capacity(items.len());
    let mut out = Vec::with_capacity(items.len());

    for item in items {
        if seen.insert(item.dedup_key()) {
            out.push(item);
        } else {
            debug!("Removing duplicate headline: {} ({})", item.title, item.link);
        }
    }

    out
}

/// Bucket headlines by category, keeping input order inside each bucket.
pub fn group_by_category(items: Vec<Headline>) -> GroupedDigest {
    let mut grouped = GroupedDigest::new();
    for item in items {
        grouped.entry(item.category.clone()).or_default().push(item);
    }
    grouped
}
