use crate::types::{FeedFetchFailure, FetchResult, RawEntry};
use feed_rs::model::{Entry, Link};
use feed_rs::parser;
use tracing::debug;

/// Turns RSS/Atom documents into raw entries. Stateless.
pub struct FeedParser;

impl FeedParser {
    /// Entries come back in document order.
    pub fn parse_entries(content: &[u8]) -> FetchResult<Vec<RawEntry>> {
        debug!("Parsing feed content ({} bytes)", content.len());

        let feed = parser::parse(content)
            .map_err(|e| FeedFetchFailure::Parse(format!("Failed to parse feed: {}", e)))?;

        let entries: Vec<RawEntry> = feed.entries.into_iter().map(Self::parse_entry).collect();
        debug!("Parsed feed with {} entries", entries.len());
        Ok(entries)
    }

    fn parse_entry(entry: Entry) -> RawEntry {
        RawEntry {
            title: entry.title.map(|t| t.content),
            link: primary_link(&entry.links).map(|l| l.href.clone()),
        }
    }
}

/// The entry's alternate link (or one without a `rel`), falling back to the
/// first link of any kind.
fn primary_link(links: &[Link]) -> Option<&Link> {
    links
        .iter()
        .find(|l| matches!(l.rel.as_deref(), None | Some("alternate")))
        .or_else(|| links.first())
}
