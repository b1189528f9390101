use crate::traits::FeedSource;
use crate::types::{FeedDescriptor, Headline};
use tracing::{debug, warn};

/// Counters from one collection pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectionReport {
    pub feeds_attempted: usize,
    pub feeds_failed: usize,
    pub entries_seen: usize,
    pub entries_untitled: usize,
}

/// Fetch every feed in order, keep at most `max_per_feed` entries from each,
/// and normalize them into headlines. A feed that fails contributes nothing.
pub async fn collect_headlines(
    source: &dyn FeedSource,
    feeds: &[FeedDescriptor],
    max_per_feed: usize,
) -> Vec<Headline> {
    collect_with_report(source, feeds, max_per_feed).await.0
}

pub async fn collect_with_report(
    source: &dyn FeedSource,
    feeds: &[FeedDescriptor],
    max_per_feed: usize,
) -> (Vec<Headline>, CollectionReport) {
    let mut report = CollectionReport::default();
    let mut items = Vec::new();

    for feed in feeds {
        report.feeds_attempted += 1;

        let entries = match source.fetch_entries(&feed.url).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(feed = %feed.id, url = %feed.url, error = %e, "feed skipped");
                report.feeds_failed += 1;
                continue;
            }
        };

        let before = items.len();
        for entry in entries.iter().take(max_per_feed) {
            report.entries_seen += 1;
            match Headline::from_entry(feed, entry) {
                Some(headline) => items.push(headline),
                None => report.entries_untitled += 1,
            }
        }
        debug!(
            "Feed {}: {} of {} entries became headlines",
            feed.id,
            items.len() - before,
            entries.len()
        );
    }

    (items, report)
}
