use crate::types::{FetchResult, RawEntry};
use async_trait::async_trait;

/// A capability that turns a feed URL into its entries, in feed order.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Human-readable name for this source, used in logs
    fn source_name(&self) -> String;

    /// Fetch and parse the feed at `url`. Failures are reported, not raised:
    /// callers decide how to degrade.
    async fn fetch_entries(&self, url: &str) -> FetchResult<Vec<RawEntry>>;
}
