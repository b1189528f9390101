use crate::parser::FeedParser;
use crate::traits::FeedSource;
use crate::types::{FetchConfig, FetchResult, RawEntry, Result};
use crate::Fetcher;
use async_trait::async_trait;
use tracing::debug;

/// RSS/Atom source backed by HTTP (or local files) and `feed-rs`.
pub struct HttpFeedSource {
    fetcher: Fetcher,
}

impl HttpFeedSource {
    pub fn new(fetch_config: FetchConfig) -> Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(fetch_config)?,
        })
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    fn source_name(&self) -> String {
        format!("RSS/Atom ({})", self.fetcher.config().user_agent)
    }

    async fn fetch_entries(&self, url: &str) -> FetchResult<Vec<RawEntry>> {
        let content = self.fetcher.fetch_feed(url).await?;
        let entries = FeedParser::parse_entries(&content)?;
        debug!("Pulled {} entries from {}", entries.len(), url);
        Ok(entries)
    }
}
