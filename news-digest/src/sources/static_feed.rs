use crate::traits::FeedSource;
use crate::types::{FeedFetchFailure, FetchResult, RawEntry};
use async_trait::async_trait;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum Canned {
    Entries(Vec<RawEntry>),
    Failure(String),
}

/// In-memory source keyed by URL. Unknown URLs fail like an unreachable host.
#[derive(Debug, Clone, Default)]
pub struct StaticFeedSource {
    feeds: HashMap<String, Canned>,
}

impl StaticFeedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(mut self, url: impl Into<String>, entries: Vec<RawEntry>) -> Self {
        self.feeds.insert(url.into(), Canned::Entries(entries));
        self
    }

    pub fn with_failure(mut self, url: impl Into<String>, reason: impl Into<String>) -> Self {
        self.feeds.insert(url.into(), Canned::Failure(reason.into()));
        self
    }
}

#[async_trait]
impl FeedSource for StaticFeedSource {
    fn source_name(&self) -> String {
        format!("static ({} feeds)", self.feeds.len())
    }

    async fn fetch_entries(&self, url: &str) -> FetchResult<Vec<RawEntry>> {
        match self.feeds.get(url) {
            Some(Canned::Entries(entries)) => Ok(entries.clone()),
            Some(Canned::Failure(reason)) => Err(FeedFetchFailure::Parse(reason.clone())),
            None => Err(FeedFetchFailure::Status { status: 404 }),
        }
    }
}
