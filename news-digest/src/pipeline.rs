use crate::collector::collect_with_report;
use crate::config::DigestConfig;
use crate::digest::{format_date, MarkdownDigest};
use crate::processing::{dedupe, group_by_category};
use crate::sources::HttpFeedSource;
use crate::traits::FeedSource;
use crate::types::Result;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::info;

/// Drives collect → dedupe → group → write, one language at a time.
pub struct DigestPipeline {
    source: Box<dyn FeedSource>,
    digest_root: PathBuf,
}

impl DigestPipeline {
    pub fn new(source: Box<dyn FeedSource>, digest_root: impl Into<PathBuf>) -> Self {
        Self {
            source,
            digest_root: digest_root.into(),
        }
    }

    /// Pipeline over real feeds, using the config's fetch settings and digest root.
    pub fn from_config(config: &DigestConfig) -> Result<Self> {
        let source = HttpFeedSource::new(config.fetch.clone())?;
        Ok(Self::new(Box::new(source), config.digest_root.clone()))
    }

    pub fn digest_root(&self) -> &Path {
        &self.digest_root
    }

    /// Returns `Ok(None)` when no feed is tagged with `lang`.
    pub async fn run_for_language(
        &self,
        config: &DigestConfig,
        lang: &str,
        today: NaiveDate,
    ) -> Result<Option<PathBuf>> {
        let feeds = config.feeds_for(lang);
        if feeds.is_empty() {
            info!("No feeds configured for {}, skipping", lang);
            return Ok(None);
        }

        // Reject a bad date format before spending time on the network
        format_date(today, &config.date_format)?;

        info!(
            "Building {} digest from {} feeds via {}",
            lang,
            feeds.len(),
            self.source.source_name()
        );
        let (items, report) =
            collect_with_report(self.source.as_ref(), &feeds, config.max_per_feed).await;
        let collected = items.len();
        let items = dedupe(items);
        info!(
            lang = %lang,
            feeds_failed = report.feeds_failed,
            entries_untitled = report.entries_untitled,
            collected,
            duplicates = collected - items.len(),
            "collected headlines"
        );

        let grouped = group_by_category(items);
        let path = MarkdownDigest::write(
            &grouped,
            lang,
            &config.date_format,
            &self.digest_root,
            today,
        )
        .await?;
        Ok(Some(path))
    }

    /// Languages run strictly one after another; the first fatal error stops the run.
    pub async fn run(
        &self,
        config: &DigestConfig,
        languages: &[String],
        today: NaiveDate,
    ) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();
        for lang in languages {
            if let Some(path) = self.run_for_language(config, lang, today).await? {
                paths.push(path);
            }
        }
        info!("Digest run finished: {} files written", paths.len());
        Ok(paths)
    }
}
