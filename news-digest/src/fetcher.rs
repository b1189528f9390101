use crate::types::{DigestError, FeedFetchFailure, FetchConfig, FetchResult, Result};
use reqwest::Client;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::debug;
use url::Url;

/// Where a feed's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedLocation {
    Remote(Url),
    File(PathBuf),
}

impl FeedLocation {
    /// `http(s)://` goes over the network, `file://` and bare paths are read
    /// from disk. Any other scheme is rejected.
    pub fn resolve(raw: &str) -> FetchResult<Self> {
        let raw = raw.trim();
        match Url::parse(raw) {
            Ok(url) => match url.scheme() {
                "http" | "https" => Ok(Self::Remote(url)),
                "file" => url.to_file_path().map(Self::File).map_err(|_| {
                    FeedFetchFailure::Io(std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        format!("not a local file URL: {}", raw),
                    ))
                }),
                other => Err(FeedFetchFailure::UnsupportedScheme {
                    scheme: other.to_string(),
                }),
            },
            Err(url::ParseError::RelativeUrlWithoutBase) if !raw.is_empty() => {
                Ok(Self::File(PathBuf::from(raw)))
            }
            Err(e) => Err(FeedFetchFailure::InvalidUrl(e)),
        }
    }
}

pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .map_err(DigestError::Client)?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Fetch the raw feed document. Timeouts surface as `Http` failures.
    pub async fn fetch_feed(&self, url: &str) -> FetchResult<Vec<u8>> {
        let start_time = Instant::now();
        debug!("Fetching feed: {}", url);

        let content = match FeedLocation::resolve(url)? {
            FeedLocation::Remote(url) => self.fetch_remote(url).await?,
            FeedLocation::File(path) => tokio::fs::read(&path).await?,
        };
        self.check_size(content.len())?;

        debug!(
            "Fetched feed: {} ({} bytes in {}ms)",
            url,
            content.len(),
            start_time.elapsed().as_millis()
        );
        Ok(content)
    }

    async fn fetch_remote(&self, url: Url) -> FetchResult<Vec<u8>> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedFetchFailure::Status {
                status: status.as_u16(),
            });
        }

        if let Some(content_length) = response.content_length() {
            self.check_size(content_length as usize)?;
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }

    fn check_size(&self, len: usize) -> FetchResult<()> {
        let limit = self.config.max_feed_size_mb.saturating_mul(1024 * 1024);
        if len > limit {
            return Err(FeedFetchFailure::TooLarge {
                size_mb: len / (1024 * 1024),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_remote_and_local_locations() {
        assert!(matches!(
            FeedLocation::resolve("https://feeds.bbci.co.uk/news/rss.xml"),
            Ok(FeedLocation::Remote(_))
        ));
        assert_eq!(
            FeedLocation::resolve("fixtures/feed.xml").unwrap(),
            FeedLocation::File(PathBuf::from("fixtures/feed.xml"))
        );
        assert!(matches!(
            FeedLocation::resolve("file:///tmp/feed.xml"),
            Ok(FeedLocation::File(_))
        ));
    }

    #[test]
    fn rejects_unknown_scheme_and_empty_url() {
        assert!(matches!(
            FeedLocation::resolve("ftp://example.com/feed.xml"),
            Err(FeedFetchFailure::UnsupportedScheme { .. })
        ));
        assert!(matches!(
            FeedLocation::resolve("   "),
            Err(FeedFetchFailure::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn oversized_local_feed_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.xml");
        std::fs::write(&path, vec![b'a'; 2 * 1024 * 1024]).unwrap();

        let fetcher = Fetcher::new(FetchConfig {
            max_feed_size_mb: 1,
            ..FetchConfig::default()
        })
        .unwrap();
        let err = fetcher.fetch_feed(path.to_str().unwrap()).await.unwrap_err();
        assert!(matches!(err, FeedFetchFailure::TooLarge { size_mb: 2 }));
    }

    #[tokio::test]
    async fn huge_size_limit_does_not_overflow() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.xml");
        std::fs::write(&path, b"<rss/>").unwrap();

        let fetcher = Fetcher::new(FetchConfig {
            max_feed_size_mb: usize::MAX,
            ..FetchConfig::default()
        })
        .unwrap();
        let body = fetcher.fetch_feed(path.to_str().unwrap()).await.unwrap();
        assert_eq!(body, b"<rss/>");
        assert!(fetcher.check_size(usize::MAX).is_ok());
    }
}
