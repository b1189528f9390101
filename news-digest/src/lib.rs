pub mod types;
pub mod config;
pub mod traits;
pub mod fetcher;
pub mod parser;
pub mod sources;
pub mod collector;
pub mod processing;
pub mod digest;
pub mod pipeline;

pub use types::*;
pub use config::{load_config, DigestConfig};
pub use traits::FeedSource;
pub use fetcher::Fetcher;
pub use parser::FeedParser;
pub use sources::{HttpFeedSource, StaticFeedSource};
pub use collector::{collect_headlines, collect_with_report, CollectionReport};
pub use processing::{dedupe, group_by_category};
pub use digest::{format_date, MarkdownDigest};
pub use pipeline::DigestPipeline;
