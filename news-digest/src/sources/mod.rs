pub mod rss_feed;
pub mod static_feed;

pub use rss_feed::HttpFeedSource;
pub use static_feed::StaticFeedSource;
