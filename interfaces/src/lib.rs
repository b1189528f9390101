pub mod defs;

pub use defs::{DedupKey, FeedDescriptor, GroupedDigest, Headline, RawEntry, DEFAULT_CATEGORY};
