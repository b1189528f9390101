use serde::Deserialize;
use std::collections::BTreeMap;

pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// One configured feed. Read-only input to a run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedDescriptor {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl FeedDescriptor {
    /// Falls back to "Uncategorized" only when the key is absent. An explicit
    /// empty string stays empty.
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }

    /// A descriptor without a language never matches, and neither does an
    /// empty target.
    pub fn matches_lang(&self, lang: &str) -> bool {
        !lang.is_empty() && self.lang.as_deref() == Some(lang)
    }
}

/// Raw item yielded by a feed source, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEntry {
    pub title: Option<String>,
    pub link: Option<String>,
}

impl RawEntry {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            link: Some(link.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headline {
    pub source_id: String,
    pub source_name: String,
    pub lang: String,
    pub category: String,
    pub title: String,
    pub link: String,
}

pub type DedupKey = (String, String, String);

impl Headline {
    /// Normalizes an entry for the given feed. Returns `None` when the trimmed
    /// title is empty, so a headline without a title never exists.
    pub fn from_entry(feed: &FeedDescriptor, entry: &RawEntry) -> Option<Self> {
        let title = entry.title.as_deref().unwrap_or("").trim();
        if title.is_empty() {
            return None;
        }
        let link = entry.link.as_deref().unwrap_or("").trim();

        Some(Self {
            source_id: feed.id.clone(),
            source_name: feed.name.clone(),
            lang: feed.lang.clone().unwrap_or_default(),
            category: feed.category().to_owned(),
            title: title.to_owned(),
            link: link.to_owned(),
        })
    }

    pub fn dedup_key(&self) -> DedupKey {
        (
            self.lang.clone(),
            self.category.clone(),
            self.title.to_lowercase(),
        )
    }
}

/// Headlines bucketed by category. Iterates in lexicographic category order.
pub type GroupedDigest = BTreeMap<String, Vec<Headline>>;

// Object style note:
// Everything here lives for a single short batch run. Types are plain data,
// built once per language and dropped when that language's digest is written.
