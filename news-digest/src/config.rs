use crate::types::{DigestError, FeedDescriptor, FetchConfig, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_MAX_PER_FEED: usize = 30;
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
pub const DEFAULT_DIGEST_ROOT: &str = "digests";
pub const DEFAULT_LANGUAGES: [&str; 2] = ["en", "ko"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DigestConfig {
    #[serde(default)]
    pub feeds: Vec<FeedDescriptor>,
    #[serde(default = "default_max_per_feed")]
    pub max_per_feed: usize,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_digest_root")]
    pub digest_root: PathBuf,
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    #[serde(default)]
    pub fetch: FetchConfig,
}

fn default_max_per_feed() -> usize {
    DEFAULT_MAX_PER_FEED
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_digest_root() -> PathBuf {
    PathBuf::from(DEFAULT_DIGEST_ROOT)
}

fn default_languages() -> Vec<String> {
    DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect()
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            feeds: Vec::new(),
            max_per_feed: DEFAULT_MAX_PER_FEED,
            date_format: default_date_format(),
            digest_root: default_digest_root(),
            languages: default_languages(),
            fetch: FetchConfig::default(),
        }
    }
}

impl DigestConfig {
    /// Feeds tagged with `lang`, in configured order.
    pub fn feeds_for(&self, lang: &str) -> Vec<FeedDescriptor> {
        self.feeds
            .iter()
            .filter(|f| f.matches_lang(lang))
            .cloned()
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_per_feed == 0 {
            return Err(DigestError::InvalidConfig(
                "max_per_feed must be at least 1".to_string(),
            ));
        }
        if self.fetch.timeout_seconds == 0 {
            return Err(DigestError::InvalidConfig(
                "fetch.timeout_seconds must be at least 1".to_string(),
            ));
        }
        if let Some(lang) = self.languages.iter().find(|l| l.trim().is_empty()) {
            return Err(DigestError::InvalidConfig(format!(
                "empty language code in languages: {:?}",
                lang
            )));
        }
        Ok(())
    }
}

/// Load a config file. The extension picks the format: `.json`, `.toml`,
/// anything else is read as YAML.
pub fn load_config(path: &Path) -> Result<DigestConfig> {
    let content = fs::read_to_string(path).map_err(|source| DigestError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let config = parse_config(&content, &ext).map_err(|message| DigestError::ConfigFormat {
        path: path.to_path_buf(),
        message,
    })?;
    config.validate()?;

    debug!(
        "Loaded config from {} ({} feeds)",
        path.display(),
        config.feeds.len()
    );
    Ok(config)
}

fn parse_config(s: &str, hint_ext: &str) -> std::result::Result<DigestConfig, String> {
    match hint_ext {
        "json" => serde_json::from_str(s).map_err(|e| e.to_string()),
        "toml" => toml::from_str(s).map_err(|e| e.to_string()),
        _ => parse_yaml(s),
    }
}

fn parse_yaml(s: &str) -> std::result::Result<DigestConfig, String> {
    // An empty YAML document is a config with nothing in it
    if s.trim().is_empty() {
        return Ok(DigestConfig::default());
    }
    serde_yaml::from_str(s).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = r#"
feeds:
  - id: bbc
    name: BBC News
    url: https://feeds.bbci.co.uk/news/rss.xml
    lang: en
    category: World
  - id: yonhap
    name: Yonhap
    url: https://www.yna.co.kr/rss/news.xml
    lang: ko
  - id: blank
    name: Blank Category
    url: https://example.com/rss
    lang: en
    category: ""
"#;

    #[test]
    fn yaml_defaults_are_applied() {
        let cfg = parse_config(YAML, "yml").unwrap();
        assert_eq!(cfg.feeds.len(), 3);
        assert_eq!(cfg.max_per_feed, 30);
        assert_eq!(cfg.date_format, "%Y-%m-%d");
        assert_eq!(cfg.digest_root, PathBuf::from("digests"));
        assert_eq!(cfg.languages, vec!["en".to_string(), "ko".to_string()]);
        assert_eq!(cfg.fetch, FetchConfig::default());
    }

    #[test]
    fn category_defaults_only_when_key_is_absent() {
        let cfg = parse_config(YAML, "yaml").unwrap();
        assert_eq!(cfg.feeds[0].category(), "World");
        assert_eq!(cfg.feeds[1].category(), "Uncategorized");
        assert_eq!(cfg.feeds[2].category(), "");
    }

    #[test]
    fn feeds_for_filters_by_language_in_order() {
        let cfg = parse_config(YAML, "yml").unwrap();
        let en: Vec<_> = cfg.feeds_for("en").into_iter().map(|f| f.id).collect();
        assert_eq!(en, vec!["bbc".to_string(), "blank".to_string()]);
        assert!(cfg.feeds_for("fr").is_empty());
    }

    #[test]
    fn json_and_toml_are_accepted() {
        let json = r#"{"feeds": [{"id": "a", "name": "A", "url": "https://a.test/rss", "lang": "en"}], "max_per_feed": 5}"#;
        let cfg = parse_config(json, "json").unwrap();
        assert_eq!(cfg.max_per_feed, 5);

        let toml = r#"
date_format = "%d.%m.%Y"

[[feeds]]
id = "a"
name = "A"
url = "https://a.test/rss"
lang = "ko"
"#;
        let cfg = parse_config(toml, "toml").unwrap();
        assert_eq!(cfg.date_format, "%d.%m.%Y");
        assert_eq!(cfg.feeds[0].lang.as_deref(), Some("ko"));
    }

    #[test]
    fn zero_max_per_feed_is_rejected() {
        let cfg = parse_config("max_per_feed: 0\n", "yml").unwrap();
        assert!(matches!(cfg.validate(), Err(DigestError::InvalidConfig(_))));
    }

    #[test]
    fn zero_fetch_timeout_is_rejected() {
        let cfg = parse_config("fetch:\n  timeout_seconds: 0\n", "yml").unwrap();
        assert!(matches!(cfg.validate(), Err(DigestError::InvalidConfig(_))));
    }

    #[test]
    fn feed_without_lang_matches_no_language() {
        let yaml = r#"
feeds:
  - id: untagged
    name: Untagged
    url: https://untagged.test/rss
"#;
        let cfg = parse_config(yaml, "yml").unwrap();
        assert_eq!(cfg.feeds[0].lang, None);
        assert!(cfg.feeds_for("").is_empty());
        assert!(cfg.feeds_for("en").is_empty());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = load_config(Path::new("/definitely/not/here/config.yml")).unwrap_err();
        assert!(matches!(err, DigestError::Config { .. }));
    }

    #[test]
    fn load_reports_malformed_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        fs::write(&path, "feeds: [ {id: a").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, DigestError::ConfigFormat { .. }));
    }
}
