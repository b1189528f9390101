use crate::types::{DigestError, GroupedDigest, Headline, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{Datelike, NaiveDate};
use std::fmt::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Markdown digest for one language on one date.
///
/// Rendering is pure; only [`MarkdownDigest::write`] touches the filesystem.
/// The date is always passed in, never read from the clock here.
pub struct MarkdownDigest;

impl MarkdownDigest {
    /// Build the document. Categories come out in lexicographic order because
    /// `GroupedDigest` is ordered; headlines keep their bucket order.
    pub fn render(grouped: &GroupedDigest, lang: &str, date_label: &str) -> String {
        let mut lines = vec![
            format!("# Daily News Digest ({}) – {}", lang, date_label),
            String::new(),
        ];

        for (category, items) in grouped {
            lines.push(format!("## {}", category));
            lines.push(String::new());
            lines.extend(items.iter().map(list_line));
            lines.push(String::new());
        }

        lines.join("\n")
    }

    /// `<root>/<lang>/<year>/<formatted date>.md`
    pub fn path(root: &Path, lang: &str, today: NaiveDate, date_format: &str) -> Result<PathBuf> {
        let label = format_date(today, date_format)?;
        Ok(year_dir(root, lang, today).join(format!("{}.md", label)))
    }

    /// Render and persist, replacing any digest already written for the same
    /// language and date. Returns the written path.
    pub async fn write(
        grouped: &GroupedDigest,
        lang: &str,
        date_format: &str,
        root: &Path,
        today: NaiveDate,
    ) -> Result<PathBuf> {
        let label = format_date(today, date_format)?;
        let path = Self::path(root, lang, today, date_format)?;
        if let Some(dir) = path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|source| DigestError::Io {
                    path: dir.to_path_buf(),
                    source,
                })?;
        }

        let content = Self::render(grouped, lang, &label);
        tokio::fs::write(&path, content.as_bytes())
            .await
            .map_err(|source| DigestError::Io {
                path: path.clone(),
                source,
            })?;

        info!(
            "Wrote {} digest with {} categories to {}",
            lang,
            grouped.len(),
            path.display()
        );
        Ok(path)
    }
}

fn list_line(item: &Headline) -> String {
    format!("- [{}] {} ([link]({}))", item.source_name, item.title, item.link)
}

fn year_dir(root: &Path, lang: &str, today: NaiveDate) -> PathBuf {
    root.join(lang).join(today.year().to_string())
}

/// Format `date` with a strftime pattern. Patterns chrono can't render for a
/// plain date (bad specifiers, time fields) and labels that would not make a
/// single file name are rejected.
pub fn format_date(date: NaiveDate, date_format: &str) -> Result<String> {
    let invalid = |reason: &str| DigestError::InvalidDateFormat {
        format: date_format.to_string(),
        reason: reason.to_string(),
    };

    let items: Vec<Item> = StrftimeItems::new(date_format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(invalid("unrecognized specifier"));
    }

    let mut label = String::new();
    write!(label, "{}", date.format_with_items(items.iter()))
        .map_err(|_| invalid("specifier not available for a date"))?;

    if label.trim().is_empty() {
        return Err(invalid("renders to an empty file name"));
    }
    if label.contains(['/', '\\']) {
        return Err(invalid("renders to a path separator"));
    }

    debug!("Formatted {} with {:?} as {}", date, date_format, label);
    Ok(label)
}
