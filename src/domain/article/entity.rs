// src/domain/article/entity.rs
use chrono::{DateTime, Utc};

/// Date format used on listing pages, e.g. `5 March 2023`.
const DISPLAY_DATE_FORMAT: &str = "%-d %B %Y";

/// One article file as found in the content source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFile {
    pub name: String,
    pub modified_at: DateTime<Utc>,
}

impl ArticleFile {
    pub fn new(name: impl Into<String>, modified_at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            modified_at,
        }
    }

    /// File name without its extension. Names without an extension (or
    /// dot-files) are returned unchanged.
    pub fn stem(&self) -> &str {
        match self.name.rfind('.') {
            Some(idx) if idx > 0 => &self.name[..idx],
            _ => &self.name,
        }
    }

    pub fn display_name(&self) -> String {
        self.stem().replace('-', " ")
    }

    pub fn link(&self) -> &str {
        self.stem()
    }

    pub fn display_date(&self) -> String {
        self.modified_at.format(DISPLAY_DATE_FORMAT).to_string()
    }

    /// Sort newest-first by modification time.
    pub fn newest_first(mut files: Vec<Self>) -> Vec<Self> {
        files.sort_by(|a, b| b.modified_at.cmp(&a.modified_at));
        files
    }
}

/// Listing-page projection of an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticlePreview {
    pub display_name: String,
    pub preview_text: String,
    pub link: String,
    pub display_date: String,
}

impl ArticlePreview {
    pub fn new(file: &ArticleFile, preview_text: String) -> Self {
        Self {
            display_name: file.display_name(),
            preview_text,
            link: file.link().to_string(),
            display_date: file.display_date(),
        }
    }
}
