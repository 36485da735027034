use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Routable identifier of an article: its file name without the extension.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleSlug(String);

impl ArticleSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        // The slug is joined onto the articles directory, so it must stay a
        // single plain path segment. A leading dot also covers `.` and `..`.
        if value.starts_with('.') || value.contains(['/', '\\', '\0']) {
            return Err(DomainError::Validation(format!(
                "slug is not a plain file name: {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Human readable title: hyphens become spaces.
    pub fn title(&self) -> String {
        self.0.replace('-', " ")
    }

    pub fn file_name(&self) -> String {
        format!("{}.md", self.0)
    }
}

impl fmt::Display for ArticleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleSlug> for String {
    fn from(value: ArticleSlug) -> Self {
        value.0
    }
}

/// Kind of a top-level markdown block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading,
    Paragraph,
    List,
    BlockQuote,
    CodeBlock,
    Html,
    Rule,
    Table,
    Other,
}

/// A top-level markdown block together with the source text it spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockToken {
    pub kind: BlockKind,
    pub raw: String,
}

impl BlockToken {
    pub fn new(kind: BlockKind, raw: impl Into<String>) -> Self {
        Self {
            kind,
            raw: raw.into(),
        }
    }

    pub fn is_paragraph(&self) -> bool {
        self.kind == BlockKind::Paragraph
    }
}
