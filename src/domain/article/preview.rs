// src/domain/article/preview.rs
use crate::domain::article::entity::{ArticleFile, ArticlePreview};
use crate::domain::article::value_objects::BlockToken;
use std::fmt;

/// Maximum number of characters kept from the preview paragraph.
pub const PREVIEW_CHAR_BUDGET: usize = 75;
/// Always appended to the preview, truncated or not.
pub const PREVIEW_ELLIPSIS: &str = "...";

const IMAGE_MARKER: &str = "![";
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Why an article produced no preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    EmptyContent,
    NoPreviewAvailable,
    Unreadable(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyContent => f.write_str("article is empty"),
            Self::NoPreviewAvailable => f.write_str("article has no text paragraph"),
            Self::Unreadable(reason) => write!(f, "article could not be read: {reason}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewOutcome {
    Found(ArticlePreview),
    Skipped(SkipReason),
}

impl PreviewOutcome {
    pub fn found(self) -> Option<ArticlePreview> {
        match self {
            Self::Found(preview) => Some(preview),
            Self::Skipped(_) => None,
        }
    }
}

/// First paragraph that is not an image reference.
pub fn select_preview_paragraph(tokens: &[BlockToken]) -> Option<&str> {
    tokens
        .iter()
        .find(|token| token.is_paragraph() && !token.raw.starts_with(IMAGE_MARKER))
        .map(|token| token.raw.as_str())
}

pub fn truncate_preview(text: &str) -> String {
    let mut preview: String = text.trim().chars().take(PREVIEW_CHAR_BUDGET).collect();
    preview.push_str(PREVIEW_ELLIPSIS);
    preview
}

/// Drop a leading UTF-8 byte-order mark, which `str::trim` keeps.
pub fn strip_byte_order_mark(content: &str) -> &str {
    content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content)
}

/// Build the preview for one article. `tokenize` is only invoked for
/// non-blank content.
pub fn preview_article<F>(file: &ArticleFile, content: &str, tokenize: F) -> PreviewOutcome
where
    F: FnOnce(&str) -> Vec<BlockToken>,
{
    let content = strip_byte_order_mark(content);
    if content.trim().is_empty() {
        return PreviewOutcome::Skipped(SkipReason::EmptyContent);
    }

    let tokens = tokenize(content);
    match select_preview_paragraph(&tokens) {
        Some(text) => PreviewOutcome::Found(ArticlePreview::new(file, truncate_preview(text))),
        None => PreviewOutcome::Skipped(SkipReason::NoPreviewAvailable),
    }
}
