// src/application/ports/markdown.rs
use crate::domain::article::BlockToken;

/// Markdown engine shared by the preview and full-article paths.
pub trait MarkdownProcessor: Send + Sync {
    /// Top-level blocks of `markdown`, in document order.
    fn block_tokens(&self, markdown: &str) -> Vec<BlockToken>;

    /// Whole-document conversion to HTML.
    fn to_html(&self, markdown: &str) -> String;
}
