//! Markdown handling backed by pulldown-cmark.
//!
//! Block tokens are the top-level `Start` events of the parser, paired with
//! the slice of source they span, so callers can inspect the raw text of a
//! paragraph (e.g. whether it opens with an image) before any rendering.

use crate::application::ports::markdown::MarkdownProcessor;
use crate::domain::article::{BlockKind, BlockToken};
use pulldown_cmark::{Event, Options, Parser, Tag, html::push_html};

#[derive(Debug, Default, Clone)]
pub struct PulldownMarkdown;

fn parser_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

fn block_kind(tag: &Tag<'_>) -> BlockKind {
    match tag {
        Tag::Paragraph => BlockKind::Paragraph,
        Tag::Heading { .. } => BlockKind::Heading,
        Tag::BlockQuote { .. } => BlockKind::BlockQuote,
        Tag::CodeBlock(_) => BlockKind::CodeBlock,
        Tag::HtmlBlock { .. } => BlockKind::Html,
        Tag::List(_) => BlockKind::List,
        Tag::Table(_) => BlockKind::Table,
        _ => BlockKind::Other,
    }
}

impl MarkdownProcessor for PulldownMarkdown {
    fn block_tokens(&self, markdown: &str) -> Vec<BlockToken> {
        let mut tokens = Vec::new();
        let mut depth = 0usize;

        for (event, range) in Parser::new_ext(markdown, parser_options()).into_offset_iter() {
            match event {
                Event::Start(tag) => {
                    if depth == 0 {
                        tokens.push(BlockToken::new(block_kind(&tag), &markdown[range]));
                    }
                    depth += 1;
                }
                Event::End(_) => depth = depth.saturating_sub(1),
                Event::Rule if depth == 0 => {
                    tokens.push(BlockToken::new(BlockKind::Rule, &markdown[range]));
                }
                _ => {}
            }
        }

        tokens
    }

    fn to_html(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, parser_options());
        let mut html = String::with_capacity(markdown.len() * 2);
        push_html(&mut html, parser);
        html
    }
}
