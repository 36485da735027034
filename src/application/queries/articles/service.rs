use std::sync::Arc;

use crate::application::ports::markdown::MarkdownProcessor;
use crate::domain::article::ArticleSource;

pub struct ArticleQueryService {
    pub(super) source: Arc<dyn ArticleSource>,
    pub(super) markdown: Arc<dyn MarkdownProcessor>,
}

impl ArticleQueryService {
    pub fn new(source: Arc<dyn ArticleSource>, markdown: Arc<dyn MarkdownProcessor>) -> Self {
        Self { source, markdown }
    }
}
