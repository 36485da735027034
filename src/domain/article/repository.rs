use crate::domain::article::entity::ArticleFile;
use crate::domain::article::value_objects::ArticleSlug;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Where article files come from. Implementations read fresh on every call;
/// ordering is applied by the caller.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Every article in the source. Fails with `NotFound` when the source
    /// itself is missing.
    async fn list_articles(&self) -> DomainResult<Vec<ArticleFile>>;

    /// Full text of a listed article.
    async fn read_article(&self, name: &str) -> DomainResult<String>;

    /// Markdown of the article addressed by `slug`, `None` if there is none.
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<String>>;
}
