use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticlePageDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleSlug, strip_byte_order_mark},
};

pub struct GetArticleBySlugQuery {
    pub slug: String,
}

impl ArticleQueryService {
    pub async fn get_article_by_slug(
        &self,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<ArticlePageDto> {
        let not_found = || ApplicationError::not_found(format!("Article not found: {}", query.slug));

        // A slug that cannot name a file simply does not exist.
        let slug = ArticleSlug::new(query.slug.as_str()).map_err(|_| not_found())?;
        let markdown = self
            .source
            .find_by_slug(&slug)
            .await?
            .ok_or_else(not_found)?;

        Ok(ArticlePageDto {
            title: slug.title(),
            content: self.markdown.to_html(strip_byte_order_mark(&markdown)),
            slug: slug.into_inner(),
        })
    }
}
