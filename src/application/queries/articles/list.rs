use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticlePreviewDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleFile, PreviewOutcome, SkipReason, preview_article},
        errors::DomainError,
    },
};

pub struct ListArticlePreviewsQuery {
    /// Stop after this many previews; skipped articles do not count.
    pub limit: Option<usize>,
}

impl ArticleQueryService {
    /// Every article in the source, most recently modified first.
    pub async fn list_articles(&self) -> ApplicationResult<Vec<ArticleFile>> {
        let files = self.source.list_articles().await.map_err(|err| match err {
            DomainError::NotFound(msg) => {
                ApplicationError::infrastructure(format!("article directory unavailable: {msg}"))
            }
            other => ApplicationError::from(other),
        })?;
        Ok(ArticleFile::newest_first(files))
    }

    pub async fn list_previews(
        &self,
        query: ListArticlePreviewsQuery,
    ) -> ApplicationResult<Vec<ArticlePreviewDto>> {
        let files = self.list_articles().await?;
        let limit = query.limit.unwrap_or(usize::MAX);

        let mut previews = Vec::new();
        for file in files {
            if previews.len() >= limit {
                break;
            }
            match self.preview_file(&file).await {
                PreviewOutcome::Found(preview) => previews.push(preview.into()),
                PreviewOutcome::Skipped(SkipReason::EmptyContent) => {
                    tracing::info!(article = %file.name, "article is empty, skipping");
                }
                PreviewOutcome::Skipped(reason) => {
                    tracing::warn!(article = %file.name, %reason, "skipping article preview");
                }
            }
        }

        Ok(previews)
    }

    /// Preview a single listed file. Read failures are reported as a skip so
    /// one bad file never fails a whole listing.
    pub async fn preview_file(&self, file: &ArticleFile) -> PreviewOutcome {
        match self.source.read_article(&file.name).await {
            Ok(content) => {
                preview_article(file, &content, |text| self.markdown.block_tokens(text))
            }
            Err(err) => PreviewOutcome::Skipped(SkipReason::Unreadable(err.to_string())),
        }
    }
}
