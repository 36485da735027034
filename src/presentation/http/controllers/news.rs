// src/presentation/http/controllers/news.rs
use crate::application::queries::articles::{GetArticleBySlugQuery, ListArticlePreviewsQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, extract::Path, response::Html};

pub async fn list_news(Extension(state): Extension<HttpState>) -> HttpResult<Html<String>> {
    let previews = state
        .services
        .article_queries
        .list_previews(ListArticlePreviewsQuery { limit: None })
        .await
        .into_http()?;

    let mut context = state.views.page_context("News");
    context.insert("previewArticles", &previews);
    state.views.render("news.html", &context)
}

pub async fn show_article(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Html<String>> {
    let article = state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery { slug })
        .await
        .into_http()?;

    let mut context = state.views.page_context(&article.title);
    context.insert("slug", &article.slug);
    context.insert("content", &article.content);
    state.views.render("article.html", &context)
}
