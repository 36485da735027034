// src/presentation/http/controllers/pages.rs
use crate::application::queries::articles::ListArticlePreviewsQuery;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension,
    response::{Html, Redirect},
};

pub async fn home(Extension(state): Extension<HttpState>) -> HttpResult<Html<String>> {
    let previews = state
        .services
        .article_queries
        .list_previews(ListArticlePreviewsQuery {
            limit: Some(state.home_preview_limit),
        })
        .await
        .into_http()?;

    let mut context = state.views.page_context(state.views.site_title());
    context.insert("previewArticles", &previews);
    state.views.render("home.html", &context)
}

pub async fn about(Extension(state): Extension<HttpState>) -> HttpResult<Html<String>> {
    state.views.render_page("about.html", "About the Trust")
}

pub async fn services(Extension(state): Extension<HttpState>) -> HttpResult<Html<String>> {
    state.views.render_page("services.html", "Our Services")
}

pub async fn employment_support(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Html<String>> {
    state
        .views
        .render_page("employment-support.html", "Employment Support")
}

pub async fn newsletter(Extension(state): Extension<HttpState>) -> HttpResult<Html<String>> {
    state.views.render_page("newsletter.html", "Newsletter")
}

/// Anything not matched by a route or a static asset goes back home.
pub async fn redirect_home() -> Redirect {
    Redirect::to("/")
}
