// tests/support/helpers.rs
use std::path::PathBuf;
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use tower::util::ServiceExt as _;

use bridges_site::application::ports::{contact::ContactNotifier, markdown::MarkdownProcessor};
use bridges_site::application::services::ApplicationServices;
use bridges_site::config::AppConfig;
use bridges_site::domain::article::ArticleSource;
use bridges_site::domain::event::EventSource;
use bridges_site::infrastructure::{
    contact::LogContactNotifier,
    content::{CsvEventSource, FsArticleSource},
    markdown::PulldownMarkdown,
};
use bridges_site::presentation::http::{
    routes::build_router, state::HttpState, views::PageRenderer,
};

use super::builders::SiteFixture;

pub const HOME_PREVIEW_LIMIT: usize = 4;

pub fn templates_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates")
}

pub fn build_state(
    article_source: Arc<dyn ArticleSource>,
    event_source: Arc<dyn EventSource>,
    notifier: Arc<dyn ContactNotifier>,
) -> HttpState {
    let markdown: Arc<dyn MarkdownProcessor> = Arc::new(PulldownMarkdown);
    let services = Arc::new(ApplicationServices::new(
        article_source,
        event_source,
        markdown,
        notifier,
    ));
    let views = PageRenderer::from_dir(&templates_dir(), "The Bridges Community Trust")
        .expect("templates load");

    HttpState {
        services,
        views: Arc::new(views),
        home_preview_limit: HOME_PREVIEW_LIMIT,
    }
}

/// Configuration for a fixture checkout, with the crate's own templates.
pub fn site_config(site: &SiteFixture) -> AppConfig {
    AppConfig::with_root(site.root()).with_templates_dir(templates_dir())
}

/// Router over a fixture directory with the real filesystem sources, wired
/// from configuration the way the binary wires it.
pub fn make_site_router(site: &SiteFixture) -> axum::Router {
    let config = site_config(site);
    let markdown: Arc<dyn MarkdownProcessor> = Arc::new(PulldownMarkdown);
    let services = Arc::new(ApplicationServices::new(
        Arc::new(FsArticleSource::new(config.articles_dir().clone())),
        Arc::new(CsvEventSource::new(config.events_file().clone())),
        markdown,
        Arc::new(LogContactNotifier),
    ));
    let views = PageRenderer::from_dir(config.templates_dir(), config.site_title())
        .expect("templates load");

    let state = HttpState {
        services,
        views: Arc::new(views),
        home_preview_limit: config.home_preview_limit(),
    };
    build_router(state, config.public_dir())
}

pub async fn get(app: &axum::Router, uri: &str) -> Response {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

pub async fn post_form(app: &axum::Router, uri: &str, form: &str) -> Response {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

pub async fn body_string(resp: Response) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// Assert the status and return the body text.
pub async fn expect_status(resp: Response, expected: StatusCode) -> String {
    let status = resp.status();
    let body = body_string(resp).await;
    assert_eq!(status, expected, "unexpected status, body: {body}");
    body
}
