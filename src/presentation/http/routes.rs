// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{contact, events, news, pages};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, Router, handler::HandlerWithoutStateExt, routing::get};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Site routes, with static assets from `public_dir` behind them. Requests
/// that match neither are redirected to the home page.
pub fn build_router(state: HttpState, public_dir: &Path) -> Router {
    let assets = ServeDir::new(public_dir).fallback(pages::redirect_home.into_service());

    Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/services", get(pages::services))
        .route("/employment-support", get(pages::employment_support))
        .route(
            "/contact",
            get(contact::show_contact).post(contact::submit_contact),
        )
        .route("/newsletter", get(pages::newsletter))
        .route("/news", get(news::list_news))
        .route("/news/{slug}", get(news::show_article))
        .route("/events", get(events::list_events))
        .route("/health", get(health))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(Extension(state))
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
