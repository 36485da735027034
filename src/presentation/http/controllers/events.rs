use crate::presentation::http::error::HttpResult;
use crate::presentation::http::state::HttpState;
use axum::{Extension, response::Html};

pub async fn list_events(Extension(state): Extension<HttpState>) -> HttpResult<Html<String>> {
    let events = state.services.event_queries.upcoming_events().await;

    let mut context = state.views.page_context("Upcoming Events");
    context.insert("events", &events);
    state.views.render("events.html", &context)
}
