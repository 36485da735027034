// src/application/queries/events.rs
use crate::application::dto::EventDto;
use crate::domain::event::EventSource;
use std::sync::Arc;

pub struct EventQueryService {
    source: Arc<dyn EventSource>,
}

impl EventQueryService {
    pub fn new(source: Arc<dyn EventSource>) -> Self {
        Self { source }
    }

    /// Upcoming events in file order. An unreadable events file is logged and
    /// rendered as an empty listing.
    pub async fn upcoming_events(&self) -> Vec<EventDto> {
        match self.source.upcoming_events().await {
            Ok(events) => events.into_iter().map(Into::into).collect(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load events");
                Vec::new()
            }
        }
    }
}
