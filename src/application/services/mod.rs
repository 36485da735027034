// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::contact::ContactCommandService,
        ports::{contact::ContactNotifier, markdown::MarkdownProcessor},
        queries::{articles::ArticleQueryService, events::EventQueryService},
    },
    domain::{article::ArticleSource, event::EventSource},
};

pub struct ApplicationServices {
    pub article_queries: Arc<ArticleQueryService>,
    pub event_queries: Arc<EventQueryService>,
    pub contact_commands: Arc<ContactCommandService>,
}

impl ApplicationServices {
    pub fn new(
        article_source: Arc<dyn ArticleSource>,
        event_source: Arc<dyn EventSource>,
        markdown: Arc<dyn MarkdownProcessor>,
        contact_notifier: Arc<dyn ContactNotifier>,
    ) -> Self {
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_source),
            Arc::clone(&markdown),
        ));
        let event_queries = Arc::new(EventQueryService::new(Arc::clone(&event_source)));
        let contact_commands = Arc::new(ContactCommandService::new(Arc::clone(
            &contact_notifier,
        )));

        Self {
            article_queries,
            event_queries,
            contact_commands,
        }
    }
}
