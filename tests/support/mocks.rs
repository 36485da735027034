// tests/support/mocks.rs
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use bridges_site::application::ports::contact::ContactNotifier;
use bridges_site::domain::article::{ArticleFile, ArticleSlug, ArticleSource};
use bridges_site::domain::contact::ContactMessage;
use bridges_site::domain::errors::{DomainError, DomainResult};
use bridges_site::domain::event::{EventRecord, EventSource};

/// Article source held in memory. Files listed in `unreadable` are listed
/// but fail to read, like a file deleted between listing and reading.
#[derive(Default)]
pub struct InMemoryArticleSource {
    files: Vec<(ArticleFile, String)>,
    unreadable: Vec<String>,
}

impl InMemoryArticleSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, modified_at: DateTime<Utc>, content: &str) -> Self {
        self.files
            .push((ArticleFile::new(name, modified_at), content.to_string()));
        self
    }

    pub fn with_unreadable(mut self, name: &str, modified_at: DateTime<Utc>) -> Self {
        self.files.push((ArticleFile::new(name, modified_at), String::new()));
        self.unreadable.push(name.to_string());
        self
    }
}

#[async_trait]
impl ArticleSource for InMemoryArticleSource {
    async fn list_articles(&self) -> DomainResult<Vec<ArticleFile>> {
        Ok(self.files.iter().map(|(file, _)| file.clone()).collect())
    }

    async fn read_article(&self, name: &str) -> DomainResult<String> {
        if self.unreadable.iter().any(|n| n == name) {
            return Err(DomainError::Io(format!("{name}: permission denied")));
        }
        self.files
            .iter()
            .find(|(file, _)| file.name == name)
            .map(|(_, content)| content.clone())
            .ok_or_else(|| DomainError::NotFound(name.to_string()))
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<String>> {
        let wanted = slug.file_name();
        Ok(self
            .files
            .iter()
            .find(|(file, _)| file.name == wanted)
            .map(|(_, content)| content.clone()))
    }
}

/// Source whose directory has gone missing.
pub struct MissingArticleSource;

#[async_trait]
impl ArticleSource for MissingArticleSource {
    async fn list_articles(&self) -> DomainResult<Vec<ArticleFile>> {
        Err(DomainError::NotFound("data/articles".into()))
    }

    async fn read_article(&self, name: &str) -> DomainResult<String> {
        Err(DomainError::NotFound(name.to_string()))
    }

    async fn find_by_slug(&self, _slug: &ArticleSlug) -> DomainResult<Option<String>> {
        Ok(None)
    }
}

pub struct StaticEventSource(pub Vec<EventRecord>);

#[async_trait]
impl EventSource for StaticEventSource {
    async fn upcoming_events(&self) -> DomainResult<Vec<EventRecord>> {
        Ok(self.0.clone())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<ContactMessage>>,
}

#[async_trait]
impl ContactNotifier for RecordingNotifier {
    async fn notify(&self, message: &ContactMessage) -> DomainResult<()> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

pub fn counts_by_name(files: &[ArticleFile]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for file in files {
        *counts.entry(file.name.clone()).or_insert(0) += 1;
    }
    counts
}
