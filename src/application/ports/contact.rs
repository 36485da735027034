// src/application/ports/contact.rs
use crate::domain::{contact::ContactMessage, errors::DomainResult};
use async_trait::async_trait;

#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify(&self, message: &ContactMessage) -> DomainResult<()>;
}
