use crate::domain::errors::DomainResult;
use crate::domain::event::entity::EventRecord;
use async_trait::async_trait;

#[async_trait]
pub trait EventSource: Send + Sync {
    /// Events in file order.
    async fn upcoming_events(&self) -> DomainResult<Vec<EventRecord>>;
}
