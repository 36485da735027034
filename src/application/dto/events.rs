use crate::domain::event::EventRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDto {
    pub name: String,
    pub location: String,
    pub time: String,
}

impl From<EventRecord> for EventDto {
    fn from(event: EventRecord) -> Self {
        Self {
            name: event.name,
            location: event.location,
            time: event.time,
        }
    }
}
