pub mod entity;
pub mod repository;

pub use entity::EventRecord;
pub use repository::EventSource;
