pub mod articles;
pub mod error;
pub mod events;

pub use articles::FsArticleSource;
pub use events::CsvEventSource;
