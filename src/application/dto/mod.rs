pub mod articles;
pub mod events;

pub use articles::{ArticlePageDto, ArticlePreviewDto};
pub use events::EventDto;
