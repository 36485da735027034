pub mod entity;
pub mod preview;
pub mod repository;
pub mod value_objects;

pub use entity::{ArticleFile, ArticlePreview};
pub use preview::{PreviewOutcome, SkipReason, preview_article, strip_byte_order_mark};
pub use repository::ArticleSource;
pub use value_objects::{ArticleSlug, BlockKind, BlockToken};
