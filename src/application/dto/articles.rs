use crate::domain::article::ArticlePreview;
use serde::{Deserialize, Serialize};

/// Listing entry handed to the news and home templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePreviewDto {
    pub display_name: String,
    pub preview_text: String,
    pub link: String,
    pub display_date: String,
}

impl From<ArticlePreview> for ArticlePreviewDto {
    fn from(preview: ArticlePreview) -> Self {
        Self {
            display_name: preview.display_name,
            preview_text: preview.preview_text,
            link: preview.link,
            display_date: preview.display_date,
        }
    }
}

/// A fully rendered article page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticlePageDto {
    pub title: String,
    pub slug: String,
    /// Rendered HTML, already safe to embed.
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_template_field_names() {
        let dto = ArticlePreviewDto {
            display_name: "my article".into(),
            preview_text: "Hello...".into(),
            link: "my-article".into(),
            display_date: "1 March 2023".into(),
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["displayName"], "my article");
        assert_eq!(value["previewText"], "Hello...");
        assert_eq!(value["link"], "my-article");
        assert_eq!(value["displayDate"], "1 March 2023");
    }
}
