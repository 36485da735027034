// src/presentation/http/views.rs
use crate::presentation::http::error::{HttpError, HttpResult};
use axum::response::Html;
use std::path::Path;
use tera::{Context, Tera};

/// Tera templates for every page, loaded once at startup.
pub struct PageRenderer {
    tera: Tera,
    site_title: String,
}

impl PageRenderer {
    /// Load every `*.html` template below `dir`.
    pub fn from_dir(dir: &Path, site_title: impl Into<String>) -> Result<Self, tera::Error> {
        let pattern = dir.join("**").join("*.html");
        let tera = Tera::new(&pattern.to_string_lossy())?;
        Ok(Self {
            tera,
            site_title: site_title.into(),
        })
    }

    pub fn site_title(&self) -> &str {
        &self.site_title
    }

    /// Fresh context carrying the values every layout needs.
    pub fn page_context(&self, title: &str) -> Context {
        let mut context = Context::new();
        context.insert("title", title);
        context.insert("site_title", &self.site_title);
        context
    }

    pub fn render(&self, template: &str, context: &Context) -> HttpResult<Html<String>> {
        self.tera.render(template, context).map(Html).map_err(|err| {
            // Tera nests the useful detail in the source chain.
            tracing::error!(template, error = ?err, "template rendering failed");
            HttpError::internal(format!("failed to render {template}"))
        })
    }

    /// Render a page that needs nothing beyond its title.
    pub fn render_page(&self, template: &str, title: &str) -> HttpResult<Html<String>> {
        self.render(template, &self.page_context(title))
    }
}
