// src/config.rs
use std::{env, path::PathBuf};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    articles_dir: PathBuf,
    events_file: PathBuf,
    public_dir: PathBuf,
    templates_dir: PathBuf,
    home_preview_limit: usize,
    site_title: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:3000".into()
}

fn default_home_preview_limit() -> usize {
    4
}

fn default_site_title() -> String {
    "The Bridges Community Trust".into()
}

fn path_var(key: &str, default: &str) -> PathBuf {
    env::var(key).map_or_else(|_| PathBuf::from(default), PathBuf::from)
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to the
    /// repository layout (`./data`, `./public`, `./templates`).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());

        let home_preview_limit = match env::var("HOME_PREVIEW_LIMIT") {
            Ok(raw) => match raw.trim().parse::<usize>() {
                Ok(0) | Err(_) => {
                    return Err(ConfigError::Invalid(format!(
                        "HOME_PREVIEW_LIMIT must be a positive integer, got {raw:?}"
                    )));
                }
                Ok(limit) => limit,
            },
            Err(_) => default_home_preview_limit(),
        };

        let site_title = env::var("SITE_TITLE").unwrap_or_else(|_| default_site_title());

        Ok(Self {
            listen_addr,
            articles_dir: path_var("ARTICLES_DIR", "./data/articles"),
            events_file: path_var("EVENTS_FILE", "./data/events.csv"),
            public_dir: path_var("PUBLIC_DIR", "./public"),
            templates_dir: path_var("TEMPLATES_DIR", "./templates"),
            home_preview_limit,
            site_title,
        })
    }

    /// Configuration for a site checkout at `root`, defaults for everything
    /// else.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            listen_addr: default_listen_addr(),
            articles_dir: root.join("data/articles"),
            events_file: root.join("data/events.csv"),
            public_dir: root.join("public"),
            templates_dir: root.join("templates"),
            home_preview_limit: default_home_preview_limit(),
            site_title: default_site_title(),
        }
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn articles_dir(&self) -> &PathBuf {
        &self.articles_dir
    }

    pub fn events_file(&self) -> &PathBuf {
        &self.events_file
    }

    pub fn public_dir(&self) -> &PathBuf {
        &self.public_dir
    }

    pub fn templates_dir(&self) -> &PathBuf {
        &self.templates_dir
    }

    pub fn home_preview_limit(&self) -> usize {
        self.home_preview_limit
    }

    pub fn site_title(&self) -> &str {
        &self.site_title
    }

    #[must_use]
    pub fn with_templates_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.templates_dir = dir.into();
        self
    }
}
