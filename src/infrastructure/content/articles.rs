// src/infrastructure/content/articles.rs
use super::error::map_io;
use crate::domain::article::{ArticleFile, ArticleSlug, ArticleSource};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::io;
use std::path::PathBuf;
use tokio::fs;

const ARTICLE_EXTENSION: &str = ".md";

/// Articles stored as markdown files in one flat directory.
#[derive(Debug, Clone)]
pub struct FsArticleSource {
    dir: PathBuf,
}

impl FsArticleSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    async fn describe_entry(&self, entry: &fs::DirEntry) -> DomainResult<Option<ArticleFile>> {
        let path = entry.path();
        let Some(name) = entry.file_name().to_str().map(ToOwned::to_owned) else {
            tracing::warn!(path = %path.display(), "ignoring article with non UTF-8 name");
            return Ok(None);
        };
        // Only files reachable through `find_by_slug` are articles.
        let routable = name
            .strip_suffix(ARTICLE_EXTENSION)
            .is_some_and(|stem| ArticleSlug::new(stem).is_ok());
        if !routable {
            tracing::debug!(path = %path.display(), "ignoring non-article file");
            return Ok(None);
        }

        // Follow symlinks so linked articles are listed like regular files.
        let metadata = fs::metadata(&path).await.map_err(|err| map_io(&path, &err))?;
        if !metadata.is_file() {
            tracing::debug!(path = %path.display(), "ignoring non-file entry");
            return Ok(None);
        }

        let modified = metadata.modified().map_err(|err| map_io(&path, &err))?;
        Ok(Some(ArticleFile::new(name, DateTime::<Utc>::from(modified))))
    }
}

#[async_trait]
impl ArticleSource for FsArticleSource {
    async fn list_articles(&self) -> DomainResult<Vec<ArticleFile>> {
        let mut entries = fs::read_dir(&self.dir)
            .await
            .map_err(|err| map_io(&self.dir, &err))?;

        let mut files = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|err| map_io(&self.dir, &err))?
        {
            match self.describe_entry(&entry).await {
                Ok(Some(file)) => files.push(file),
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable article entry");
                }
            }
        }

        Ok(files)
    }

    async fn read_article(&self, name: &str) -> DomainResult<String> {
        let path = self.dir.join(name);
        fs::read_to_string(&path)
            .await
            .map_err(|err| map_io(&path, &err))
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<String>> {
        let path = self.dir.join(slug.file_name());
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(map_io(&path, &err)),
        }
    }
}
