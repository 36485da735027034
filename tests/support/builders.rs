// tests/support/builders.rs
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tempfile::TempDir;

/// A throwaway site checkout: `data/articles`, `data/events.csv` and a
/// `public/` directory inside a temp dir.
pub struct SiteFixture {
    root: TempDir,
}

impl SiteFixture {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir_all(root.path().join("data/articles")).expect("articles dir");
        std::fs::create_dir_all(root.path().join("public/styles")).expect("public dir");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn articles_dir(&self) -> PathBuf {
        self.root.path().join("data/articles")
    }

    pub fn events_file(&self) -> PathBuf {
        self.root.path().join("data/events.csv")
    }

    pub fn public_dir(&self) -> PathBuf {
        self.root.path().join("public")
    }

    /// Write an article whose mtime lies `age_days` in the past.
    pub fn article(self, name: &str, content: &str, age_days: u64) -> Self {
        let path = self.articles_dir().join(name);
        std::fs::write(&path, content).expect("write article");
        let file = std::fs::File::options()
            .write(true)
            .open(&path)
            .expect("open article");
        file.set_modified(SystemTime::now() - Duration::from_secs(age_days * 86_400))
            .expect("set mtime");
        self
    }

    pub fn events(self, csv: &str) -> Self {
        std::fs::write(self.events_file(), csv).expect("write events");
        self
    }

    pub fn asset(self, relative: &str, content: &str) -> Self {
        std::fs::write(self.public_dir().join(relative), content).expect("write asset");
        self
    }

    pub fn without_articles_dir(self) -> Self {
        std::fs::remove_dir_all(self.articles_dir()).expect("remove articles dir");
        self
    }
}
