//! File-backed DocumentSink: every document becomes a standalone HTML file

use crate::core::{DocumentSink, RenderedDocument};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Writes each opened document into a directory as `<stem>-<timestamp>.html`
#[derive(Clone)]
pub struct FileDocumentSink {
    dir: PathBuf,
    stem: String,
    written: Arc<RwLock<Vec<PathBuf>>>,
}

impl FileDocumentSink {
    /// Create a sink writing into `dir` (created on first use)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            stem: "protocol".to_string(),
            written: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Use a different file name stem
    pub fn with_stem(mut self, stem: impl Into<String>) -> Self {
        self.stem = stem.into();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, oldest first
    pub fn written(&self) -> Result<Vec<PathBuf>> {
        let written = self
            .written
            .read()
            .map_err(|e| anyhow::anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(written.clone())
    }

    fn next_path(&self, document: &RenderedDocument) -> PathBuf {
        let stamp = document.created_at.format("%Y%m%d-%H%M%S%3f");
        let mut path = self.dir.join(format!("{}-{}.html", self.stem, stamp));
        let mut n = 1;
        while path.exists() {
            path = self
                .dir
                .join(format!("{}-{}-{}.html", self.stem, stamp, n));
            n += 1;
        }
        path
    }
}

impl DocumentSink for FileDocumentSink {
    fn open(&self, document: RenderedDocument) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;

        let path = self.next_path(&document);
        std::fs::write(&path, document.body.as_bytes())
            .with_context(|| format!("Failed to write {}", path.display()))?;

        tracing::info!(path = %path.display(), title = %document.title, "Document written");

        self.written
            .write()
            .map_err(|e| anyhow::anyhow!("Failed to acquire write lock: {}", e))?
            .push(path);

        Ok(())
    }
}
