//! Document sink trait for printable output

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A complete, self-contained document ready to be shown or printed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedDocument {
    /// Title of the document (used as window title or file stem hint)
    pub title: String,

    /// Full markup, with all styles inlined
    pub body: String,

    /// When the document was rendered
    pub created_at: DateTime<Utc>,
}

impl RenderedDocument {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            created_at: Utc::now(),
        }
    }
}

/// A surface that can display a rendered document
///
/// The sink is handed the document once and is not asked about it again;
/// dismissing the surface is up to whoever owns it.
pub trait DocumentSink: Send + Sync {
    /// Open a new surface showing the document
    fn open(&self, document: RenderedDocument) -> Result<()>;
}
