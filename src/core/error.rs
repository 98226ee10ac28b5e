//! Typed error handling for labdesk
//!
//! Every fallible operation in the crate returns [`LabError`]. Callers can
//! match on the category they care about instead of inspecting strings, and
//! turn any error into a localized [`Notice`](crate::core::notice::Notice)
//! for the operator.
//!
//! # Error Categories
//!
//! - [`ValidationError`]: a form submission was rejected
//! - [`ConfigError`]: configuration could not be loaded or parsed
//! - `InvoiceNotFound`: an attachment referenced an unknown invoice
//! - `Render`: the protocol template failed to render
//! - `Sink`: the document surface refused the rendered protocol
//!
//! # Example
//!
//! ```rust,ignore
//! match form.submit(&mut journal) {
//!     Ok(notice) => show(notice),
//!     Err(LabError::Validation(e)) => show(Notice::from_error(&e.into())),
//!     Err(e) => return Err(e),
//! }
//! ```

use thiserror::Error;

/// The main error type for the crate
#[derive(Debug, Error)]
pub enum LabError {
    /// A form submission failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The referenced invoice does not exist in the book
    #[error("invoice '{id}' not found")]
    InvoiceNotFound { id: String },

    /// The protocol template failed to render
    #[error("failed to render protocol: {0}")]
    Render(#[from] tera::Error),

    /// The document surface rejected the rendered document
    #[error("document sink failed: {0}")]
    Sink(anyhow::Error),

    /// A form could not be converted to or from its validation payload
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LabError {
    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            LabError::Validation(e) => e.error_code(),
            LabError::Config(_) => "CONFIG_ERROR",
            LabError::InvoiceNotFound { .. } => "INVOICE_NOT_FOUND",
            LabError::Render(_) => "RENDER_ERROR",
            LabError::Sink(_) => "SINK_ERROR",
            LabError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Whether the error was caused by operator input
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            LabError::Validation(_) | LabError::InvoiceNotFound { .. }
        )
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Every field error collected for one form submission
    #[error("{form} rejected: {}", .errors.join("; "))]
    FieldErrors { form: String, errors: Vec<String> },
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::FieldErrors { .. } => "VALIDATION_ERROR",
        }
    }

    /// Name of the form that was rejected
    pub fn form(&self) -> &str {
        match self {
            ValidationError::FieldErrors { form, .. } => form,
        }
    }

    /// All messages carried by this error
    pub fn messages(&self) -> Vec<String> {
        match self {
            ValidationError::FieldErrors { errors, .. } => errors.clone(),
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("failed to parse config{}: {message}", file_suffix(.file))]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Configuration file not found
    #[error("configuration file not found: {path}")]
    FileNotFound { path: String },

    /// IO error while reading configuration
    #[error("IO error: {message}")]
    IoError { message: String },

    /// A value parsed but makes no sense
    #[error("invalid value '{value}' for '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },
}

fn file_suffix(file: &Option<String>) -> String {
    match file {
        Some(file) => format!(" file '{}'", file),
        None => String::new(),
    }
}
