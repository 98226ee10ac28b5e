//! Core module containing the error, notice, validation and sink types shared
//! by both feature areas

pub mod error;
pub mod notice;
pub mod sink;
pub mod validation;

pub use error::{ConfigError, LabError, ValidationError};
pub use notice::{Notice, NoticeKind};
pub use sink::{DocumentSink, RenderedDocument};
pub use validation::{FormValidationConfig, ValidatableForm};
