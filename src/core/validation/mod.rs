//! Validation and filtering system
//!
//! Forms describe their rules declaratively with a [`FormValidationConfig`]:
//! filters normalize raw field values, validators reject bad ones. A form is
//! serialized to JSON, run through its config, and deserialized back before
//! the immutable record is built.

pub mod config;
pub mod filters;
pub mod validators;

pub use config::{FormValidationConfig, ValidatableForm};
