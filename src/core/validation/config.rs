//! Per-form validation configuration

use crate::core::error::ValidationError;
use anyhow::Result;
use indexmap::IndexMap;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

type FieldValidator = Box<dyn Fn(&str, &Value) -> Result<(), String> + Send + Sync>;
type FieldFilter = Box<dyn Fn(&str, Value) -> Result<Value> + Send + Sync>;

/// Declarative validation rules for one form
///
/// Fields are checked in the order they were first registered, so the
/// collected error list is stable.
///
/// # Example
///
/// ```rust,ignore
/// let config = FormValidationConfig::new("protocol")
///     .filter("number", filters::trim())
///     .validate("number", validators::not_blank());
///
/// let payload = config.validate_and_filter(json!({ "number": "  П-7 " }))?;
/// assert_eq!(payload["number"], "П-7");
/// ```
pub struct FormValidationConfig {
    form: String,
    filters: IndexMap<String, Vec<FieldFilter>>,
    validators: IndexMap<String, Vec<FieldValidator>>,
}

impl FormValidationConfig {
    pub fn new(form: impl Into<String>) -> Self {
        Self {
            form: form.into(),
            filters: IndexMap::new(),
            validators: IndexMap::new(),
        }
    }

    pub fn form(&self) -> &str {
        &self.form
    }

    /// Register a filter for a field
    pub fn filter<F>(mut self, field: &str, filter: F) -> Self
    where
        F: Fn(&str, Value) -> Result<Value> + Send + Sync + 'static,
    {
        self.filters
            .entry(field.to_string())
            .or_default()
            .push(Box::new(filter));
        self
    }

    /// Register a validator for a field
    pub fn validate<V>(mut self, field: &str, validator: V) -> Self
    where
        V: Fn(&str, &Value) -> Result<(), String> + Send + Sync + 'static,
    {
        self.validators
            .entry(field.to_string())
            .or_default()
            .push(Box::new(validator));
        self
    }

    /// Apply every filter, then every validator
    ///
    /// Returns the filtered payload, or all validation messages at once.
    /// Missing fields are validated as `null`.
    pub fn validate_and_filter(&self, mut payload: Value) -> Result<Value, Vec<String>> {
        let mut errors = Vec::new();

        if let Some(object) = payload.as_object_mut() {
            for (field, filters) in &self.filters {
                let Some(current) = object.get(field).cloned() else {
                    continue;
                };
                let mut value = current;
                for filter in filters {
                    match filter(field, value.clone()) {
                        Ok(filtered) => value = filtered,
                        Err(e) => errors.push(format!("{}: {}", field, e)),
                    }
                }
                object.insert(field.clone(), value);
            }
        }

        for (field, validators) in &self.validators {
            let value = payload.get(field).cloned().unwrap_or(Value::Null);
            for validator in validators {
                if let Err(message) = validator(field, &value) {
                    errors.push(message);
                }
            }
        }

        if errors.is_empty() {
            Ok(payload)
        } else {
            Err(errors)
        }
    }

    /// Run a typed form through this config and get the normalized form back
    pub fn apply<T>(&self, form: &T) -> Result<T, crate::core::error::LabError>
    where
        T: Serialize + DeserializeOwned,
    {
        let payload = serde_json::to_value(form)?;
        let filtered = self.validate_and_filter(payload).map_err(|errors| {
            tracing::debug!(form = %self.form, errors = ?errors, "Form rejected");
            ValidationError::FieldErrors {
                form: self.form.clone(),
                errors,
            }
        })?;
        Ok(serde_json::from_value(filtered)?)
    }
}

/// Forms that carry their own validation rules
pub trait ValidatableForm: Serialize + DeserializeOwned {
    fn validation_config() -> FormValidationConfig;

    /// Validate this form and return its normalized copy
    fn validated(&self) -> Result<Self, crate::core::error::LabError> {
        Self::validation_config().apply(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LabError;
    use crate::core::validation::{filters, validators};
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Entry {
        number: String,
        load: Option<f64>,
    }

    impl ValidatableForm for Entry {
        fn validation_config() -> FormValidationConfig {
            FormValidationConfig::new("entry")
                .filter("number", filters::trim())
                .validate("number", validators::not_blank())
                .validate("load", validators::required())
                .validate("load", validators::positive())
        }
    }

    #[test]
    fn test_filters_run_before_validators() {
        let config = Entry::validation_config();
        let result = config
            .validate_and_filter(json!({ "number": "  7 ", "load": 1.0 }))
            .expect("valid payload");
        assert_eq!(result["number"], json!("7"));
    }

    #[test]
    fn test_all_errors_are_collected_in_field_order() {
        let config = Entry::validation_config();
        let errors = config
            .validate_and_filter(json!({ "number": "   ", "load": null }))
            .unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("number"));
        assert!(errors[1].contains("load"));
    }

    #[test]
    fn test_missing_field_is_validated_as_null() {
        let config = Entry::validation_config();
        let errors = config
            .validate_and_filter(json!({ "number": "1" }))
            .unwrap_err();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_validated_round_trips_typed_form() {
        let entry = Entry {
            number: " 12 ".to_string(),
            load: Some(5.0),
        };
        let normalized = entry.validated().expect("valid form");
        assert_eq!(normalized.number, "12");
        assert_eq!(normalized.load, Some(5.0));
    }

    #[test]
    fn test_validated_reports_form_name() {
        let entry = Entry {
            number: String::new(),
            load: Some(0.0),
        };
        match entry.validated() {
            Err(LabError::Validation(ValidationError::FieldErrors { form, errors })) => {
                assert_eq!(form, "entry");
                assert_eq!(errors.len(), 2);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
