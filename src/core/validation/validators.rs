//! Reusable field validators
//!
//! Messages are written for the operator, in the dashboard's locale.

use serde_json::Value;

/// Validator: field is required (not null)
pub fn required() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| {
        if value.is_null() {
            Err(format!("Поле '{}' обязательно для заполнения", field))
        } else {
            Ok(())
        }
    }
}

/// Validator: string must contain something other than whitespace
pub fn not_blank() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| match value {
        Value::Null => Err(format!("Поле '{}' обязательно для заполнения", field)),
        Value::String(s) if s.trim().is_empty() => {
            Err(format!("Поле '{}' обязательно для заполнения", field))
        }
        _ => Ok(()),
    }
}

/// Validator: number must be positive
pub fn positive() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| {
        if let Some(num) = value.as_f64() {
            if num <= 0.0 {
                Err(format!(
                    "Поле '{}' должно быть положительным (значение: {})",
                    field, num
                ))
            } else {
                Ok(())
            }
        } else {
            // non-numbers are left to `required`
            Ok(())
        }
    }
}

/// Validator: array must not be empty
pub fn non_empty_list() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| match value {
        Value::Array(items) if items.is_empty() => {
            Err(format!("Выберите хотя бы одно значение в поле '{}'", field))
        }
        Value::Object(items) if items.is_empty() => {
            Err(format!("Выберите хотя бы одно значение в поле '{}'", field))
        }
        Value::Null => Err(format!("Поле '{}' обязательно для заполнения", field)),
        _ => Ok(()),
    }
}
