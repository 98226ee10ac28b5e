//! Reusable field filters
//!
//! These filters transform form field values before validation

use anyhow::Result;
use serde_json::Value;

/// Round a number to the given count of decimal places
pub fn round_to(num: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (num * factor).round() / factor
}

/// Filter: trim whitespace from string
pub fn trim() -> impl Fn(&str, Value) -> Result<Value> + Send + Sync + Clone {
    |_: &str, value: Value| {
        if let Some(s) = value.as_str() {
            Ok(Value::String(s.trim().to_string()))
        } else {
            Ok(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(22.0, 2), 22.0);
        assert_eq!(round_to(20.766_666, 2), 20.77);
        assert_eq!(round_to(3.7, 0), 4.0);
        assert_eq!(round_to(-3.456, 1), -3.5);
    }

    #[test]
    fn test_trim_removes_whitespace() {
        let f = trim();
        let result = f("sample_number", json!("  001-2024 ")).expect("should not fail");
        assert_eq!(result, json!("001-2024"));
    }

    #[test]
    fn test_trim_blank_becomes_empty() {
        let f = trim();
        let result = f("sample_number", json!("   ")).expect("should not fail");
        assert_eq!(result, json!(""));
    }

    #[test]
    fn test_trim_non_string_passthrough() {
        let f = trim();
        assert_eq!(f("age_days", json!(28)).expect("should not fail"), json!(28));
        assert_eq!(f("notes", json!(null)).expect("should not fail"), json!(null));
    }
}
