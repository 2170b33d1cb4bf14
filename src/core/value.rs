use crate::domain::model::Value;

/// Text yields its character count, numbers are doubled.
pub fn process_value(value: &Value) -> f64 {
    match value {
        Value::Text(s) => s.chars().count() as f64,
        Value::Number(n) => n * 2.0,
    }
}
