// Utility functions

pub mod de;
pub mod payload;
pub mod xml_body;

use crate::types::*;
use serde::Serialize;

/// Validates a value against a constraint and returns an error if it fails
pub fn validate<T, F>(
    value: T,
    constraint: F,
    error_message: impl Into<String>,
) -> CupiResult<T>
where
    F: FnOnce(&T) -> bool,
{
    if constraint(&value) {
        Ok(value)
    } else {
        Err(CupiError::ValidationError(error_message.into()))
    }
}

/// Validates a range constraint for numeric values
pub fn validate_range<T>(
    value: T,
    min: T,
    max: T,
    param_name: &str,
) -> CupiResult<T>
where
    T: PartialOrd + Copy + std::fmt::Display,
{
    validate(
        value,
        |&v| v >= min && v <= max,
        format!("{} must be between {} and {}, but got {}", param_name, min, max, value),
    )
}

/// Validates a string against common constraints
pub struct StringValidator;

impl StringValidator {
    /// Validates that a string is not empty or whitespace
    pub fn not_empty(value: impl Into<String>, param_name: &str) -> CupiResult<String> {
        let value = value.into();
        validate(
            value,
            |s| !s.trim().is_empty(),
            format!("{} cannot be empty", param_name),
        )
    }

    /// Validates that a string matches a regular expression pattern
    pub fn matches_pattern(
        value: impl Into<String>,
        pattern: &str,
        param_name: &str,
    ) -> CupiResult<String> {
        let value = value.into();
        let regex = regex::Regex::new(pattern).map_err(|e| {
            CupiError::ValidationError(format!("Invalid regex pattern: {}", e))
        })?;
        validate(
            value,
            |s| regex.is_match(s),
            format!("{} must match pattern {}", param_name, pattern),
        )
    }
}

/// Render every field of a record as `Name [value]` lines.
///
/// Field names come out exactly as they travel on the wire, so the output of
/// a `Partition` reads `ObjectId [...]`, `Name [...]` and so on. Nested
/// objects are flattened with a dotted prefix.
pub fn dump_properties<T: Serialize>(value: &T, prefix: &str) -> CupiResult<String> {
    let tree = serde_json::to_value(value).map_err(|e| {
        CupiError::parse_error("Failed to serialize record", None, Some(e), None)
    })?;
    let mut out = String::new();
    dump_value(&tree, prefix, &mut out);
    Ok(out)
}

fn dump_value(value: &serde_json::Value, prefix: &str, out: &mut String) {
    match value {
        serde_json::Value::Object(map) => {
            for (name, field) in map {
                let label = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{}.{}", prefix, name)
                };
                match field {
                    serde_json::Value::Object(_) => dump_value(field, &label, out),
                    serde_json::Value::String(s) => out.push_str(&format!("{} [{}]\n", label, s)),
                    other => out.push_str(&format!("{} [{}]\n", label, other)),
                }
            }
        }
        serde_json::Value::String(s) => out.push_str(&format!("{} [{}]\n", prefix, s)),
        other => out.push_str(&format!("{} [{}]\n", prefix, other)),
    }
}
