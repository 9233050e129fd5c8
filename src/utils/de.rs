//! Lenient field deserializers.
//!
//! The provisioning interface quotes every scalar in its JSON output
//! (`"IsPrimary":"true"`, `"PacketSize":"20"`) and XML text is always a
//! string, so typed fields on the records go through these helpers instead
//! of serde's strict defaults. Native JSON booleans and numbers are accepted
//! too. A blank string or `null` falls back to the type's default.

use serde::de::{Deserializer, Error};
use serde::Deserialize;
use serde_json::Value;
use std::fmt::Display;
use std::str::FromStr;

/// Parse the boolean spellings the server emits
pub fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" | "" => Some(false),
        _ => None,
    }
}

pub fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Bool(b) => Ok(b),
        Value::String(s) => {
            parse_bool(&s).ok_or_else(|| D::Error::custom(format!("invalid boolean value '{}'", s)))
        }
        Value::Number(n) => Ok(n.as_i64().map(|v| v != 0).unwrap_or(false)),
        Value::Null => Ok(false),
        other => Err(D::Error::custom(format!("expected boolean, found {}", other))),
    }
}

pub fn flexible_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: Display,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) if s.trim().is_empty() => Ok(T::default()),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|e| D::Error::custom(format!("invalid number '{}': {}", s, e))),
        Value::Number(n) => n
            .to_string()
            .parse()
            .map_err(|e| D::Error::custom(format!("invalid number '{}': {}", n, e))),
        Value::Null => Ok(T::default()),
        other => Err(D::Error::custom(format!("expected number, found {}", other))),
    }
}

/// Like `flexible_number` but keeps "absent" distinct from zero
pub fn flexible_optional_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| D::Error::custom(format!("invalid number '{}': {}", s, e))),
        Value::Number(n) => n
            .to_string()
            .parse()
            .map(Some)
            .map_err(|e| D::Error::custom(format!("invalid number '{}': {}", n, e))),
        Value::Null => Ok(None),
        other => Err(D::Error::custom(format!("expected number, found {}", other))),
    }
}

/// Strings that may arrive as numbers or booleans in hand-written JSON
pub fn flexible_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Null => Ok(String::new()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string, found {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, Default)]
    #[serde(rename_all = "PascalCase")]
    struct Probe {
        #[serde(default, deserialize_with = "flexible_bool")]
        is_primary: bool,
        #[serde(default, deserialize_with = "flexible_number")]
        packet_size: i32,
        #[serde(default, deserialize_with = "flexible_optional_number")]
        ping_delay: Option<u32>,
        #[serde(default, deserialize_with = "flexible_string")]
        value: String,
    }

    #[test]
    fn test_quoted_scalars() {
        let probe: Probe = serde_json::from_value(json!({
            "IsPrimary": "true",
            "PacketSize": "20",
            "PingDelay": "",
            "Value": 7
        }))
        .unwrap();
        assert!(probe.is_primary);
        assert_eq!(probe.packet_size, 20);
        assert_eq!(probe.ping_delay, None);
        assert_eq!(probe.value, "7");
    }

    #[test]
    fn test_native_scalars_and_missing_fields() {
        let probe: Probe = serde_json::from_value(json!({ "IsPrimary": false, "PingDelay": 12 })).unwrap();
        assert!(!probe.is_primary);
        assert_eq!(probe.packet_size, 0);
        assert_eq!(probe.ping_delay, Some(12));
        assert_eq!(probe.value, "");
    }

    #[test]
    fn test_garbage_is_rejected() {
        let result: Result<Probe, _> = serde_json::from_value(json!({ "PacketSize": "twenty" }));
        assert!(result.is_err());
        let result: Result<Probe, _> = serde_json::from_value(json!({ "IsPrimary": "maybe" }));
        assert!(result.is_err());
    }
}
