//! Response payload mapping
//!
//! Both representations the server can return are normalised into the same
//! `serde_json::Value` tree before they reach a record type:
//!
//! - leaf elements become strings
//! - elements with child elements become objects keyed by local name
//! - repeated children become arrays
//! - attributes become `@name` keys
//!
//! That is also the shape of the JSON output, which wraps collections as
//! `{"@total":"2","Partition":[...]}` and collapses a one-item collection into
//! a bare object. Records then deserialize with plain serde, field names
//! matched case-sensitively.

use crate::types::*;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

/// What a response body looks like before parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Empty,
    Xml,
    Json,
}

/// Decide how to parse a body from its first non-blank character
pub fn sniff(body: &str) -> BodyKind {
    match body.trim_start().chars().next() {
        None => BodyKind::Empty,
        Some('<') => BodyKind::Xml,
        Some(_) => BodyKind::Json,
    }
}

struct XmlFrame {
    name: String,
    fields: Map<String, Value>,
    text: String,
    has_children: bool,
}

impl XmlFrame {
    fn open(start: &BytesStart<'_>) -> CupiResult<Self> {
        let name = local_name(start.local_name().as_ref())?;
        let mut fields = Map::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| {
                CupiError::parse_error("Malformed XML attribute", None, Some(e), None)
            })?;
            let raw_key = attr.key.as_ref();
            if raw_key == b"xmlns" || raw_key.starts_with(b"xmlns:") {
                continue;
            }
            let key = local_name(attr.key.local_name().as_ref())?;
            let value = attr.unescape_value().map_err(|e| {
                CupiError::parse_error("Malformed XML attribute value", None, Some(e), None)
            })?;
            fields.insert(format!("@{}", key), Value::String(value.into_owned()));
        }
        Ok(Self {
            name,
            fields,
            text: String::new(),
            has_children: false,
        })
    }

    fn close(self) -> (String, Value) {
        let value = if self.has_children || (!self.fields.is_empty() && self.text.is_empty()) {
            Value::Object(self.fields)
        } else {
            Value::String(self.text)
        };
        (self.name, value)
    }
}

fn local_name(bytes: &[u8]) -> CupiResult<String> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|e| CupiError::parse_error("XML name is not valid UTF-8", None, Some(e), None))
}

fn insert_child(fields: &mut Map<String, Value>, name: String, value: Value) {
    match fields.get_mut(&name) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            fields.insert(name, value);
        }
    }
}

/// Convert an XML document into its root element name and value tree.
///
/// Returns `Ok(None)` when the document holds no element at all.
pub fn xml_to_value(xml: &str) -> CupiResult<Option<(String, Value)>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlFrame> = Vec::new();
    let mut root: Option<(String, Value)> = None;

    let mut finish = |frame: XmlFrame, stack: &mut Vec<XmlFrame>| {
        let (name, value) = frame.close();
        match stack.last_mut() {
            Some(parent) => {
                parent.has_children = true;
                insert_child(&mut parent.fields, name, value);
            }
            None => {
                if root.is_none() {
                    root = Some((name, value));
                }
            }
        }
    };

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => stack.push(XmlFrame::open(e)?),
            Ok(Event::Empty(ref e)) => {
                let frame = XmlFrame::open(e)?;
                finish(frame, &mut stack);
            }
            Ok(Event::Text(ref e)) => {
                if let Some(top) = stack.last_mut() {
                    let text = e.unescape().map_err(|err| {
                        CupiError::parse_error("Malformed XML text", None, Some(err), None)
                    })?;
                    top.text.push_str(&text);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::End(_)) => {
                if let Some(frame) = stack.pop() {
                    finish(frame, &mut stack);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(CupiError::parse_error(
                    format!("Invalid XML at position {}", reader.buffer_position()),
                    Some(xml.chars().take(512).collect()),
                    Some(e),
                    Some(concat!(file!(), ":", line!())),
                ));
            }
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(CupiError::parse_error(
            "XML document ended inside an element",
            Some(xml.chars().take(512).collect()),
            None::<quick_xml::Error>,
            Some(concat!(file!(), ":", line!())),
        ));
    }

    Ok(root)
}

/// Parse a response body of either representation into a value tree.
///
/// For XML the root element name is dropped; `Ok(None)` means the body was
/// blank or held no element.
pub fn body_to_value(body: &str) -> CupiResult<Option<Value>> {
    match sniff(body) {
        BodyKind::Empty => Ok(None),
        BodyKind::Xml => Ok(xml_to_value(body)?.map(|(_, value)| value)),
        BodyKind::Json => serde_json::from_str(body).map(Some).map_err(|e| {
            CupiError::parse_error(
                format!("Invalid JSON: {}", e),
                Some(body.chars().take(512).collect()),
                Some(e),
                Some(concat!(file!(), ":", line!())),
            )
        }),
    }
}

fn total_from(fields: &Map<String, Value>) -> Option<u32> {
    match fields.get("@total")? {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        _ => None,
    }
}

/// Pull the elements named `element_name` out of a collection response.
///
/// A blank body, a zero total or a missing element list are all legitimate
/// empty results; only an unparsable body is an error.
pub fn collection_from_body(body: &str, element_name: &str) -> CupiResult<Page<Value>> {
    let root = match body_to_value(body)? {
        Some(root) => root,
        None => return Ok(Page::empty()),
    };

    let (total, items) = match root {
        Value::Object(mut fields) => {
            let total = total_from(&fields);
            let items = match fields.remove(element_name) {
                Some(Value::Array(items)) => items,
                Some(Value::Object(item)) => vec![Value::Object(item)],
                Some(Value::String(s)) if s.trim().is_empty() => Vec::new(),
                Some(other) => {
                    return Err(CupiError::parse_error(
                        format!("Unexpected {} content: {}", element_name, other),
                        Some(body.chars().take(512).collect()),
                        None::<serde_json::Error>,
                        None,
                    ))
                }
                None => Vec::new(),
            };
            (total, items)
        }
        Value::Array(items) => (None, items),
        Value::String(s) if s.trim().is_empty() => (None, Vec::new()),
        other => {
            return Err(CupiError::parse_error(
                format!("Expected a {} collection, got {}", element_name, other),
                Some(body.chars().take(512).collect()),
                None::<serde_json::Error>,
                None,
            ))
        }
    };

    let total = total.unwrap_or(items.len() as u32);
    debug!("Parsed {} of {} {} elements", items.len(), total, element_name);
    Ok(Page::new(total, items))
}

/// Pull a single record out of a response body.
///
/// `Ok(None)` means there were no fields to copy, which callers treat as a
/// failed fetch.
pub fn object_from_body(body: &str) -> CupiResult<Option<Value>> {
    match body_to_value(body)? {
        Some(Value::Object(fields)) if !fields.is_empty() => Ok(Some(Value::Object(fields))),
        Some(Value::Object(_)) | Some(Value::Null) | None => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(other) => Err(CupiError::parse_error(
            format!("Expected an object, got {}", other),
            Some(body.chars().take(512).collect()),
            None::<serde_json::Error>,
            None,
        )),
    }
}

/// Deserialize one normalised element into a record type
pub fn deserialize_record<T: DeserializeOwned>(value: Value, element_name: &str) -> CupiResult<T> {
    let snapshot = value.to_string();
    serde_json::from_value(value).map_err(|e| {
        CupiError::parse_error(
            format!("Failed to map {} fields: {}", element_name, e),
            Some(snapshot),
            Some(e),
            Some(concat!(file!(), ":", line!())),
        )
    })
}

/// The identifier at the end of a resource URI such as
/// `/vmrest/partitions/0f6c1f5e-...`, as returned by create calls
pub fn object_id_from_uri(text: &str) -> Option<String> {
    let trimmed = text.trim().trim_matches('"').trim_end_matches('/');
    let id = trimmed.rsplit('/').next()?.trim();
    let plain = id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.');
    if id.is_empty() || !plain {
        None
    } else {
        Some(id.to_string())
    }
}

/// Messages from an `ErrorDetails` body, joined with `; `
pub fn error_message_from_body(body: &str) -> Option<String> {
    let root = body_to_value(body).ok()??;
    let errors = match root.get("errors")? {
        Value::Array(items) => items.clone(),
        other => vec![other.clone()],
    };
    let messages: Vec<String> = errors
        .iter()
        .filter_map(|error| match error.get("message") {
            Some(Value::String(message)) if !message.trim().is_empty() => {
                Some(message.trim().to_string())
            }
            _ => None,
        })
        .collect();
    if messages.is_empty() {
        None
    } else {
        Some(messages.join("; "))
    }
}
