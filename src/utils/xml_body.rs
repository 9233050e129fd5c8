//! Request bodies for create and update calls.
//!
//! The server takes a flat element per resource with one child per field,
//! and only the fields being set should be present.

use crate::types::*;
use quick_xml::events::{BytesDecl, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;

/// Ordered field name / value pairs for a request body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyList {
    properties: Vec<(String, String)>,
}

impl PropertyList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field; a later value for the same name replaces the earlier one
    pub fn add(&mut self, name: impl Into<String>, value: impl ToString) -> &mut Self {
        let name = name.into();
        let value = value.to_string();
        match self.properties.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.properties.push((name, value)),
        }
        self
    }

    /// Add a field only when a value is given
    pub fn add_optional<V: ToString>(&mut self, name: impl Into<String>, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.add(name, value);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

fn write_failed<E: std::error::Error + Send + Sync + 'static>(e: E) -> CupiError {
    CupiError::parse_error("Failed to write XML body", None, Some(e), None)
}

/// Render `<root><Name>value</Name>...</root>` with escaping
pub fn xml_body(root: &str, properties: &PropertyList) -> CupiResult<String> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
        .map_err(write_failed)?;
    writer
        .write_event(Event::Start(BytesStart::new(root)))
        .map_err(write_failed)?;

    for (name, value) in properties.iter() {
        writer
            .write_event(Event::Start(BytesStart::new(name)))
            .map_err(write_failed)?;
        writer
            .write_event(Event::Text(BytesText::new(value)))
            .map_err(write_failed)?;
        writer
            .write_event(Event::End(BytesStart::new(name).to_end()))
            .map_err(write_failed)?;
    }

    writer
        .write_event(Event::End(BytesStart::new(root).to_end()))
        .map_err(write_failed)?;

    let xml = writer.into_inner().into_inner();
    String::from_utf8(xml).map_err(write_failed)
}
