//! XML layer for MEI documents
//!
//! Defines the attribute contract the builders read from, implements it for
//! roxmltree nodes and plain maps, and walks whole documents.

use super::builders::{note_from_node, rest_from_node};
use super::errors::{ImportError, MeiValueError};
use super::types::{ImportResult, ImportSettings, SkippedElement};
use crate::models::MusicEvent;
use roxmltree::{Document, Node};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Anything attributes can be read from by name
pub trait AttributeSource {
    fn attribute(&self, name: &str) -> Option<&str>;

    fn attribute_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.attribute(name).unwrap_or(default)
    }
}

impl<'a, 'input> AttributeSource for Node<'a, 'input> {
    /// `id` falls back to `xml:id`, which is how MEI spells element identity.
    fn attribute(&self, name: &str) -> Option<&str> {
        let value = Node::attribute(self, name);
        if value.is_none() && name == "id" {
            return Node::attribute(self, (XML_NAMESPACE, "id"));
        }
        value
    }
}

impl<K, V> AttributeSource for HashMap<K, V>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
{
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name).map(AsRef::as_ref)
    }
}

/// Parse an MEI document and convert its notes and rests in document order.
///
/// Elements other than `<note>` and `<rest>` are ignored. With
/// `skip_invalid_elements` set, elements whose attributes fail to decode are
/// reported in `skipped_elements` instead of aborting the import.
pub fn convert_mei(xml: &str, settings: &ImportSettings) -> Result<ImportResult, ImportError> {
    let xml = strip_doctype(xml);
    let doc = Document::parse(&xml).map_err(|e| ImportError::InvalidXml(e.to_string()))?;

    let mut result = ImportResult::default();

    for node in doc.descendants().filter(|n| n.is_element()) {
        let converted = match node.tag_name().name() {
            "note" => note_from_node(&node),
            "rest" if settings.include_rests => rest_from_node(&node),
            _ => continue,
        };

        match converted {
            Ok(event) => result.events.push(event),
            Err(err) if settings.skip_invalid_elements => {
                log::warn!("skipping <{}>: {}", node.tag_name().name(), err);
                result.skipped_elements.push(skipped(&node, &err));
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(result)
}

/// Convert a single `<note>` or `<rest>` element; other tags yield `None`.
pub fn convert_element(node: &Node) -> Result<Option<MusicEvent>, MeiValueError> {
    match node.tag_name().name() {
        "note" => note_from_node(node).map(Some),
        "rest" => rest_from_node(node).map(Some),
        _ => Ok(None),
    }
}

fn skipped(node: &Node, err: &MeiValueError) -> SkippedElement {
    SkippedElement {
        element_type: node.tag_name().name().to_string(),
        element_id: AttributeSource::attribute(node, "id").map(str::to_string),
        reason: err.to_string(),
    }
}

/// roxmltree rejects DTDs, so DOCTYPE lines are dropped before parsing
fn strip_doctype(xml: &str) -> String {
    if xml.contains("<!DOCTYPE") {
        xml.lines()
            .filter(|line| !line.trim_start().starts_with("<!DOCTYPE"))
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        xml.to_string()
    }
}
