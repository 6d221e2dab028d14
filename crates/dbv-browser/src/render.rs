//! Recursive rendering of document values into a visual tree.
//!
//! The tree is toolkit-agnostic: the GUI maps each node onto widgets, and
//! [`VisualNode::outline`] gives a plain-text form for logs and tests.

use dbv_model::{Document, JsonValue, ObjectMap};

/// Rendered form of a [`JsonValue`].
#[derive(Debug, Clone, PartialEq)]
pub enum VisualNode {
    /// Key/value rows in document order, each followed by a separator.
    Object {
        depth: usize,
        entries: Vec<ObjectEntry>,
    },
    /// Boxed list of indexed items.
    Array { depth: usize, items: Vec<ArrayItem> },
    /// Textual form of a scalar.
    Text(String),
}

/// One row of a rendered object.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectEntry {
    /// Scalar property: key in the fixed-width column, value text beside it.
    Field { key: String, value: String },
    /// Nested object or array under a header.
    Section { key: String, body: VisualNode },
    Separator,
}

/// One element of a rendered array.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayItem {
    /// Index label, e.g. `[0]:`.
    pub label: String,
    pub body: VisualNode,
    /// Whether a separator follows this item (all but the last).
    pub separated: bool,
}

/// Render `value` at nesting level `depth`.
pub fn render(value: &JsonValue, depth: usize) -> VisualNode {
    match value {
        JsonValue::Object(map) => render_object(map, depth),
        JsonValue::Array(values) => {
            let last = values.len().saturating_sub(1);
            let items = values
                .iter()
                .enumerate()
                .map(|(i, v)| ArrayItem {
                    label: format!("[{i}]:"),
                    body: render(v, depth + 1),
                    separated: i < last,
                })
                .collect();
            VisualNode::Array { depth, items }
        }
        JsonValue::Scalar(scalar) => VisualNode::Text(scalar.to_string()),
    }
}

/// Render the properties of a document at depth 0.
pub fn render_document(document: &Document) -> VisualNode {
    render_object(document.properties(), 0)
}

fn render_object(map: &ObjectMap, depth: usize) -> VisualNode {
    let mut entries = Vec::with_capacity(map.len() * 2);
    for (key, value) in map.iter() {
        let entry = match value {
            JsonValue::Scalar(scalar) => ObjectEntry::Field {
                key: key.to_string(),
                value: scalar.to_string(),
            },
            JsonValue::Object(_) | JsonValue::Array(_) => ObjectEntry::Section {
                key: key.to_string(),
                body: render(value, depth + 1),
            },
        };
        entries.push(entry);
        entries.push(ObjectEntry::Separator);
    }
    VisualNode::Object { depth, entries }
}

impl VisualNode {
    /// Indented plain-text form, two spaces per level.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.write_outline(0, &mut out);
        out
    }

    fn write_outline(&self, indent: usize, out: &mut String) {
        let pad = "  ".repeat(indent);
        match self {
            Self::Text(text) => {
                out.push_str(&pad);
                out.push_str(text);
                out.push('\n');
            }
            Self::Object { entries, .. } => {
                for entry in entries {
                    match entry {
                        ObjectEntry::Field { key, value } => {
                            out.push_str(&format!("{pad}{key}: {value}\n"));
                        }
                        ObjectEntry::Section { key, body } => {
                            out.push_str(&format!("{pad}{key}:\n"));
                            body.write_outline(indent + 1, out);
                        }
                        ObjectEntry::Separator => {}
                    }
                }
            }
            Self::Array { items, .. } => {
                for item in items {
                    match &item.body {
                        Self::Text(text) => {
                            out.push_str(&format!("{pad}{} {text}\n", item.label));
                        }
                        nested => {
                            out.push_str(&format!("{pad}{}\n", item.label));
                            nested.write_outline(indent + 1, out);
                        }
                    }
                }
            }
        }
    }
}
