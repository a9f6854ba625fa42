//! [`SyntaxNode`] for JSON ASTs.
//!
//! JSDoc type parsers written in JavaScript emit plain objects such as
//! `{"type": "UNION", "left": {...}, "right": {...}}`. Those trees can be
//! walked directly as `serde_json::Value`s without converting them first.

use serde_json::Value;

use crate::{Property, SyntaxNode};

impl SyntaxNode for Value {
    /// Returns the `type` member, or `""` when it is missing or not a string
    /// (which no schema entry matches).
    fn tag(&self) -> &str {
        self.get("type").and_then(Value::as_str).unwrap_or_default()
    }

    fn property(&self, name: &str) -> Property<'_, Self> {
        match self.get(name) {
            None | Some(Value::Null) => Property::Absent,
            Some(node @ Value::Object(_)) => Property::Node(node),
            Some(Value::Array(items)) if items.iter().all(Value::is_object) => {
                Property::List(items.as_slice())
            }
            Some(_) => Property::Invalid,
        }
    }

    fn label(&self) -> Option<&str> {
        let key = self.node_type().ok()?.label_key()?;
        self.get(key).and_then(Value::as_str)
    }
}
