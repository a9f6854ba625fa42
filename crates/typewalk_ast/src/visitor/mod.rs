//! Depth-first traversal of type expression trees.
//!
//! # Overview
//!
//! - [`Visitor`] - Read-only traversal trait with enter/leave hooks
//! - [`walk_node`] - Walks a node and its descendants with a visitor
//! - [`traverse`] - Same walk, driven by two optional callbacks
//! - [`children`] - Immediate children of one node, in visitation order
//! - [`collect_events`] - Records the enter/leave sequence of a walk
//!
//! Children are visited in the order the schema registry declares their
//! properties, and within a list property in list order. Every node is
//! entered before any of its descendants and left after all of them.
//!
//! # Examples
//!
//! ## Printing an Indented Outline
//!
//! ```rust
//! use typewalk_ast::SyntaxNode;
//! use typewalk_ast::visitor::{Visitor, walk_node};
//! use serde_json::{Value, json};
//!
//! struct Outline {
//!     depth: usize,
//!     lines: Vec<String>,
//! }
//!
//! impl<'n> Visitor<'n, Value> for Outline {
//!     fn enter_node(&mut self, node: &'n Value) {
//!         self.lines.push(format!("{}{}", "  ".repeat(self.depth), node.tag()));
//!         self.depth += 1;
//!     }
//!
//!     fn leave_node(&mut self, _node: &'n Value) {
//!         self.depth -= 1;
//!     }
//! }
//!
//! // ?Array<*>
//! let ast = json!({
//!     "type": "NULLABLE",
//!     "value": {
//!         "type": "GENERIC",
//!         "subject": { "type": "NAME", "name": "Array" },
//!         "objects": [{ "type": "ANY" }]
//!     }
//! });
//!
//! let mut outline = Outline { depth: 0, lines: Vec::new() };
//! walk_node(&mut outline, &ast).unwrap();
//! assert_eq!(outline.lines, vec!["NULLABLE", "  GENERIC", "    NAME", "    ANY"]);
//! ```
//!
//! ## Handling Malformed Input
//!
//! ```rust
//! use typewalk_ast::{TraverseError, traverse};
//! use serde_json::json;
//!
//! let ast = json!({ "type": "UNION", "left": { "type": "ANY" } });
//!
//! let err = traverse(&ast, None, None).unwrap_err();
//! assert!(matches!(err, TraverseError::MalformedNode { property: "right", .. }));
//! ```

mod visit;
mod walk;

pub use visit::{Event, Visitor, collect_events};
pub use walk::{children, traverse, walk_node};
