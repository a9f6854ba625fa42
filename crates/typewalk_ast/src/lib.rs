//! # typewalk_ast
//!
//! Type expression AST definitions and traversal for typewalk.
//!
//! This crate provides the node model for JSDoc-style type expressions
//! (`Array<string>`, `function(number): ?Foo`, `{a: b}`, ...), a static schema
//! registry describing which properties of each node hold children, and a
//! depth-first traversal engine driven by that registry.
//!
//! ## Architecture
//!
//! - [`NodeType`] is the closed set of node tags. Each tag maps to a fixed,
//!   ordered list of [`Accessor`]s (the schema registry).
//! - [`SyntaxNode`] is the read seam the engine walks through. It is
//!   implemented for arena-allocated [`TypeNode`]s and for JSON ASTs
//!   (`serde_json::Value`).
//! - [`traverse`] and [`visitor::walk_node`] visit nodes in pre-order (enter)
//!   and post-order (leave).
//!
//! ## Example
//!
//! ```rust
//! use typewalk_ast::{AstArena, Field, FieldValue, NodeType, Span, TypeNode, traverse};
//!
//! let arena = AstArena::new();
//!
//! // string|number
//! let left = arena.alloc(TypeNode::new_name(Span::new(0, 6), "string"));
//! let right = arena.alloc(TypeNode::new_name(Span::new(7, 13), "number"));
//! let fields = arena.alloc_slice_copy(&[
//!     Field::new("left", FieldValue::Node(left)),
//!     Field::new("right", FieldValue::Node(right)),
//! ]);
//! let union = TypeNode::new(NodeType::Union, Span::new(0, 13), fields);
//!
//! let mut tags = Vec::new();
//! traverse(&union, Some(&mut |node: &TypeNode<'_>| tags.push(node.node_type)), None).unwrap();
//! assert_eq!(tags, vec![NodeType::Union, NodeType::Name, NodeType::Name]);
//! ```

mod arena;
mod error;
mod json;
mod node;
mod node_type;
mod schema;
mod span;
mod syntax;
pub mod visitor;

pub use arena::AstArena;
pub use error::TraverseError;
pub use node::{Field, FieldValue, TypeNode};
pub use node_type::NodeType;
pub use schema::{Accessor, AccessorKind, schema_for};
pub use span::Span;
pub use syntax::{Property, SyntaxNode};

// Re-export commonly used visitor items for convenience
pub use visitor::{Event, Visitor, children, collect_events, traverse, walk_node};
