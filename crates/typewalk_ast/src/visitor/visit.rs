//! Visitor trait for traversing type expression trees.
//!
//! This module provides the [`Visitor`] trait for read-only traversal. Both
//! hooks have no-op defaults, so implement only the ones you need.
//!
//! # Example
//!
//! ```rust
//! use typewalk_ast::SyntaxNode;
//! use typewalk_ast::visitor::{Visitor, walk_node};
//! use serde_json::{Value, json};
//!
//! /// Collects every type name in an expression.
//! struct NameCollector<'n> {
//!     names: Vec<&'n str>,
//! }
//!
//! impl<'n> Visitor<'n, Value> for NameCollector<'n> {
//!     fn enter_node(&mut self, node: &'n Value) {
//!         if node.tag() == "NAME" {
//!             self.names.extend(node.label());
//!         }
//!     }
//! }
//!
//! // Array<string>
//! let ast = json!({
//!     "type": "GENERIC",
//!     "subject": { "type": "NAME", "name": "Array" },
//!     "objects": [{ "type": "NAME", "name": "string" }],
//!     "meta": { "syntax": "ANGLE_BRACKET" }
//! });
//!
//! let mut collector = NameCollector { names: Vec::new() };
//! walk_node(&mut collector, &ast).unwrap();
//! assert_eq!(collector.names, vec!["Array", "string"]);
//! ```

use crate::{SyntaxNode, TraverseError};

use super::walk::walk_node;

/// Visitor trait for traversing type expression nodes without modification.
///
/// # Lifetime
///
/// The `'n` lifetime is the borrow of the tree being walked, so visitors may
/// keep references to visited nodes.
///
/// # Ordering
///
/// `enter_node` runs before any hook of a descendant and `leave_node` after
/// every hook of a descendant. Children are visited in schema order.
pub trait Visitor<'n, N> {
    /// Called before visiting the node's children.
    #[inline]
    fn enter_node(&mut self, _node: &'n N) {}

    /// Called after visiting the node and all its children.
    #[inline]
    fn leave_node(&mut self, _node: &'n N) {}
}

/// One callback invocation recorded by [`collect_events`].
#[derive(Debug)]
pub enum Event<'n, N> {
    /// The node was entered.
    Enter(&'n N),
    /// The node was left.
    Leave(&'n N),
}

impl<N> Clone for Event<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for Event<'_, N> {}

impl<'n, N> Event<'n, N> {
    /// Returns the node this event refers to.
    #[inline]
    pub fn node(&self) -> &'n N {
        match *self {
            Event::Enter(node) | Event::Leave(node) => node,
        }
    }

    /// Returns true for [`Event::Enter`].
    #[inline]
    pub fn is_enter(&self) -> bool {
        matches!(self, Event::Enter(_))
    }
}

struct EventRecorder<'n, N> {
    events: Vec<Event<'n, N>>,
}

impl<'n, N> Visitor<'n, N> for EventRecorder<'n, N> {
    fn enter_node(&mut self, node: &'n N) {
        self.events.push(Event::Enter(node));
    }

    fn leave_node(&mut self, node: &'n N) {
        self.events.push(Event::Leave(node));
    }
}

/// Walks `node` and returns every enter/leave event in call order.
///
/// # Errors
///
/// Fails like [`walk_node`]; no events are returned on failure.
pub fn collect_events<'n, N>(node: &'n N) -> Result<Vec<Event<'n, N>>, TraverseError>
where
    N: SyntaxNode,
{
    let mut recorder = EventRecorder { events: Vec::new() };
    walk_node(&mut recorder, node)?;
    Ok(recorder.events)
}
