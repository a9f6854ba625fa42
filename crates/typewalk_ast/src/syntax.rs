//! Read access to externally produced nodes.
//!
//! The traversal engine never builds or owns nodes. It reads them through
//! [`SyntaxNode`], which is implemented for arena-allocated
//! [`TypeNode`](crate::TypeNode)s and for JSON ASTs (`serde_json::Value`).

use crate::{NodeType, TraverseError};

/// The raw contents of one node property, as seen by the engine.
#[derive(Debug)]
pub enum Property<'n, N> {
    /// The property is missing or null.
    Absent,
    /// The property holds a single node.
    Node(&'n N),
    /// The property holds an ordered sequence of nodes.
    List(&'n [N]),
    /// The property holds something that is neither a node nor a sequence.
    Invalid,
}

// Manual impls: deriving would require `N: Clone`.
impl<N> Clone for Property<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for Property<'_, N> {}

/// A node of a type expression tree.
///
/// Implementors only describe what is there; shape checks against the schema
/// registry are done by the engine.
pub trait SyntaxNode: Sized {
    /// Returns the raw `type` discriminant of this node.
    fn tag(&self) -> &str;

    /// Returns the node type, or [`TraverseError::SchemaNotFound`] if the tag
    /// is not a known node type.
    fn node_type(&self) -> Result<NodeType, TraverseError> {
        self.tag().parse()
    }

    /// Reads the property `name`.
    fn property(&self, name: &str) -> Property<'_, Self>;

    /// Returns the scalar payload of a leaf-like node (identifier, literal,
    /// record key), if any.
    fn label(&self) -> Option<&str> {
        None
    }
}
