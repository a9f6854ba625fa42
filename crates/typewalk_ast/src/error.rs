//! Traversal error types.

use thiserror::Error;

use crate::{AccessorKind, NodeType};

/// Errors that can occur while traversing a type expression tree.
///
/// Both variants mean the tree handed to the engine breaks its contract.
/// Traversal stops at the first one and nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraverseError {
    /// The node's `type` tag has no schema entry.
    #[error("No schema for node type {tag:?}")]
    SchemaNotFound {
        /// The unrecognized tag.
        tag: String,
    },

    /// A property does not have the shape its schema accessor requires.
    #[error("Malformed {node_type} node: property `{property}` must hold {expected}")]
    MalformedNode {
        /// Type of the offending node.
        node_type: NodeType,
        /// Name of the offending property.
        property: &'static str,
        /// What the schema expects in that property.
        expected: AccessorKind,
    },
}

impl TraverseError {
    /// Creates a schema not found error.
    pub fn schema_not_found(tag: impl Into<String>) -> Self {
        Self::SchemaNotFound { tag: tag.into() }
    }

    /// Creates a malformed node error.
    pub fn malformed(node_type: NodeType, property: &'static str, expected: AccessorKind) -> Self {
        Self::MalformedNode {
            node_type,
            property,
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_not_found_message() {
        let err = TraverseError::schema_not_found("INTERSECTION");
        assert_eq!(err.to_string(), "No schema for node type \"INTERSECTION\"");
    }

    #[test]
    fn test_malformed_message() {
        let err = TraverseError::malformed(NodeType::Union, "left", AccessorKind::Node);
        assert_eq!(
            err.to_string(),
            "Malformed UNION node: property `left` must hold a node"
        );
    }
}
