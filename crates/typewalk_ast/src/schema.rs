//! Node schema registry.
//!
//! Maps every [`NodeType`] to the ordered list of properties that hold its
//! child nodes. The table is a `'static` match compiled into the binary: it
//! exists before the first traversal and cannot be mutated, so concurrent
//! traversals share it freely.
//!
//! The declared order of each entry is the order in which the traversal
//! engine visits children.

use std::fmt;

use serde::Serialize;

use crate::{NodeType, TraverseError};

/// How a property yields child nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessorKind {
    /// Exactly one node; always visited.
    Node,
    /// A node, or null/absent; visited only when present.
    NullableNode,
    /// An ordered, possibly empty, sequence of nodes.
    NodeList,
}

impl fmt::Display for AccessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AccessorKind::Node => "a node",
            AccessorKind::NullableNode => "a node or null",
            AccessorKind::NodeList => "a list of nodes",
        })
    }
}

/// One child-extraction rule of a schema entry: a property name plus how to
/// read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accessor {
    /// Required child node.
    Node(&'static str),
    /// Optional child node.
    NullableNode(&'static str),
    /// Child node list.
    NodeList(&'static str),
}

impl Accessor {
    /// Returns the property this accessor reads.
    #[inline]
    pub const fn property(&self) -> &'static str {
        match *self {
            Accessor::Node(property)
            | Accessor::NullableNode(property)
            | Accessor::NodeList(property) => property,
        }
    }

    /// Returns the kind of this accessor.
    #[inline]
    pub const fn kind(&self) -> AccessorKind {
        match *self {
            Accessor::Node(_) => AccessorKind::Node,
            Accessor::NullableNode(_) => AccessorKind::NullableNode,
            Accessor::NodeList(_) => AccessorKind::NodeList,
        }
    }
}

use Accessor::{Node, NodeList, NullableNode};

const LEAF: &[Accessor] = &[];
const OWNER: &[Accessor] = &[Node("owner")];
const VALUE: &[Accessor] = &[Node("value")];
const ENTRIES: &[Accessor] = &[NodeList("entries")];
const NAMED_PARAMETER: &[Accessor] = &[NullableNode("typeName")];
const UNION: &[Accessor] = &[Node("left"), Node("right")];
const RECORD_ENTRY: &[Accessor] = &[NullableNode("value")];
const GENERIC: &[Accessor] = &[Node("subject"), NodeList("objects")];
const FUNCTION: &[Accessor] = &[
    NodeList("params"),
    NullableNode("returns"),
    NullableNode("this"),
    NullableNode("new"),
];
const ARROW: &[Accessor] = &[
    NodeList("params"),
    NullableNode("returns"),
    NullableNode("new"),
];
const TYPE_QUERY: &[Accessor] = &[Node("name")];
const IMPORT: &[Accessor] = &[Node("path")];

impl NodeType {
    /// Returns the schema entry for this node type.
    ///
    /// Leaf types return an empty slice.
    pub const fn schema(self) -> &'static [Accessor] {
        match self {
            NodeType::Name => LEAF,
            NodeType::NamedParameter => NAMED_PARAMETER,
            NodeType::Member => OWNER,
            NodeType::InnerMember => OWNER,
            NodeType::InstanceMember => OWNER,
            NodeType::Union => UNION,
            NodeType::Record => ENTRIES,
            NodeType::RecordEntry => RECORD_ENTRY,
            NodeType::Tuple => ENTRIES,
            NodeType::Generic => GENERIC,
            NodeType::Function => FUNCTION,
            NodeType::Arrow => ARROW,
            NodeType::Optional => VALUE,
            NodeType::Nullable => VALUE,
            NodeType::NotNullable => VALUE,
            NodeType::Variadic => VALUE,
            NodeType::Module => VALUE,
            NodeType::External => VALUE,
            NodeType::Parenthesis => VALUE,
            NodeType::TypeQuery => TYPE_QUERY,
            NodeType::Import => IMPORT,
            NodeType::Any => LEAF,
            NodeType::Unknown => LEAF,
            NodeType::StringValue => LEAF,
            NodeType::NumberValue => LEAF,
            NodeType::FilePath => LEAF,
        }
    }
}

/// Looks up the schema entry for a raw `type` tag.
///
/// # Errors
///
/// Returns [`TraverseError::SchemaNotFound`] if `tag` is not a known node
/// type.
///
/// # Example
///
/// ```rust
/// use typewalk_ast::{Accessor, schema_for};
///
/// let schema = schema_for("GENERIC").unwrap();
/// assert_eq!(schema, &[Accessor::Node("subject"), Accessor::NodeList("objects")]);
///
/// assert!(schema_for("INTERSECTION").is_err());
/// ```
pub fn schema_for(tag: &str) -> Result<&'static [Accessor], TraverseError> {
    tag.parse::<NodeType>().map(NodeType::schema)
}
