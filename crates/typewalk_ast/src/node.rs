//! TypeNode definition.
//!
//! The arena-allocated node a Rust parser produces for a type expression.

use serde::Serialize;
use serde::ser::SerializeMap;

use crate::{NodeType, Property, Span, SyntaxNode};

/// A node in a type expression tree.
///
/// Child nodes are held in named [`Field`]s whose names match the schema
/// registry (`left`/`right` for a `UNION`, `params` for a `FUNCTION`, ...).
///
/// # Lifetime
///
/// The `'a` lifetime parameter ties this node to its arena allocator,
/// ensuring that all child references remain valid.
///
/// # Example
///
/// ```rust
/// use typewalk_ast::{AstArena, Field, FieldValue, NodeType, Span, TypeNode};
///
/// let arena = AstArena::new();
///
/// // Array<string>
/// let subject = arena.alloc(TypeNode::new_name(Span::new(0, 5), "Array"));
/// let object = TypeNode::new_name(Span::new(6, 12), "string");
/// let objects = arena.alloc_slice_copy(&[object]);
/// let fields = arena.alloc_slice_copy(&[
///     Field::new("subject", FieldValue::Node(subject)),
///     Field::new("objects", FieldValue::List(objects)),
/// ]);
/// let generic = TypeNode::new(NodeType::Generic, Span::new(0, 13), fields);
///
/// assert!(generic.field("subject").is_some());
/// assert!(generic.field("returns").is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TypeNode<'a> {
    /// The type of this node.
    pub node_type: NodeType,

    /// Byte span in the type expression.
    pub span: Span,

    /// Scalar payload (identifier, literal, record key, file path).
    pub value: Option<&'a str>,

    /// Named child properties.
    pub fields: &'a [Field<'a>],
}

/// A named property of a [`TypeNode`].
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    /// Property name.
    pub name: &'a str,
    /// Property contents.
    pub value: FieldValue<'a>,
}

/// Contents of a [`Field`].
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    /// An explicitly empty optional child.
    Null,
    /// A single child node.
    Node(&'a TypeNode<'a>),
    /// An ordered sequence of child nodes.
    List(&'a [TypeNode<'a>]),
}

impl<'a> Field<'a> {
    /// Creates a new field.
    #[inline]
    pub const fn new(name: &'a str, value: FieldValue<'a>) -> Self {
        Self { name, value }
    }
}

impl<'a> TypeNode<'a> {
    /// Creates a node with child fields.
    #[inline]
    pub const fn new(node_type: NodeType, span: Span, fields: &'a [Field<'a>]) -> Self {
        Self {
            node_type,
            span,
            value: None,
            fields,
        }
    }

    /// Creates a leaf node (no fields, no value).
    #[inline]
    pub const fn new_leaf(node_type: NodeType, span: Span) -> Self {
        Self {
            node_type,
            span,
            value: None,
            fields: &[],
        }
    }

    /// Creates a `NAME` node.
    #[inline]
    pub const fn new_name(span: Span, name: &'a str) -> Self {
        Self {
            node_type: NodeType::Name,
            span,
            value: Some(name),
            fields: &[],
        }
    }

    /// Returns this node with its scalar payload set.
    #[inline]
    pub const fn with_value(mut self, value: &'a str) -> Self {
        self.value = Some(value);
        self
    }

    /// Returns the field named `name`, if the node has one.
    pub fn field(&self, name: &str) -> Option<&FieldValue<'a>> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.value)
    }
}

impl<'a> SyntaxNode for TypeNode<'a> {
    fn tag(&self) -> &str {
        self.node_type.as_str()
    }

    fn node_type(&self) -> Result<NodeType, crate::TraverseError> {
        Ok(self.node_type)
    }

    fn property(&self, name: &str) -> Property<'_, Self> {
        match self.field(name) {
            None | Some(FieldValue::Null) => Property::Absent,
            Some(FieldValue::Node(node)) => Property::Node(*node),
            Some(FieldValue::List(nodes)) => Property::List(*nodes),
        }
    }

    fn label(&self) -> Option<&str> {
        self.value
    }
}

impl<'a> Serialize for FieldValue<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            FieldValue::Null => serializer.serialize_none(),
            FieldValue::Node(node) => node.serialize(serializer),
            FieldValue::List(nodes) => nodes.serialize(serializer),
        }
    }
}

/// Serializes to the JSON shape JSDoc type parsers emit, so an arena tree and
/// its JSON form walk identically.
impl<'a> Serialize for TypeNode<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let label_key = self.value.and(self.node_type.label_key());

        let mut len = 2 + self.fields.len(); // type, range
        if label_key.is_some() {
            len += 1;
        }

        let mut state = serializer.serialize_map(Some(len))?;
        state.serialize_entry("type", &self.node_type)?;
        state.serialize_entry("range", &self.span)?;

        if let (Some(key), Some(value)) = (label_key, self.value) {
            state.serialize_entry(key, value)?;
        }

        for field in self.fields {
            state.serialize_entry(field.name, &field.value)?;
        }

        state.end()
    }
}
