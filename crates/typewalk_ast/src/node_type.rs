//! Node type tags for type expression ASTs.
//!
//! The wire names match the `type` discriminant JSDoc type parsers put on
//! every node (`"UNION"`, `"RECORD_ENTRY"`, ...).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TraverseError;

/// Node types for type expression ASTs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    // Names and members
    /// Type name (`string`, `Foo`).
    Name,
    /// Named parameter with an optional type (`a: string`).
    NamedParameter,
    /// Static member (`Foo.Bar`).
    Member,
    /// Inner member (`Foo~Bar`).
    InnerMember,
    /// Instance member (`Foo#bar`).
    InstanceMember,

    // Composite types
    /// Union (`A|B`).
    Union,
    /// Record type (`{a: A, b}`).
    Record,
    /// Entry of a record type.
    RecordEntry,
    /// Tuple type (`[A, B]`).
    Tuple,
    /// Generic type (`Array<T>`).
    Generic,
    /// Function type (`function(A): B`).
    Function,
    /// Arrow function type (`(a: A) => B`).
    Arrow,

    // Modifiers
    /// Optional type (`A=`).
    Optional,
    /// Nullable type (`?A`).
    Nullable,
    /// Non-nullable type (`!A`).
    NotNullable,
    /// Variadic type (`...A`).
    Variadic,
    /// Module path (`module:foo/bar`).
    Module,
    /// External (`external:Foo`).
    External,
    /// Parenthesized type (`(A)`).
    Parenthesis,
    /// Type query (`typeof foo`).
    TypeQuery,
    /// Import type (`import("./foo")`).
    Import,

    // Leaves
    /// All type (`*`).
    Any,
    /// Unknown type (`?`).
    Unknown,
    /// String literal type.
    StringValue,
    /// Number literal type.
    NumberValue,
    /// File path segment of a module.
    FilePath,
}

impl NodeType {
    /// Every node type, in declaration order.
    pub const ALL: [NodeType; 26] = [
        NodeType::Name,
        NodeType::NamedParameter,
        NodeType::Member,
        NodeType::InnerMember,
        NodeType::InstanceMember,
        NodeType::Union,
        NodeType::Record,
        NodeType::RecordEntry,
        NodeType::Tuple,
        NodeType::Generic,
        NodeType::Function,
        NodeType::Arrow,
        NodeType::Optional,
        NodeType::Nullable,
        NodeType::NotNullable,
        NodeType::Variadic,
        NodeType::Module,
        NodeType::External,
        NodeType::Parenthesis,
        NodeType::TypeQuery,
        NodeType::Import,
        NodeType::Any,
        NodeType::Unknown,
        NodeType::StringValue,
        NodeType::NumberValue,
        NodeType::FilePath,
    ];

    /// Returns the wire name of this node type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            NodeType::Name => "NAME",
            NodeType::NamedParameter => "NAMED_PARAMETER",
            NodeType::Member => "MEMBER",
            NodeType::InnerMember => "INNER_MEMBER",
            NodeType::InstanceMember => "INSTANCE_MEMBER",
            NodeType::Union => "UNION",
            NodeType::Record => "RECORD",
            NodeType::RecordEntry => "RECORD_ENTRY",
            NodeType::Tuple => "TUPLE",
            NodeType::Generic => "GENERIC",
            NodeType::Function => "FUNCTION",
            NodeType::Arrow => "ARROW",
            NodeType::Optional => "OPTIONAL",
            NodeType::Nullable => "NULLABLE",
            NodeType::NotNullable => "NOT_NULLABLE",
            NodeType::Variadic => "VARIADIC",
            NodeType::Module => "MODULE",
            NodeType::External => "EXTERNAL",
            NodeType::Parenthesis => "PARENTHESIS",
            NodeType::TypeQuery => "TYPE_QUERY",
            NodeType::Import => "IMPORT",
            NodeType::Any => "ANY",
            NodeType::Unknown => "UNKNOWN",
            NodeType::StringValue => "STRING_VALUE",
            NodeType::NumberValue => "NUMBER_VALUE",
            NodeType::FilePath => "FILE_PATH",
        }
    }

    /// Returns true if nodes of this type never have children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.schema().is_empty()
    }

    /// Returns the property holding this node type's scalar payload in JSON
    /// ASTs (`name` of a `NAME`, `key` of a `RECORD_ENTRY`, ...).
    pub const fn label_key(&self) -> Option<&'static str> {
        match self {
            NodeType::Name
            | NodeType::NamedParameter
            | NodeType::Member
            | NodeType::InnerMember
            | NodeType::InstanceMember => Some("name"),
            NodeType::RecordEntry => Some("key"),
            NodeType::StringValue => Some("string"),
            NodeType::NumberValue => Some("number"),
            NodeType::FilePath => Some("path"),
            _ => None,
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = TraverseError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        NodeType::ALL
            .iter()
            .copied()
            .find(|node_type| node_type.as_str() == tag)
            .ok_or_else(|| TraverseError::schema_not_found(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(NodeType::Name, "NAME")]
    #[case(NodeType::RecordEntry, "RECORD_ENTRY")]
    #[case(NodeType::NotNullable, "NOT_NULLABLE")]
    #[case(NodeType::TypeQuery, "TYPE_QUERY")]
    #[case(NodeType::FilePath, "FILE_PATH")]
    fn test_display(#[case] node_type: NodeType, #[case] expected: &str) {
        assert_eq!(node_type.to_string(), expected);
    }

    #[test]
    fn test_from_str_agrees_with_display_for_all_types() {
        for node_type in NodeType::ALL {
            let parsed: NodeType = node_type.as_str().parse().unwrap();
            assert_eq!(parsed, node_type);
        }
    }

    #[test]
    fn test_all_has_no_duplicates() {
        let mut sorted = NodeType::ALL.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), NodeType::ALL.len());
    }

    #[rstest]
    #[case("")]
    #[case("name")]
    #[case("INTERSECTION")]
    fn test_from_str_rejects_unknown_tags(#[case] tag: &str) {
        let err = tag.parse::<NodeType>().unwrap_err();
        assert!(matches!(err, TraverseError::SchemaNotFound { tag: ref t } if t == tag));
    }

    #[test]
    fn test_serde_matches_wire_names() {
        for node_type in NodeType::ALL {
            let json = serde_json::to_string(&node_type).unwrap();
            assert_eq!(json, format!("\"{}\"", node_type.as_str()));
        }

        let node_type: NodeType = serde_json::from_str("\"NAMED_PARAMETER\"").unwrap();
        assert_eq!(node_type, NodeType::NamedParameter);
    }

    #[test]
    fn test_is_leaf() {
        assert!(NodeType::Name.is_leaf());
        assert!(NodeType::Any.is_leaf());
        assert!(NodeType::FilePath.is_leaf());
        assert!(!NodeType::Union.is_leaf());
        assert!(!NodeType::Record.is_leaf());
    }
}
