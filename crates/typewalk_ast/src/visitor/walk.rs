//! Walk functions for type expression traversal.
//!
//! These functions are the traversal engine: they resolve each node's schema
//! entry, read its children in declared order and recurse depth-first.

use tracing::{debug, trace};

use crate::{Accessor, NodeType, Property, SyntaxNode, TraverseError};

use super::visit::Visitor;

/// Walks `node` and its descendants depth-first.
///
/// For every node this function:
/// 1. Resolves the node's schema entry from its `type` tag
/// 2. Calls `enter_node` on the visitor
/// 3. Reads the children listed by that entry, in declared order
/// 4. Walks each child
/// 5. Calls `leave_node` on the visitor
///
/// A node with an unknown tag is never entered. A node with a malformed
/// property is entered but never left.
///
/// The tree must be acyclic. Hooks must not mutate the tree being walked.
///
/// # Errors
///
/// - [`TraverseError::SchemaNotFound`] if a node's tag is unknown
/// - [`TraverseError::MalformedNode`] if a property does not have the shape
///   its schema accessor requires
///
/// The first error aborts the whole walk; hooks already called are not
/// undone and no further hooks run.
pub fn walk_node<'n, N, V>(visitor: &mut V, node: &'n N) -> Result<(), TraverseError>
where
    N: SyntaxNode,
    V: Visitor<'n, N> + ?Sized,
{
    let node_type = resolve(node)?;

    trace!(%node_type, "enter");
    visitor.enter_node(node);

    let children = read_children(node, node_type)?;
    for child in children {
        walk_node(visitor, child)?;
    }

    visitor.leave_node(node);
    Ok(())
}

/// Traverses `node` with optional enter and leave callbacks.
///
/// Either callback may be `None`. See [`walk_node`] for ordering and error
/// behavior.
///
/// # Example
///
/// ```rust
/// use typewalk_ast::{SyntaxNode, traverse};
/// use serde_json::json;
///
/// let ast = json!({
///     "type": "UNION",
///     "left": { "type": "NAME", "name": "string" },
///     "right": { "type": "NAME", "name": "number" }
/// });
///
/// let mut left = Vec::new();
/// traverse(&ast, None, Some(&mut |node: &serde_json::Value| left.push(node.tag().to_string())))
///     .unwrap();
/// assert_eq!(left, vec!["NAME", "NAME", "UNION"]);
/// ```
pub fn traverse<'n, N>(
    node: &'n N,
    on_enter: Option<&mut dyn FnMut(&'n N)>,
    on_leave: Option<&mut dyn FnMut(&'n N)>,
) -> Result<(), TraverseError>
where
    N: SyntaxNode,
{
    let mut callbacks = Callbacks { on_enter, on_leave };
    walk_node(&mut callbacks, node)
}

/// Returns the immediate children of `node` in visitation order.
///
/// # Errors
///
/// Same as [`walk_node`], for this node only.
pub fn children<'n, N>(node: &'n N) -> Result<Vec<&'n N>, TraverseError>
where
    N: SyntaxNode,
{
    let node_type = resolve(node)?;
    read_children(node, node_type)
}

struct Callbacks<'a, 'b, 'n, N> {
    on_enter: Option<&'a mut dyn FnMut(&'n N)>,
    on_leave: Option<&'b mut dyn FnMut(&'n N)>,
}

impl<'n, N> Visitor<'n, N> for Callbacks<'_, '_, 'n, N> {
    fn enter_node(&mut self, node: &'n N) {
        if let Some(on_enter) = self.on_enter.as_deref_mut() {
            on_enter(node);
        }
    }

    fn leave_node(&mut self, node: &'n N) {
        if let Some(on_leave) = self.on_leave.as_deref_mut() {
            on_leave(node);
        }
    }
}

fn resolve<N: SyntaxNode>(node: &N) -> Result<NodeType, TraverseError> {
    node.node_type().inspect_err(|_| {
        debug!(tag = node.tag(), "No schema for node type");
    })
}

fn read_children<'n, N>(node: &'n N, node_type: NodeType) -> Result<Vec<&'n N>, TraverseError>
where
    N: SyntaxNode,
{
    let mut children = Vec::new();

    for accessor in node_type.schema() {
        match (accessor, node.property(accessor.property())) {
            (Accessor::Node(_) | Accessor::NullableNode(_), Property::Node(child)) => {
                children.push(child)
            }
            (Accessor::NullableNode(_), Property::Absent) => {}
            (Accessor::NodeList(_), Property::List(items)) => children.extend(items),
            _ => {
                debug!(%node_type, property = accessor.property(), "Malformed node");
                return Err(TraverseError::malformed(
                    node_type,
                    accessor.property(),
                    accessor.kind(),
                ));
            }
        }
    }

    Ok(children)
}
