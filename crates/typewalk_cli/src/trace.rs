//! Enter/leave traces and tree statistics for JSON ASTs.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use typewalk_ast::visitor::{Visitor, collect_events, walk_node};
use typewalk_ast::{SyntaxNode, TraverseError};

/// Which side of a node a [`TraceLine`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Enter,
    Leave,
}

/// One callback of a walk, with the depth of the node (root is 0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceLine<'n> {
    pub event: Phase,
    #[serde(rename = "type")]
    pub node_type: &'n str,
    pub depth: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<&'n str>,
}

/// Walks `ast` and returns its enter/leave sequence.
pub fn trace(ast: &Value) -> Result<Vec<TraceLine<'_>>, TraverseError> {
    let events = collect_events(ast)?;
    let mut depth = 0;

    Ok(events
        .into_iter()
        .map(|event| {
            let node = event.node();
            let phase = if event.is_enter() {
                depth += 1;
                Phase::Enter
            } else {
                depth -= 1;
                Phase::Leave
            };
            TraceLine {
                event: phase,
                node_type: node.tag(),
                depth: if phase == Phase::Enter { depth - 1 } else { depth },
                value: node.label(),
            }
        })
        .collect())
}

/// Node counts of one tree.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeStats<'n> {
    /// Total number of nodes.
    pub nodes: usize,
    /// Number of levels; a lone leaf has depth 1.
    pub depth: usize,
    /// Node count per tag.
    pub types: BTreeMap<&'n str, usize>,
}

#[derive(Default)]
struct StatsCollector<'n> {
    current: usize,
    stats: TreeStats<'n>,
}

impl<'n> Visitor<'n, Value> for StatsCollector<'n> {
    fn enter_node(&mut self, node: &'n Value) {
        self.current += 1;
        self.stats.nodes += 1;
        self.stats.depth = self.stats.depth.max(self.current);
        *self.stats.types.entry(node.tag()).or_default() += 1;
    }

    fn leave_node(&mut self, _node: &'n Value) {
        self.current -= 1;
    }
}

/// Counts the nodes of `ast`.
pub fn stats(ast: &Value) -> Result<TreeStats<'_>, TraverseError> {
    let mut collector = StatsCollector::default();
    walk_node(&mut collector, ast)?;
    Ok(collector.stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> Value {
        // Array<string|number>
        json!({
            "type": "GENERIC",
            "subject": { "type": "NAME", "name": "Array" },
            "objects": [{
                "type": "UNION",
                "left": { "type": "NAME", "name": "string" },
                "right": { "type": "NAME", "name": "number" }
            }],
            "meta": { "syntax": "ANGLE_BRACKET" }
        })
    }

    #[test]
    fn trace_tracks_depth() {
        let ast = sample();
        let lines = trace(&ast).unwrap();
        let rendered: Vec<_> = lines
            .iter()
            .map(|line| (line.event, line.node_type, line.depth, line.value))
            .collect();

        assert_eq!(
            rendered,
            vec![
                (Phase::Enter, "GENERIC", 0, None),
                (Phase::Enter, "NAME", 1, Some("Array")),
                (Phase::Leave, "NAME", 1, Some("Array")),
                (Phase::Enter, "UNION", 1, None),
                (Phase::Enter, "NAME", 2, Some("string")),
                (Phase::Leave, "NAME", 2, Some("string")),
                (Phase::Enter, "NAME", 2, Some("number")),
                (Phase::Leave, "NAME", 2, Some("number")),
                (Phase::Leave, "UNION", 1, None),
                (Phase::Leave, "GENERIC", 0, None),
            ]
        );
    }

    #[test]
    fn stats_counts_nodes_per_type() {
        let ast = sample();
        let stats = stats(&ast).unwrap();

        assert_eq!(stats.nodes, 5);
        assert_eq!(stats.depth, 3);
        assert_eq!(
            stats.types,
            BTreeMap::from([("GENERIC", 1), ("NAME", 3), ("UNION", 1)])
        );
    }

    #[test]
    fn stats_of_single_leaf() {
        let ast = json!({ "type": "ANY" });
        let stats = stats(&ast).unwrap();

        assert_eq!(stats.nodes, 1);
        assert_eq!(stats.depth, 1);
    }

    #[test]
    fn trace_fails_on_unknown_tag() {
        let ast = json!({ "type": "OPTIONAL", "value": { "type": "MYSTERY" } });
        assert_eq!(
            trace(&ast),
            Err(TraverseError::schema_not_found("MYSTERY"))
        );
    }
}
