//! JSON output formatter

use miette::{IntoDiagnostic, Result};
use serde_json::json;
use typewalk_ast::NodeType;

use crate::config::WalkConfig;
use crate::trace::{Phase, TraceLine, TreeStats};

pub fn render_trace(lines: &[TraceLine<'_>], config: &WalkConfig) -> Result<String> {
    let output: Vec<_> = lines
        .iter()
        .filter(|line| config.leave_events || line.event == Phase::Enter)
        .map(|line| TraceLine {
            value: line.value.filter(|_| config.show_values),
            ..line.clone()
        })
        .collect();

    serde_json::to_string_pretty(&output).into_diagnostic()
}

pub fn render_stats(stats: &TreeStats<'_>) -> Result<String> {
    serde_json::to_string_pretty(stats).into_diagnostic()
}

pub fn render_schema(node_types: &[NodeType]) -> Result<String> {
    let output: Vec<_> = node_types
        .iter()
        .map(|node_type| {
            let properties: Vec<_> = node_type
                .schema()
                .iter()
                .map(|accessor| json!({ "name": accessor.property(), "kind": accessor.kind() }))
                .collect();
            json!({ "type": node_type, "properties": properties })
        })
        .collect();

    serde_json::to_string_pretty(&output).into_diagnostic()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{stats, trace};
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    #[test]
    fn render_trace_as_array() {
        let ast = json!({ "type": "OPTIONAL", "value": { "type": "NAME", "name": "T" } });
        let lines = trace(&ast).unwrap();

        let rendered: Value =
            serde_json::from_str(&render_trace(&lines, &WalkConfig::default()).unwrap()).unwrap();

        assert_eq!(
            rendered,
            json!([
                { "event": "enter", "type": "OPTIONAL", "depth": 0 },
                { "event": "enter", "type": "NAME", "depth": 1, "value": "T" },
                { "event": "leave", "type": "NAME", "depth": 1, "value": "T" },
                { "event": "leave", "type": "OPTIONAL", "depth": 0 }
            ])
        );
    }

    #[test]
    fn render_trace_respects_config() {
        let ast = json!({ "type": "OPTIONAL", "value": { "type": "NAME", "name": "T" } });
        let lines = trace(&ast).unwrap();
        let config = WalkConfig {
            show_values: false,
            leave_events: false,
            ..WalkConfig::default()
        };

        let rendered: Value =
            serde_json::from_str(&render_trace(&lines, &config).unwrap()).unwrap();

        assert_eq!(
            rendered,
            json!([
                { "event": "enter", "type": "OPTIONAL", "depth": 0 },
                { "event": "enter", "type": "NAME", "depth": 1 }
            ])
        );
    }

    #[test]
    fn render_stats_object() {
        let ast = json!({ "type": "RECORD", "entries": [
            { "type": "RECORD_ENTRY", "key": "a", "value": { "type": "ANY" } }
        ]});
        let stats = stats(&ast).unwrap();

        let rendered: Value = serde_json::from_str(&render_stats(&stats).unwrap()).unwrap();

        assert_eq!(
            rendered,
            json!({
                "nodes": 3,
                "depth": 3,
                "types": { "ANY": 1, "RECORD": 1, "RECORD_ENTRY": 1 }
            })
        );
    }

    #[test]
    fn render_schema_entries() {
        let rendered: Value =
            serde_json::from_str(&render_schema(&[NodeType::Generic]).unwrap()).unwrap();

        assert_eq!(
            rendered,
            json!([{
                "type": "GENERIC",
                "properties": [
                    { "name": "subject", "kind": "node" },
                    { "name": "objects", "kind": "node_list" }
                ]
            }])
        );
    }
}
