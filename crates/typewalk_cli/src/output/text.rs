//! Text output formatter

use std::fmt::Write;

use typewalk_ast::{AccessorKind, NodeType};

use crate::config::WalkConfig;
use crate::trace::{Phase, TraceLine, TreeStats};

pub fn render_trace(lines: &[TraceLine<'_>], config: &WalkConfig) -> String {
    let mut out = String::new();

    for line in lines {
        if line.event == Phase::Leave && !config.leave_events {
            continue;
        }

        let phase = match line.event {
            Phase::Enter => "enter",
            Phase::Leave => "leave",
        };
        let indent = " ".repeat(line.depth * config.indent);

        match line.value.filter(|_| config.show_values) {
            Some(value) => {
                writeln!(out, "{}{} {} {}", indent, phase, line.node_type, value).ok();
            }
            None => {
                writeln!(out, "{}{} {}", indent, phase, line.node_type).ok();
            }
        }
    }

    out
}

pub fn render_stats(stats: &TreeStats<'_>) -> String {
    let mut out = String::new();
    writeln!(out, "Nodes: {}", stats.nodes).ok();
    writeln!(out, "Depth: {}", stats.depth).ok();
    writeln!(out).ok();

    let mut types: Vec<_> = stats.types.iter().collect();
    types.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));

    let width = types.iter().map(|(tag, _)| tag.len()).max().unwrap_or(0);
    for (tag, count) in types {
        writeln!(out, "{:<width$} | {}", tag, count, width = width).ok();
    }

    out
}

pub fn render_schema(node_types: &[NodeType]) -> String {
    let mut out = String::new();

    for node_type in node_types {
        writeln!(out, "{}", node_type).ok();
        for accessor in node_type.schema() {
            let kind = match accessor.kind() {
                AccessorKind::Node => "node",
                AccessorKind::NullableNode => "node?",
                AccessorKind::NodeList => "node[]",
            };
            writeln!(out, "  {}: {}", accessor.property(), kind).ok();
        }
    }

    out
}
