//! Output formatting module

mod json;
mod text;

use miette::Result;
use typewalk_ast::NodeType;

use crate::config::{OutputFormat, WalkConfig};
use crate::trace::{TraceLine, TreeStats};

pub fn output_trace(lines: &[TraceLine<'_>], config: &WalkConfig) -> Result<()> {
    match config.format {
        OutputFormat::Json => println!("{}", json::render_trace(lines, config)?),
        OutputFormat::Text => print!("{}", text::render_trace(lines, config)),
    }
    Ok(())
}

pub fn output_stats(stats: &TreeStats<'_>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", json::render_stats(stats)?),
        OutputFormat::Text => print!("{}", text::render_stats(stats)),
    }
    Ok(())
}

pub fn output_schema(node_types: &[NodeType], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", json::render_schema(node_types)?),
        OutputFormat::Text => print!("{}", text::render_schema(node_types)),
    }
    Ok(())
}
