//! Mermaid flowchart rendering of upgrade graphs.
//!
//! The output is grouped into sections separated by a blank line, in this
//! order: nodes, replaces edges, skip edges, style directives. Empty
//! sections produce no lines.
//!
//! ```text
//! graph RL
//!   v1
//!   v3
//!
//!   v3 == replaces ==> v1
//!
//!   v3 -- skips --> v2
//!
//!   style v2 fill:#ccc,stroke:#666,stroke-width:1px,color:#666,stroke-dasharray: 4
//! ```

use std::fmt::Write;

use log::debug;

use chanviz_core::graph::GraphDescription;

use crate::config::{AppConfig, Direction, TombstoneStyle};

const INDENT: &str = "  ";

/// Renders a [`GraphDescription`] as Mermaid flowchart text.
#[derive(Debug, Clone, Default)]
pub struct DiagramRenderer {
    direction: Direction,
    tombstone_style: TombstoneStyle,
}

impl DiagramRenderer {
    /// Creates a renderer using the graph and style settings of `config`.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            direction: config.graph().direction(),
            tombstone_style: config.style().tombstone().clone(),
        }
    }

    /// Renders `graph` to text without a trailing newline.
    pub fn render(&self, graph: &GraphDescription<'_>) -> String {
        let sections = [
            graph
                .nodes()
                .iter()
                .map(|node| format!("{INDENT}{node}"))
                .collect::<Vec<_>>(),
            graph
                .replaces_edges()
                .iter()
                .map(|edge| format!("{INDENT}{} == replaces ==> {}", edge.newer(), edge.older()))
                .collect(),
            graph
                .skip_edges()
                .iter()
                .map(|edge| format!("{INDENT}{} -- skips --> {}", edge.to(), edge.from()))
                .collect(),
            graph
                .styled_nodes()
                .iter()
                .map(|node| format!("{INDENT}style {node} {}", self.tombstone_style))
                .collect(),
        ];

        let mut out = String::new();
        writeln!(out, "graph {}", self.direction).expect("Writing to String buffer is infallible");
        for (idx, lines) in sections.iter().filter(|s| !s.is_empty()).enumerate() {
            if idx > 0 {
                out.push('\n');
            }
            for line in lines {
                out.push_str(line);
                out.push('\n');
            }
        }
        out.truncate(out.trim_end().len());

        debug!(bytes = out.len(); "Diagram rendered");
        out
    }
}
