//! CSV bodies handed to an external file-save collaborator.
//!
//! The text is bit-exact: rows joined with `\n`, no trailing newline.

use crate::model::{MergedGraph, VariantGraph};

/// Merged view: `Source,Target,Label` with the membership label quoted.
pub fn merged_view_csv(graph: &MergedGraph) -> String {
    let mut lines = Vec::with_capacity(graph.edges.len() + 1);
    lines.push("Source,Target,Label".to_string());
    for edge in &graph.edges {
        lines.push(format!(
            "{},{},\"{}\"",
            edge.source,
            edge.target,
            edge.membership.label()
        ));
    }
    lines.join("\n")
}

/// Single-variant view: `Source,Target` with raw base labels, unquoted.
pub fn single_view_csv(graph: &VariantGraph) -> String {
    let mut lines = Vec::with_capacity(graph.edges.len() + 1);
    lines.push("Source,Target".to_string());
    for (source, target) in &graph.edges {
        lines.push(format!("{source},{target}"));
    }
    lines.join("\n")
}
