//! View identity namespacing.
//!
//! Each display mode renders its own copy of the graphs, so render
//! identifiers must be namespaced per mode to stay collision-free.
//! Identifiers are typed values carrying their parts explicitly; the base
//! label is never recovered by parsing a rendered string.
//!
//! Suffix table: `O`→`o`, `1`→`a1`, `2`→`a2`, `3`→`a3`. Context
//! decorations: single = none, separated = `_sep`, overlaid = `_overlay`,
//! merged = `_merged` (variant-agnostic).

use serde::Serialize;

use crate::model::{VariantGraph, VariantTag, ViewContext};
use crate::style;

fn decoration(context: ViewContext) -> &'static str {
    match context {
        ViewContext::Single(_) => "",
        ViewContext::Separated => "_sep",
        ViewContext::Overlaid => "_overlay",
        ViewContext::Merged => "_merged",
    }
}

/// A namespaced node identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub base: String,
    /// `None` in the merged context, which is variant-agnostic.
    pub tag: Option<VariantTag>,
    pub context: ViewContext,
}

impl NodeId {
    /// Builds the identifier for `base` as seen by `context`. The tag is
    /// dropped in the merged context and defaults to the context's own tag
    /// in a single view.
    pub fn qualify(base: impl Into<String>, tag: VariantTag, context: ViewContext) -> Self {
        let tag = match context {
            ViewContext::Merged => None,
            _ => Some(tag),
        };
        Self {
            base: base.into(),
            tag,
            context,
        }
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.context, self.tag) {
            (ViewContext::Merged, _) | (_, None) => write!(f, "{}_merged", self.base),
            (context, Some(tag)) => {
                write!(f, "{}{}{}", self.base, tag.suffix(), decoration(context))
            }
        }
    }
}

/// A namespaced edge identifier.
///
/// `index` is the edge's position within its variant's edge list (or within
/// the merged edge list), disambiguating parallel edges.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeId {
    pub source_base: String,
    pub target_base: String,
    pub tag: Option<VariantTag>,
    pub index: usize,
    pub context: ViewContext,
}

impl EdgeId {
    pub fn qualify(
        source_base: impl Into<String>,
        target_base: impl Into<String>,
        tag: VariantTag,
        index: usize,
        context: ViewContext,
    ) -> Self {
        let tag = match context {
            ViewContext::Merged => None,
            _ => Some(tag),
        };
        Self {
            source_base: source_base.into(),
            target_base: target_base.into(),
            tag,
            index,
            context,
        }
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.context, self.tag) {
            (ViewContext::Merged, _) | (_, None) => write!(
                f,
                "{}-{}_merged_{}",
                self.source_base, self.target_base, self.index
            ),
            (context, Some(tag)) => {
                let sfx = tag.suffix();
                write!(
                    f,
                    "{src}{sfx}-{tgt}{sfx}-{sfx}-{idx}{deco}",
                    src = self.source_base,
                    tgt = self.target_base,
                    idx = self.index,
                    deco = decoration(context),
                )
            }
        }
    }
}

/// Convenience form of [`NodeId::qualify`] returning the rendered string.
pub fn qualify(base: &str, tag: VariantTag, context: ViewContext) -> String {
    NodeId::qualify(base, tag, context).to_string()
}

/// A node element ready for a per-variant renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderNode {
    pub id: String,
    pub label: String,
    pub color: &'static str,
}

/// An edge element ready for a per-variant renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub label: String,
}

/// Builds the render nodes of one variant for the given context.
pub fn variant_nodes(graph: &VariantGraph, context: ViewContext) -> Vec<RenderNode> {
    graph
        .nodes
        .iter()
        .map(|base| RenderNode {
            id: qualify(base, graph.tag, context),
            label: base.clone(),
            color: style::variant_color(graph.tag),
        })
        .collect()
}

/// Builds the render edges of one variant for the given context.
///
/// Edge display labels carry the raw endpoint pair (`"{source}-{target}"`).
pub fn variant_edges(graph: &VariantGraph, context: ViewContext) -> Vec<RenderEdge> {
    graph
        .edges
        .iter()
        .enumerate()
        .map(|(index, (source, target))| RenderEdge {
            id: EdgeId::qualify(source, target, graph.tag, index, context).to_string(),
            source: qualify(source, graph.tag, context),
            target: qualify(target, graph.tag, context),
            label: format!("{source}-{target}"),
        })
        .collect()
}
