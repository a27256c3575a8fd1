//! Path selection translation.
//!
//! An externally computed path is a plain label sequence; turning it into
//! highlightable render identifiers depends on the active display mode. In
//! separated and overlaid views the same path is marked on every visible
//! sub-graph.

use tracing::debug;

use crate::ident::qualify;
use crate::model::{Membership, VariantTag, ViewContext};

/// Translates a path into the highlight-identifier set for `context`.
///
/// An empty path is the canonical clear-highlight signal and yields an
/// empty set. Never fails.
pub fn translate(path: &[String], context: ViewContext, active: Membership) -> Vec<String> {
    if path.is_empty() {
        return Vec::new();
    }
    debug!(len = path.len(), ?context, "translating path selection");

    match context {
        ViewContext::Single(tag) => path.iter().map(|l| qualify(l, tag, context)).collect(),
        ViewContext::Separated | ViewContext::Overlaid => {
            let mut ids = Vec::with_capacity(path.len() * active.len());
            for tag in active.tags() {
                ids.extend(path.iter().map(|l| qualify(l, tag, context)));
            }
            ids
        }
        // Variant-agnostic: one id per union node.
        ViewContext::Merged => path
            .iter()
            .map(|l| qualify(l, VariantTag::O, context))
            .collect(),
    }
}

/// Whether an edge lies on the path: its endpoints match some consecutive
/// path pair, in either direction.
///
/// Edge emphasis is derived by renderers with this predicate against the
/// untranslated path; [`translate`] emits node identifiers only.
pub fn edge_on_path(path: &[String], source_base: &str, target_base: &str) -> bool {
    path.windows(2).any(|pair| {
        (pair[0] == source_base && pair[1] == target_base)
            || (pair[0] == target_base && pair[1] == source_base)
    })
}
