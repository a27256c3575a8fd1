//! Merge engine: unions N variant graphs into one annotated graph.
//!
//! Nodes are keyed by label, edges by their unordered endpoint pair. Every
//! element records the set of variants it appears in; styling is derived
//! from that membership. Membership sets are independent of the input
//! order; display orientation and edge indices follow first encounter in
//! the supplied order.

use indexmap::IndexMap;
use tracing::debug;

use crate::model::{MergedEdge, MergedGraph, MergedNode, Membership, VariantGraph};
use crate::style;

struct EdgeAcc<'a> {
    source: &'a str,
    target: &'a str,
    membership: Membership,
}

/// Merges the given variant graphs into one annotated union graph.
///
/// A variant with no nodes and no edges contributes nothing. An empty input
/// slice yields an empty graph. Never fails.
pub fn merge(variants: &[VariantGraph]) -> MergedGraph {
    let total = variants.len() as u8;
    debug!(
        variants = variants.len(),
        nodes = variants.iter().map(|v| v.nodes.len()).sum::<usize>(),
        edges = variants.iter().map(|v| v.edges.len()).sum::<usize>(),
        "merging variant graphs"
    );

    let mut node_acc: IndexMap<&str, Membership> = IndexMap::new();
    for variant in variants {
        for label in &variant.nodes {
            node_acc.entry(label.as_str()).or_default().insert(variant.tag);
        }
    }

    // Undirected key: unordered endpoint pair. The first encounter fixes the
    // display orientation; later encounters only extend membership.
    let mut edge_acc: IndexMap<(&str, &str), EdgeAcc<'_>> = IndexMap::new();
    for variant in variants {
        for (source, target) in &variant.edges {
            let (source, target) = (source.as_str(), target.as_str());
            let key = if source <= target { (source, target) } else { (target, source) };
            edge_acc
                .entry(key)
                .or_insert_with(|| EdgeAcc {
                    source,
                    target,
                    membership: Membership::EMPTY,
                })
                .membership
                .insert(variant.tag);
        }
    }

    let nodes = node_acc
        .into_iter()
        .map(|(base, membership)| MergedNode {
            qualified_id: format!("{base}_merged"),
            display_label: format!("{base}({})", membership.label()),
            color: style::node_color(membership, total),
            base: base.to_string(),
            membership,
        })
        .collect();

    let edges = edge_acc
        .into_values()
        .enumerate()
        .map(|(index, acc)| MergedEdge {
            qualified_id: format!("{}-{}_merged_{index}", acc.source, acc.target),
            source: format!("{}_merged", acc.source),
            target: format!("{}_merged", acc.target),
            source_base: acc.source.to_string(),
            target_base: acc.target.to_string(),
            color: style::edge_color(acc.membership, total),
            weight: style::edge_weight(acc.membership, total),
            membership: acc.membership,
        })
        .collect();

    MergedGraph { nodes, edges }
}
