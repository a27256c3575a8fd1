//! Wire contract of the external path-finding service.
//!
//! Two operations over a request/response boundary: longest path over a
//! variant's edges, and shortest path between two of its nodes. Both answer
//! with a JSON array of labels in traversal order. The transport itself is
//! the embedding application's concern; this module builds request bodies
//! and decodes responses.
//!
//! The contract is fixed to the structured shape
//! `{edges: [{source, target}], nodes: [..], numOfVariants: n}`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use tetragraph_core::VariantGraph;

/// One directed edge on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireEdge {
    pub source: String,
    pub target: String,
}

/// Body of a longest-path request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LongestPathRequest {
    pub edges: Vec<WireEdge>,
    pub nodes: Vec<String>,
    pub num_of_variants: u8,
}

/// Body of a shortest-path request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortestPathRequest {
    pub edges: Vec<WireEdge>,
    pub nodes: Vec<String>,
    pub source: String,
    pub target: String,
    pub num_of_variants: u8,
}

/// Outcome of a successful path request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    /// Labels in traversal order.
    Path(Vec<String>),
    /// The endpoints exist but no path connects them. A valid result, not a
    /// failure.
    NoPath,
}

fn wire_edges(graph: &VariantGraph) -> Vec<WireEdge> {
    graph
        .edges
        .iter()
        .map(|(source, target)| WireEdge {
            source: source.clone(),
            target: target.clone(),
        })
        .collect()
}

fn check_loaded(graph: &VariantGraph) -> Result<()> {
    if graph.nodes.is_empty() {
        return Err(Error::NoNodes);
    }
    if graph.edges.is_empty() {
        return Err(Error::NoEdges);
    }
    Ok(())
}

/// Builds a longest-path request over the given variant's edges.
pub fn build_longest_path_request(
    graph: &VariantGraph,
    num_of_variants: u8,
) -> Result<LongestPathRequest> {
    check_loaded(graph)?;
    debug!(edges = graph.edges.len(), "building longest-path request");
    Ok(LongestPathRequest {
        edges: wire_edges(graph),
        nodes: graph.nodes.clone(),
        num_of_variants,
    })
}

/// Builds a shortest-path request, checking every local precondition before
/// anything goes on the wire. Each failure carries its own actionable
/// reason: endpoints required, endpoints distinct, endpoints present.
pub fn build_shortest_path_request(
    graph: &VariantGraph,
    num_of_variants: u8,
    source: &str,
    target: &str,
) -> Result<ShortestPathRequest> {
    if source.is_empty() || target.is_empty() {
        return Err(Error::EndpointsRequired);
    }
    if source == target {
        return Err(Error::SameEndpoints);
    }
    check_loaded(graph)?;
    if !graph.nodes.iter().any(|n| n == source) {
        return Err(Error::MissingSource(source.to_string()));
    }
    if !graph.nodes.iter().any(|n| n == target) {
        return Err(Error::MissingTarget(target.to_string()));
    }
    debug!(source, target, "building shortest-path request");
    Ok(ShortestPathRequest {
        edges: wire_edges(graph),
        nodes: graph.nodes.clone(),
        source: source.to_string(),
        target: target.to_string(),
        num_of_variants,
    })
}

/// Decodes a path response.
///
/// Non-success statuses surface as [`Error::Backend`] with the raw body; a
/// success body that is not a JSON array of labels is
/// [`Error::MalformedResponse`]. An empty array is the no-path outcome.
pub fn decode_path_response(status: u16, body: &str) -> Result<PathOutcome> {
    if !(200..300).contains(&status) {
        return Err(Error::Backend {
            status,
            body: body.to_string(),
        });
    }
    let labels: Vec<String> =
        serde_json::from_str(body).map_err(|_| Error::MalformedResponse)?;
    if labels.is_empty() {
        Ok(PathOutcome::NoPath)
    } else {
        Ok(PathOutcome::Path(labels))
    }
}
