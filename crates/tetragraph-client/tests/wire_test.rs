use serde_json::json;
use tetragraph_client::{
    Error, PathOutcome, build_longest_path_request, build_shortest_path_request,
    decode_path_response,
};
use tetragraph_core::{VariantGraph, VariantTag};

fn graph() -> VariantGraph {
    VariantGraph::new(
        VariantTag::O,
        vec!["A".into(), "B".into(), "C".into()],
        vec![("A".into(), "B".into()), ("B".into(), "C".into())],
    )
}

#[test]
fn longest_path_request_matches_the_wire_shape() {
    let request = build_longest_path_request(&graph(), 2).unwrap();
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "edges": [
                { "source": "A", "target": "B" },
                { "source": "B", "target": "C" }
            ],
            "nodes": ["A", "B", "C"],
            "numOfVariants": 2
        })
    );
}

#[test]
fn shortest_path_request_adds_the_endpoints() {
    let request = build_shortest_path_request(&graph(), 3, "A", "C").unwrap();
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["source"], "A");
    assert_eq!(value["target"], "C");
    assert_eq!(value["numOfVariants"], 3);
    assert_eq!(value["nodes"], json!(["A", "B", "C"]));
}

#[test]
fn shortest_path_preconditions_fail_before_any_request_exists() {
    let g = graph();

    assert!(matches!(
        build_shortest_path_request(&g, 2, "", "C"),
        Err(Error::EndpointsRequired)
    ));
    let same = build_shortest_path_request(&g, 2, "A", "A").unwrap_err();
    assert!(matches!(same, Error::SameEndpoints));
    assert_eq!(same.to_string(), "source and target nodes cannot be the same");

    assert!(matches!(
        build_shortest_path_request(&g, 2, "X", "C"),
        Err(Error::MissingSource(s)) if s == "X"
    ));
    assert!(matches!(
        build_shortest_path_request(&g, 2, "A", "Y"),
        Err(Error::MissingTarget(t)) if t == "Y"
    ));
}

#[test]
fn unloaded_graphs_are_rejected_with_distinct_reasons() {
    let no_nodes = VariantGraph::new(VariantTag::O, vec![], vec![]);
    assert!(matches!(
        build_longest_path_request(&no_nodes, 2),
        Err(Error::NoNodes)
    ));

    let no_edges = VariantGraph::new(VariantTag::O, vec!["A".into()], vec![]);
    assert!(matches!(
        build_longest_path_request(&no_edges, 2),
        Err(Error::NoEdges)
    ));
}

#[test]
fn success_response_decodes_to_a_traversal_order() {
    let outcome = decode_path_response(200, r#"["A","B","C"]"#).unwrap();
    assert_eq!(
        outcome,
        PathOutcome::Path(vec!["A".into(), "B".into(), "C".into()])
    );
}

#[test]
fn empty_array_is_the_no_path_outcome_not_an_error() {
    assert_eq!(decode_path_response(200, "[]").unwrap(), PathOutcome::NoPath);
}

#[test]
fn backend_failures_carry_status_and_body() {
    let err = decode_path_response(500, r#"{"error":"cycle detected"}"#).unwrap_err();
    match err {
        Error::Backend { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("cycle detected"));
        }
        other => panic!("expected Backend error, got {other:?}"),
    }
}

#[test]
fn non_array_success_bodies_are_malformed() {
    assert!(matches!(
        decode_path_response(200, r#"{"path":["A"]}"#),
        Err(Error::MalformedResponse)
    ));
    assert!(matches!(
        decode_path_response(201, "not json"),
        Err(Error::MalformedResponse)
    ));
}
