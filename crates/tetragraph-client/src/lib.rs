#![forbid(unsafe_code)]

//! Client-side contract for the external path-finding service, plus the
//! highlight orchestration around it.
//!
//! The service computes longest and shortest paths over one variant's
//! edges. This crate owns the request/response shapes, the local
//! precondition checks that run before anything touches the network, and
//! the toggle/last-wins semantics of the shared highlight state. Actual
//! HTTP plumbing stays with the embedding application.

pub mod error;
pub mod highlight;
pub mod wire;

pub use error::{Error, Result};
pub use highlight::{HighlightState, Ticket, Trigger};
pub use wire::{
    LongestPathRequest, PathOutcome, ShortestPathRequest, WireEdge, build_longest_path_request,
    build_shortest_path_request, decode_path_response,
};
