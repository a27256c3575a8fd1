#![forbid(unsafe_code)]

//! Headless comparison machinery for up to four related sequence graphs.
//!
//! One "original" directed graph and up to three derived variants over the
//! same node-label universe are compared by:
//! - merging them into one annotated union graph with membership
//!   provenance and derived styling ([`merge`]),
//! - assigning one canonical position per label for overlay rendering
//!   ([`layout::assign`]),
//! - namespacing render identifiers per display mode ([`ident`]),
//! - translating externally computed paths into per-mode highlight sets
//!   ([`select::translate`]).
//!
//! Every transform is synchronous, deterministic, and side-effect free;
//! rendering, UI state, and network plumbing live with the callers.

pub mod error;
pub mod export;
pub mod ident;
pub mod layout;
pub mod merge;
pub mod model;
pub mod select;
pub mod style;

pub use error::{Error, Result};
pub use ident::{EdgeId, NodeId, qualify};
pub use layout::assign;
pub use merge::merge;
pub use model::{
    GraphPayload, Membership, MergedEdge, MergedGraph, MergedNode, Point, VariantGraph, VariantTag,
    ViewContext, active_variants,
};
pub use select::{edge_on_path, translate};
