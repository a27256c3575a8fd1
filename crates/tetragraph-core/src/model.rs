//! Core data model shared by every comparison transform.
//!
//! Up to four related directed graphs over one node-label universe are
//! compared at a time: the original sequence graph plus up to three derived
//! "alpha" variants.

use serde::{Deserialize, Serialize, Serializer};

use crate::error::{Error, Result};

/// Identifies one of the up to four graphs under comparison.
///
/// The declaration order is the fixed processing order for every
/// order-sensitive operation (merge orientation, membership labels,
/// highlight fan-out).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VariantTag {
    /// The original sequence graph.
    #[serde(rename = "O")]
    O,
    /// First derived variant.
    #[serde(rename = "1")]
    A1,
    /// Second derived variant.
    #[serde(rename = "2")]
    A2,
    /// Third derived variant.
    #[serde(rename = "3")]
    A3,
}

impl VariantTag {
    /// All tags in processing order.
    pub const ALL: [VariantTag; 4] = [VariantTag::O, VariantTag::A1, VariantTag::A2, VariantTag::A3];

    /// Single-letter form used in membership labels (`O`, `1`, `2`, `3`).
    pub fn letter(self) -> char {
        match self {
            VariantTag::O => 'O',
            VariantTag::A1 => '1',
            VariantTag::A2 => '2',
            VariantTag::A3 => '3',
        }
    }

    /// Render-identifier suffix (`o`, `a1`, `a2`, `a3`).
    pub fn suffix(self) -> &'static str {
        match self {
            VariantTag::O => "o",
            VariantTag::A1 => "a1",
            VariantTag::A2 => "a2",
            VariantTag::A3 => "a3",
        }
    }

    pub(crate) fn bit(self) -> u8 {
        match self {
            VariantTag::O => 1 << 0,
            VariantTag::A1 => 1 << 1,
            VariantTag::A2 => 1 << 2,
            VariantTag::A3 => 1 << 3,
        }
    }
}

impl std::fmt::Display for VariantTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Set of variant tags a node or edge belongs to, stored as a 4-bit mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Membership(u8);

impl Membership {
    /// The empty set.
    pub const EMPTY: Membership = Membership(0);

    /// Builds a membership from the given tags.
    pub fn of(tags: &[VariantTag]) -> Self {
        tags.iter().copied().collect()
    }

    pub fn insert(&mut self, tag: VariantTag) {
        self.0 |= tag.bit();
    }

    pub fn contains(self, tag: VariantTag) -> bool {
        self.0 & tag.bit() != 0
    }

    /// Number of tags in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Tags in fixed processing order (O, 1, 2, 3).
    pub fn tags(self) -> impl Iterator<Item = VariantTag> {
        VariantTag::ALL.into_iter().filter(move |t| self.contains(*t))
    }

    /// Concatenated tag letters in processing order, e.g. `"O1"`.
    pub fn label(self) -> String {
        self.tags().map(VariantTag::letter).collect()
    }

    pub(crate) fn bits(self) -> u8 {
        self.0
    }
}

impl FromIterator<VariantTag> for Membership {
    fn from_iter<I: IntoIterator<Item = VariantTag>>(iter: I) -> Self {
        let mut m = Membership::EMPTY;
        for tag in iter {
            m.insert(tag);
        }
        m
    }
}

impl Serialize for Membership {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

/// The variants that are simultaneously visible for a given comparison size.
///
/// The original and the first variant are always shown; the second variant
/// joins at three graphs and the third at four.
pub fn active_variants(total_variants: u8) -> Membership {
    let mut m = Membership::of(&[VariantTag::O, VariantTag::A1]);
    if total_variants >= 3 {
        m.insert(VariantTag::A2);
    }
    if total_variants >= 4 {
        m.insert(VariantTag::A3);
    }
    m
}

/// Raw per-variant payload as fetched from the upstream graph service.
///
/// Either collection may be absent in a malformed or still-loading payload;
/// such a payload contributes nothing to any transform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphPayload {
    #[serde(default)]
    pub nodes: Option<Vec<String>>,
    #[serde(default)]
    pub edges: Option<Vec<(String, String)>>,
}

/// One of the directed graphs under comparison.
///
/// Edges may be parallel or self-loops; labels are case-sensitive.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantGraph {
    pub tag: VariantTag,
    pub nodes: Vec<String>,
    pub edges: Vec<(String, String)>,
}

impl VariantGraph {
    pub fn new(tag: VariantTag, nodes: Vec<String>, edges: Vec<(String, String)>) -> Self {
        Self { tag, nodes, edges }
    }

    /// Adopts an upstream payload, or `None` when the payload is missing
    /// either collection and must be skipped.
    pub fn from_payload(tag: VariantTag, payload: GraphPayload) -> Option<Self> {
        match (payload.nodes, payload.edges) {
            (Some(nodes), Some(edges)) => Some(Self { tag, nodes, edges }),
            _ => None,
        }
    }

    /// Checks that every edge references a declared node.
    pub fn validate(&self) -> Result<()> {
        let known: rustc_hash::FxHashSet<&str> = self.nodes.iter().map(String::as_str).collect();
        for (source, target) in &self.edges {
            if !known.contains(source.as_str()) || !known.contains(target.as_str()) {
                return Err(Error::MissingEndpoint {
                    from: source.clone(),
                    to: target.clone(),
                });
            }
        }
        Ok(())
    }
}

/// The active display mode. Determines identifier namespacing and how a
/// highlighted path fans out across visible sub-graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewContext {
    /// One variant rendered on its own.
    Single(VariantTag),
    /// All visible variants rendered side by side.
    Separated,
    /// All visible variants stacked on one canvas with shared positions.
    Overlaid,
    /// The annotated union graph.
    Merged,
}

/// A node of the merged union graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedNode {
    pub base: String,
    pub membership: Membership,
    pub qualified_id: String,
    pub display_label: String,
    pub color: &'static str,
}

/// An edge of the merged union graph.
///
/// Identified by its unordered endpoint pair; `source`/`target` carry the
/// first-encountered orientation, qualified into the merged namespace.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedEdge {
    pub source: String,
    pub target: String,
    pub source_base: String,
    pub target_base: String,
    pub membership: Membership,
    pub qualified_id: String,
    pub color: &'static str,
    pub weight: u8,
}

/// Output of the merge engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MergedGraph {
    pub nodes: Vec<MergedNode>,
    pub edges: Vec<MergedEdge>,
}

/// A canvas position (integer-valued after rounding).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}
