//! Membership-driven styling.
//!
//! Pure, total lookups from a membership set to a color token and a stroke
//! weight. Every subset of tags maps to something: full membership and the
//! enumerated pairs/singletons get their own colors, anything else (e.g. a
//! 3-of-4 subset) falls back to a neutral token.

use crate::model::{Membership, VariantTag};

/// Neutral node color for memberships outside the enumerated table.
pub const NODE_FALLBACK: &str = "#ffffff";
/// Neutral edge color for memberships outside the enumerated table.
pub const EDGE_FALLBACK: &str = "#666666";

const O: u8 = 1 << 0;
const A1: u8 = 1 << 1;
const A2: u8 = 1 << 2;
const A3: u8 = 1 << 3;

/// Node fill for the given membership.
pub fn node_color(membership: Membership, total_variants: u8) -> &'static str {
    if total_variants > 0 && membership.len() == total_variants as usize {
        return "#9d4edd"; // shared by all variants
    }
    match membership.bits() {
        m if m == O | A1 => "#7dcfb6",
        m if m == O | A2 => "#f9844a",
        m if m == O | A3 => "#ff6b9d",
        m if m == A1 | A2 => "#ee6c4d",
        m if m == A1 | A3 => "#ffd23f",
        m if m == A2 | A3 => "#06ffa5",
        m if m == O => "#90C67C",
        m if m == A1 => "#60B5FF",
        m if m == A2 => "#E78B48",
        m if m == A3 => "#ff69b4",
        _ => NODE_FALLBACK,
    }
}

/// Edge stroke for the given membership.
pub fn edge_color(membership: Membership, total_variants: u8) -> &'static str {
    if total_variants > 0 && membership.len() == total_variants as usize {
        return "#ff6b9d"; // shared by all variants
    }
    match membership.bits() {
        m if m == O | A1 => "#4ecdc4",
        m if m == O | A2 => "#ffa726",
        m if m == O | A3 => "#ab47bc",
        m if m == A1 | A2 => "#ef5350",
        m if m == A1 | A3 => "#ffee58",
        m if m == A2 | A3 => "#26a69a",
        m if m == O => "#66bb6a",
        m if m == A1 => "#42a5f5",
        m if m == A2 => "#ff7043",
        m if m == A3 => "#ec407a",
        _ => EDGE_FALLBACK,
    }
}

/// Stroke weight: 3 for full membership, 2 for any shared edge, 1 otherwise.
/// Independent of color.
pub fn edge_weight(membership: Membership, total_variants: u8) -> u8 {
    if total_variants > 0 && membership.len() == total_variants as usize {
        3
    } else if membership.len() >= 2 {
        2
    } else {
        1
    }
}

/// Base node color of a variant rendered on its own (used by the per-variant
/// render builders and the overlay layers).
pub fn variant_color(tag: VariantTag) -> &'static str {
    node_color(Membership::of(&[tag]), 0)
}
