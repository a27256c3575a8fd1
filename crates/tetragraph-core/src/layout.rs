//! Canonical cross-variant positions for overlay rendering.
//!
//! Every distinct label observed across the supplied variants gets exactly
//! one position, so a node occupies the same spot on every overlay layer.
//! The mapping depends only on the sorted label set and the canvas size,
//! never on variant identity or list order.

use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use crate::model::Point;

/// Assigns one stable position per distinct label.
///
/// Labels are laid out on a grid sized to the canvas aspect ratio, filled
/// row-major in lexicographic label order, with a 10% margin reserved on
/// every side. Positions are cell centers rounded to whole pixels.
///
/// A `None` list (variant not loaded) contributes nothing. Degenerate
/// canvas dimensions yield an empty map.
pub fn assign(
    variant_node_lists: &[Option<&[String]>],
    width: f64,
    height: f64,
) -> BTreeMap<String, Point> {
    let mut labels: BTreeSet<&str> = BTreeSet::new();
    for list in variant_node_lists.iter().flatten() {
        for label in *list {
            labels.insert(label.as_str());
        }
    }

    let n = labels.len();
    if n == 0 || !(width > 0.0) || !(height > 0.0) {
        return BTreeMap::new();
    }
    debug!(labels = n, width, height, "assigning canonical positions");

    let (cols, rows) = grid_dimensions(n, width, height);

    let margin = width.min(height) * 0.1;
    let cell_width = (width - 2.0 * margin) / cols as f64;
    let cell_height = (height - 2.0 * margin) / rows as f64;

    labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            let row = i / cols;
            let col = i % cols;
            let x = (margin + col as f64 * cell_width + cell_width / 2.0).round();
            let y = (margin + row as f64 * cell_height + cell_height / 2.0).round();
            (label.to_string(), Point { x, y })
        })
        .collect()
}

/// Picks grid dimensions matching the canvas aspect ratio, then shrinks the
/// row count while a whole row's worth of cells would sit empty.
fn grid_dimensions(n: usize, width: f64, height: f64) -> (usize, usize) {
    let mut cols = ((n as f64 * width / height).sqrt().ceil() as usize).max(1);
    let mut rows = n.div_ceil(cols);
    while cols * rows - n > cols && rows > 1 {
        rows -= 1;
        cols = n.div_ceil(rows);
    }
    (cols, rows)
}
