//! Masonry layout engine.
//!
//! Packs items of varying heights into fixed-width columns, each item going
//! to the currently shortest column. The engine is a pure function of
//! (items, columns, gap, container width): no I/O, no hidden state, and a
//! result that is recomputed from scratch on every call rather than
//! incrementally updated.

use log::trace;
use smallvec::SmallVec;

/// Vertical space reserved below each image for caption/metadata,
/// independent of actual caption length. Captions taller than this overlap
/// the next row; accepted approximation.
pub const FOOTER_ALLOWANCE: f32 = 120.0;

/// Source dimensions of an item. Only the height/width ratio matters to
/// layout; the item is scaled to the column width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemSize {
    pub width: f32,
    pub height: f32,
}

impl ItemSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Height per unit width. Not validated: a non-positive width yields a
    /// degenerate (infinite or NaN) ratio that propagates to the output.
    pub fn aspect_ratio(&self) -> f32 {
        self.height / self.width
    }
}

/// Consolidated layout parameters for one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Number of columns. Callers pass >= 1; zero is normalized to one.
    pub columns: usize,
    /// Spacing between columns and between items in a column.
    pub gap: f32,
    /// Measured width of the containing surface.
    pub container_width: f32,
}

/// Absolute position for one item. `width` is the column width and is
/// identical for every placement of a given pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
}

/// Placements parallel to the input order, plus the container height the
/// rendering surface should adopt.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutResult {
    pub placements: Vec<Placement>,
    pub container_height: f32,
}

impl LayoutResult {
    /// True for the "not yet measurable" result (zero container width or no
    /// items).
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Width of a single column under `params`, clamped to zero when the gaps
/// alone exceed the container width.
pub fn column_width(params: &LayoutParams) -> f32 {
    let columns = params.columns.max(1);
    let width = (params.container_width - params.gap * (columns as f32 - 1.0)) / columns as f32;
    width.max(0.0)
}

/// Height of an item scaled to `column_width`, preserving aspect ratio.
pub fn rendered_height(item: ItemSize, column_width: f32) -> f32 {
    column_width * item.aspect_ratio()
}

/// Lay out `items` in input order using greedy shortest-column placement.
///
/// Each item goes to the column with the minimum accumulated height, ties
/// breaking to the lowest index. Returns the empty result when the
/// container width is not positive or there are no items; that is the
/// "not ready" signal, not an error.
pub fn layout(items: &[ItemSize], params: &LayoutParams) -> LayoutResult {
    if params.container_width <= 0.0 || items.is_empty() {
        return LayoutResult::default();
    }

    let columns = params.columns.max(1);
    let col_width = column_width(params);
    let mut heights: SmallVec<f32, 8> = core::iter::repeat(0.0).take(columns).collect();
    let mut placements = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        // Strict `<` keeps the first minimum, giving the leftmost-first
        // tie-break.
        let mut target = 0;
        for (col, height) in heights.iter().enumerate() {
            if *height < heights[target] {
                target = col;
            }
        }
        let x = target as f32 * (col_width + params.gap);
        let y = heights[target];
        let item_height = rendered_height(*item, col_width);
        trace!("item {index} -> column {target} at ({x}, {y}), height {item_height}");
        placements.push(Placement { x, y, width: col_width });
        heights[target] += item_height + FOOTER_ALLOWANCE + params.gap;
    }

    let tallest = heights.iter().fold(0.0_f32, |acc, h| acc.max(*h));
    LayoutResult {
        placements,
        // Drop the trailing gap below the last item of the tallest column.
        container_height: (tallest - params.gap).max(0.0),
    }
}
