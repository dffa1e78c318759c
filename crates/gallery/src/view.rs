use crate::{Breakpoints, GalleryItem};
use log::{debug, trace};
use masonry::{ItemSize, LayoutParams, LayoutResult};
use std::time::Instant;

/// State owner for a masonry gallery. Holds the declared layout inputs and
/// the cached result; recomputes via the pure engine only when an input
/// actually changed.
pub struct GalleryView {
    items: Vec<GalleryItem>,
    columns: usize,
    gap: f32,
    container_width: f32,
    breakpoints: Breakpoints,
    cached: LayoutResult,
    /// Global flag indicating that some input change requires a recompute.
    layout_dirty: bool,
    /// Monotonic epoch incremented on each change affecting layout.
    last_change_epoch: u64,
    /// Telemetry: number of layout passes run.
    perf_layouts_total: u64,
    /// Telemetry: items placed in the last pass.
    perf_items_placed_last: u64,
    /// Telemetry: last layout time in milliseconds.
    perf_layout_time_last_ms: u64,
    /// Telemetry: cumulative layout time in milliseconds.
    perf_layout_time_total_ms: u64,
}

impl Default for GalleryView {
    fn default() -> Self {
        Self::new()
    }
}

impl GalleryView {
    /// Empty view: one column, the conventional 24-unit gap, and an
    /// unmeasured (zero) container width, so the first `layout` before
    /// `measure` yields the empty result.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            columns: 1,
            gap: 24.0,
            container_width: 0.0,
            breakpoints: Breakpoints::default(),
            cached: LayoutResult::default(),
            layout_dirty: false,
            last_change_epoch: 0,
            perf_layouts_total: 0,
            perf_items_placed_last: 0,
            perf_layout_time_last_ms: 0,
            perf_layout_time_total_ms: 0,
        }
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn gap(&self) -> f32 {
        self.gap
    }

    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    /// Replace the item list. A list equal to the current one is a no-op.
    pub fn set_items(&mut self, items: Vec<GalleryItem>) {
        if self.items == items {
            return;
        }
        self.items = items;
        self.mark_dirty();
    }

    /// Append a single item.
    pub fn push_item(&mut self, item: GalleryItem) {
        self.items.push(item);
        self.mark_dirty();
    }

    /// Set the column count directly, bypassing the breakpoint policy.
    pub fn set_columns(&mut self, columns: usize) {
        let columns = columns.max(1);
        if self.columns == columns {
            return;
        }
        self.columns = columns;
        self.mark_dirty();
    }

    pub fn set_gap(&mut self, gap: f32) {
        if self.gap == gap {
            return;
        }
        self.gap = gap;
        self.mark_dirty();
    }

    pub fn set_container_width(&mut self, width: f32) {
        if self.container_width == width {
            return;
        }
        self.container_width = width;
        self.mark_dirty();
    }

    /// Replace the responsive policy and reapply it to the current width.
    pub fn set_breakpoints(&mut self, breakpoints: Breakpoints) {
        if self.breakpoints == breakpoints {
            return;
        }
        self.breakpoints = breakpoints;
        let width = self.container_width;
        self.set_columns(self.breakpoints.columns_for_width(width));
    }

    /// Record a measured container width and derive the column count from
    /// the breakpoint ladder in one step.
    pub fn measure(&mut self, width: f32) {
        let columns = self.breakpoints.columns_for_width(width);
        trace!("measure: width {width} -> {columns} columns");
        self.set_container_width(width);
        self.set_columns(columns);
    }

    fn mark_dirty(&mut self) {
        self.layout_dirty = true;
        self.last_change_epoch = self.last_change_epoch.wrapping_add(1);
    }

    /// Atomically read and clear the global layout dirty flag.
    pub fn take_and_clear_layout_dirty(&mut self) -> bool {
        let was_dirty = self.layout_dirty;
        self.layout_dirty = false;
        was_dirty
    }

    pub fn is_layout_dirty(&self) -> bool {
        self.layout_dirty
    }

    pub fn change_epoch(&self) -> u64 {
        self.last_change_epoch
    }

    /// Last computed result without triggering a recompute; stale if the
    /// view is dirty.
    pub fn result(&self) -> &LayoutResult {
        &self.cached
    }

    /// Recompute the layout if any input changed since the last pass, then
    /// return the cached result.
    pub fn layout(&mut self) -> &LayoutResult {
        if self.layout_dirty {
            let start = Instant::now();
            let sizes: Vec<ItemSize> = self.items.iter().map(GalleryItem::size).collect();
            let params = LayoutParams {
                columns: self.columns,
                gap: self.gap,
                container_width: self.container_width,
            };
            self.cached = masonry::layout(&sizes, &params);
            self.layout_dirty = false;

            let elapsed_ms = start.elapsed().as_millis() as u64;
            self.perf_layouts_total = self.perf_layouts_total.saturating_add(1);
            self.perf_items_placed_last = self.cached.placements.len() as u64;
            self.perf_layout_time_last_ms = elapsed_ms;
            self.perf_layout_time_total_ms =
                self.perf_layout_time_total_ms.saturating_add(elapsed_ms);
            debug!(
                "layout pass: {} items, {} columns, height {}",
                self.cached.placements.len(),
                self.columns,
                self.cached.container_height
            );
        }
        &self.cached
    }

    /// Performance counter: layout passes run.
    pub fn perf_layouts_total(&self) -> u64 {
        self.perf_layouts_total
    }
    /// Performance counter: items placed in the last pass.
    pub fn perf_items_placed_last(&self) -> u64 {
        self.perf_items_placed_last
    }
    /// Performance metric: time spent in the last pass in milliseconds.
    pub fn perf_layout_time_last_ms(&self) -> u64 {
        self.perf_layout_time_last_ms
    }
    /// Performance metric: cumulative layout time in milliseconds.
    pub fn perf_layout_time_total_ms(&self) -> u64 {
        self.perf_layout_time_total_ms
    }

    /// JSON snapshot of the performance counters for diagnostics overlays.
    pub fn perf_counters_snapshot_string(&self) -> String {
        serde_json::json!({
            "layouts_total": self.perf_layouts_total,
            "items_placed_last": self.perf_items_placed_last,
            "layout_time_last_ms": self.perf_layout_time_last_ms,
            "layout_time_total_ms": self.perf_layout_time_total_ms,
            "change_epoch": self.last_change_epoch,
        })
        .to_string()
    }
}
