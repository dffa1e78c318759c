/// Responsive column policy: ordered (min width, column count) thresholds
/// with a floor of one column. This lives outside the layout engine; the
/// embedding surface maps its measured width through it and passes the
/// resulting column count in explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakpoints {
    /// Descending by min width.
    ladder: Vec<(f32, usize)>,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::new(vec![(1280.0, 4), (1024.0, 3), (640.0, 2)])
    }
}

impl Breakpoints {
    /// Build a ladder from (min width, columns) pairs in any order.
    pub fn new(mut ladder: Vec<(f32, usize)>) -> Self {
        ladder.sort_by(|a, b| b.0.total_cmp(&a.0));
        Self { ladder }
    }

    /// Column count for a measured container width. Widths below every
    /// threshold get a single column.
    pub fn columns_for_width(&self, width: f32) -> usize {
        self.ladder
            .iter()
            .find(|(min_width, _)| width >= *min_width)
            .map_or(1, |(_, columns)| (*columns).max(1))
    }
}
