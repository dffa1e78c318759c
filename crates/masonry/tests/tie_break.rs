use masonry::{FOOTER_ALLOWANCE, ItemSize, LayoutParams, layout};

/// The reference fixture: 3 columns, gap 24, container width 936.
/// Column width is (936 - 48) / 3 = 296 exactly.
fn fixture_params() -> LayoutParams {
    LayoutParams { columns: 3, gap: 24.0, container_width: 936.0 }
}

/// Identical square items must cycle through columns 0,1,2,0,1,2 with the
/// lowest-indexed column winning every tie.
#[test]
fn equal_heights_cycle_columns_leftmost_first() {
    let _ = env_logger::builder().is_test(true).try_init();

    let items = vec![ItemSize::new(296.0, 296.0); 6];
    let result = layout(&items, &fixture_params());

    assert_eq!(result.placements.len(), 6);
    for (index, placement) in result.placements.iter().enumerate() {
        let column = index % 3;
        assert_eq!(placement.x, column as f32 * (296.0 + 24.0), "item {index}");
    }
}

/// Hand-derived coordinates for the reference fixture with square items.
#[test]
fn reference_fixture_coordinates() {
    let _ = env_logger::builder().is_test(true).try_init();

    let items = vec![ItemSize::new(296.0, 296.0); 4];
    let result = layout(&items, &fixture_params());

    // Row one: rendered height 296, x at 0 / 320 / 640, all at y = 0.
    assert_eq!(result.placements[0].x, 0.0);
    assert_eq!(result.placements[0].y, 0.0);
    assert_eq!(result.placements[0].width, 296.0);
    assert_eq!(result.placements[1].x, 320.0);
    assert_eq!(result.placements[1].y, 0.0);
    assert_eq!(result.placements[2].x, 640.0);
    assert_eq!(result.placements[2].y, 0.0);

    // Item 4 wraps to column 0 below item 1: 296 + 120 footer + 24 gap.
    let second_row_y = 296.0 + FOOTER_ALLOWANCE + 24.0;
    assert_eq!(result.placements[3].x, 0.0);
    assert_eq!(result.placements[3].y, second_row_y);

    // Tallest column holds two items; trailing gap is removed.
    let expected_height = second_row_y + 296.0 + FOOTER_ALLOWANCE;
    assert_eq!(result.container_height, expected_height);
}

/// A short column must win over the leftmost one once heights diverge.
#[test]
fn shortest_column_wins_over_leftmost() {
    let _ = env_logger::builder().is_test(true).try_init();

    // Two columns of width 100 (gap 0, container 200).
    let params = LayoutParams { columns: 2, gap: 0.0, container_width: 200.0 };
    let items = vec![
        // Tall portrait in column 0: rendered height 200.
        ItemSize::new(100.0, 200.0),
        // Squat landscape in column 1: rendered height 50.
        ItemSize::new(100.0, 50.0),
        // Column 1 (50 + 120) is shorter than column 0 (200 + 120).
        ItemSize::new(100.0, 100.0),
    ];
    let result = layout(&items, &params);

    assert_eq!(result.placements[2].x, 100.0);
    assert_eq!(result.placements[2].y, 50.0 + FOOTER_ALLOWANCE);
}
