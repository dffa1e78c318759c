use masonry::{ItemSize, LayoutParams, column_width, layout};

/// No items means the empty result, whatever the container width.
#[test]
fn empty_items_yield_empty_result() {
    let _ = env_logger::builder().is_test(true).try_init();

    let params = LayoutParams { columns: 3, gap: 24.0, container_width: 936.0 };
    let result = layout(&[], &params);

    assert!(result.is_empty());
    assert_eq!(result.container_height, 0.0);
}

/// Zero container width means "not yet measurable", not an error.
#[test]
fn unmeasured_container_yields_empty_result() {
    let _ = env_logger::builder().is_test(true).try_init();

    let params = LayoutParams { columns: 3, gap: 24.0, container_width: 0.0 };
    let items = vec![ItemSize::new(300.0, 200.0); 5];
    let result = layout(&items, &params);

    assert!(result.is_empty());
    assert_eq!(result.container_height, 0.0);
}

/// When the gaps alone exceed the container width, the column width clamps
/// to zero instead of going negative.
#[test]
fn degenerate_column_width_clamps_to_zero() {
    let _ = env_logger::builder().is_test(true).try_init();

    let params = LayoutParams { columns: 10, gap: 24.0, container_width: 100.0 };
    assert_eq!(column_width(&params), 0.0);

    let items = vec![ItemSize::new(300.0, 200.0); 3];
    let result = layout(&items, &params);

    // Still one placement per item; all zero-width, pinned to grid offsets.
    assert_eq!(result.placements.len(), 3);
    for placement in &result.placements {
        assert_eq!(placement.width, 0.0);
        assert_eq!(placement.y, 0.0);
    }
}

/// Zero columns is normalized to a single column.
#[test]
fn zero_columns_normalizes_to_one() {
    let _ = env_logger::builder().is_test(true).try_init();

    let params = LayoutParams { columns: 0, gap: 24.0, container_width: 400.0 };
    let items = vec![ItemSize::new(400.0, 400.0); 2];
    let result = layout(&items, &params);

    assert_eq!(result.placements.len(), 2);
    assert_eq!(result.placements[0].width, 400.0);
    assert_eq!(result.placements[0].x, 0.0);
    assert_eq!(result.placements[1].x, 0.0);
    assert!(result.placements[1].y > result.placements[0].y);
}
