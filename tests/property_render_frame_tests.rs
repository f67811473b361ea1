use line_graph_rs::api::{LineGraphConfig, MAX_HORIZONTAL_GRID_LINES, build_line_graph_frame};
use line_graph_rs::compact_value;
use line_graph_rs::core::{DataPoint, Viewport, visible_window};
use proptest::prelude::*;

fn series_strategy() -> impl Strategy<Value = Vec<DataPoint>> {
    prop::collection::vec(("[a-z]{0,4}", -10_000_000.0f64..10_000_000.0), 0..40).prop_map(
        |samples| {
            samples
                .into_iter()
                .map(|(label, value)| DataPoint::new(label, value))
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn window_is_most_recent_suffix(
        series in series_strategy(),
        max_visible in 1usize..20,
    ) {
        let window = visible_window(&series, max_visible);
        let expected = max_visible.min(series.len());
        prop_assert_eq!(window.len(), expected);
        prop_assert_eq!(window, &series[series.len() - expected..]);
    }

    #[test]
    fn render_is_deterministic_and_finite(
        series in series_strategy(),
        max_visible in 1usize..20,
        width in 0.0f64..2_000.0,
        height in 0.0f64..2_000.0,
    ) {
        let config = LineGraphConfig::default().with_max_visible_entries(max_visible);
        let viewport = Viewport::new(width, height);

        let first = build_line_graph_frame(&series, &config, viewport);
        let second = build_line_graph_frame(&series, &config, viewport);
        prop_assert_eq!(&first, &second);
        prop_assert!(first.validate().is_ok());

        let count = max_visible.min(series.len());
        prop_assert_eq!(first.circles().count(), count);
        prop_assert_eq!(first.texts().count(), count * 2);
        // vertical grid + capped horizontal grid + connecting segments
        let expected_lines = count
            + count.min(MAX_HORIZONTAL_GRID_LINES)
            + count.saturating_sub(1);
        prop_assert_eq!(first.lines().count(), expected_lines);
    }

    #[test]
    fn markers_stay_between_top_and_baseline(
        series in series_strategy(),
        height in 22.0f64..2_000.0,
    ) {
        let config = LineGraphConfig::default();
        let frame = build_line_graph_frame(&series, &config, Viewport::new(800.0, height));
        let bottom_base = height - 22.0;
        for circle in frame.circles() {
            prop_assert!(circle.cy >= -1e-6 && circle.cy <= bottom_base + 1e-6);
        }
    }

    #[test]
    fn compact_values_below_a_thousand_have_no_suffix(value in -999.0f64..999.0) {
        let text = compact_value(value);
        prop_assert!(!text.ends_with('k') && !text.ends_with('m'));
        prop_assert!(!text.contains('.'));
    }
}
