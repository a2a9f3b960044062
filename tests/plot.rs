use chrono::NaiveDate;
use csvplot::color::{series_color, series_palette, PALETTE_LEN};
use csvplot::data::model::{Column, Table};
use csvplot::error::{NoticeLevel, PlotError};
use csvplot::plot::compose::{compose, epoch_seconds, format_time_tick, format_value_tick};
use csvplot::plot::config::{resolve_config, RefLineField};
use csvplot::state::AppState;

fn sample_table() -> Table {
    let timestamps = (0..4)
        .map(|h| {
            NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(h, 0, 0)
                .unwrap()
        })
        .collect();
    Table {
        timestamps,
        columns: vec![
            Column {
                name: "A".into(),
                values: vec![1.0, 2.0, 3.0, 4.0],
            },
            Column {
                name: "B".into(),
                values: vec![100.0, 200.0, 300.0, 400.0],
            },
            Column {
                name: "C".into(),
                values: vec![0.5, 0.25, 0.75, 1.0],
            },
        ],
    }
}

/// `Some(text)` means the field is enabled with that text.
fn fields(first: Option<&str>, second: Option<&str>) -> [RefLineField; 2] {
    let field = |input: Option<&str>| RefLineField {
        enabled: input.is_some(),
        text: input.unwrap_or_default().to_string(),
    };
    [field(first), field(second)]
}

fn select(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Config validation
// ---------------------------------------------------------------------------

#[test]
fn empty_selection_is_rejected() {
    let err = resolve_config(Vec::new(), &fields(None, None), false).unwrap_err();
    assert_eq!(err, PlotError::NoSelection);
}

#[test]
fn bad_first_reference_line_names_field_one_regardless_of_field_two() {
    for second in [None, Some("5"), Some("also bad")] {
        let err = resolve_config(select(&["A"]), &fields(Some("abc"), second), false)
            .unwrap_err();
        assert_eq!(
            err,
            PlotError::BadReferenceLine {
                index: 1,
                input: "abc".to_string()
            }
        );
    }
}

#[test]
fn bad_second_reference_line_names_field_two() {
    let err = resolve_config(select(&["A"]), &fields(Some("1.5"), Some("")), false)
        .unwrap_err();
    assert_eq!(
        err,
        PlotError::BadReferenceLine {
            index: 2,
            input: String::new()
        }
    );
}

#[test]
fn non_finite_reference_values_are_rejected() {
    let err = resolve_config(select(&["A"]), &fields(Some("inf"), None), false).unwrap_err();
    assert!(matches!(err, PlotError::BadReferenceLine { index: 1, .. }));
}

#[test]
fn enabled_reference_lines_parse_in_field_order() {
    let config =
        resolve_config(select(&["A"]), &fields(Some(" 5.5 "), Some("-3")), false).unwrap();
    let parsed: Vec<(usize, f64)> = config
        .ref_lines
        .iter()
        .map(|r| (r.index, r.value))
        .collect();
    assert_eq!(parsed, [(1, 5.5), (2, -3.0)]);
}

#[test]
fn disabled_fields_are_ignored_even_with_garbage_text() {
    let config = resolve_config(
        select(&["A"]),
        &[
            RefLineField {
                enabled: false,
                text: "garbage".into(),
            },
            RefLineField::default(),
        ],
        true,
    )
    .unwrap();
    assert!(config.ref_lines.is_empty());
    assert!(config.separate_scales);
}

// ---------------------------------------------------------------------------
// Composition: axes and scales
// ---------------------------------------------------------------------------

#[test]
fn shared_scales_put_all_series_on_one_axis() {
    let table = sample_table();
    let config = resolve_config(select(&["A", "B", "C"]), &fields(None, None), false).unwrap();
    let model = compose(&table, &config).unwrap();

    assert_eq!(model.axes.len(), 1);
    assert!(model.series.iter().all(|s| s.axis == 0));
    // Shared axis: no rescaling, points carry the raw values.
    assert_eq!(model.series[1].points[0][1], 100.0);
    // The shared axis label follows the last plotted series.
    assert_eq!(model.axes[0].label, "C");
}

#[test]
fn separate_scales_give_one_axis_per_selected_column() {
    let table = sample_table();
    let config = resolve_config(select(&["A", "B", "C"]), &fields(None, None), true).unwrap();
    let model = compose(&table, &config).unwrap();

    assert_eq!(model.axes.len(), 3);
    let axis_of: Vec<usize> = model.series.iter().map(|s| s.axis).collect();
    assert_eq!(axis_of, [0, 1, 2]);
    assert_eq!(model.axes[1].label, "B");
    assert_eq!(model.axes[1].color, model.series[1].color);
}

#[test]
fn separate_scales_fit_series_into_the_base_range() {
    let table = sample_table();
    let config = resolve_config(select(&["A", "B"]), &fields(None, None), true).unwrap();
    let model = compose(&table, &config).unwrap();

    // B spans 100..400 and must land on A's 1..4 in plot space.
    let map = model.axes[1].map;
    assert!((map.to_plot(100.0) - 1.0).abs() < 1e-9);
    assert!((map.to_plot(400.0) - 4.0).abs() < 1e-9);
    // Tick formatting inverts the map back to series units.
    assert!((map.to_value(map.to_plot(250.0)) - 250.0).abs() < 1e-9);

    let b_plot_ys: Vec<f64> = model.series[1].points.iter().map(|p| p[1]).collect();
    assert!((b_plot_ys[0] - 1.0).abs() < 1e-9);
    assert!((b_plot_ys[3] - 4.0).abs() < 1e-9);
}

#[test]
fn flat_series_do_not_blow_up_separate_scales() {
    let table = Table {
        timestamps: sample_table().timestamps,
        columns: vec![
            Column {
                name: "A".into(),
                values: vec![2.0, 2.0, 2.0, 2.0],
            },
            Column {
                name: "B".into(),
                values: vec![7.0, 7.0, 7.0, 7.0],
            },
        ],
    };
    let config = resolve_config(select(&["A", "B"]), &fields(None, None), true).unwrap();
    let model = compose(&table, &config).unwrap();

    for series in &model.series {
        assert!(series.points.iter().all(|p| p[1].is_finite()));
    }
}

// ---------------------------------------------------------------------------
// Composition: colors, reference lines, edge cases
// ---------------------------------------------------------------------------

#[test]
fn palette_wraps_after_ten_series() {
    let palette = series_palette();
    assert_eq!(palette.len(), PALETTE_LEN);
    assert_eq!(
        series_color(&palette, PALETTE_LEN + 3),
        series_color(&palette, 3)
    );

    // Same property end-to-end through compose.
    let n = PALETTE_LEN + 2;
    let timestamps = sample_table().timestamps;
    let columns = (0..n)
        .map(|i| Column {
            name: format!("c{i}"),
            values: vec![i as f64; 4],
        })
        .collect();
    let table = Table {
        timestamps,
        columns,
    };
    let names: Vec<String> = (0..n).map(|i| format!("c{i}")).collect();
    let config = resolve_config(names, &fields(None, None), false).unwrap();
    let model = compose(&table, &config).unwrap();

    assert_eq!(model.series[PALETTE_LEN].color, model.series[0].color);
    assert_ne!(model.series[1].color, model.series[0].color);
}

#[test]
fn reference_lines_are_labeled_and_distinctly_colored() {
    let table = sample_table();
    let config = resolve_config(select(&["A"]), &fields(Some("2"), Some("3.5")), false).unwrap();
    let model = compose(&table, &config).unwrap();

    assert_eq!(model.ref_lines.len(), 2);
    assert_eq!(model.ref_lines[0].label, "Reference line 1: 2");
    assert_eq!(model.ref_lines[1].label, "Reference line 2: 3.5");
    assert_eq!(model.ref_lines[0].value, 2.0);
    assert_ne!(model.ref_lines[0].color, model.ref_lines[1].color);
}

#[test]
fn zero_reference_lines_is_fine() {
    let table = sample_table();
    let config = resolve_config(select(&["A"]), &fields(None, None), false).unwrap();
    let model = compose(&table, &config).unwrap();
    assert!(model.ref_lines.is_empty());
}

#[test]
fn duplicate_selection_renders_independent_series() {
    let table = sample_table();
    let config = resolve_config(select(&["A", "A"]), &fields(None, None), false).unwrap();
    let model = compose(&table, &config).unwrap();

    assert_eq!(model.series.len(), 2);
    assert_eq!(model.series[0].name, model.series[1].name);
    assert_ne!(model.series[0].color, model.series[1].color);
}

#[test]
fn unknown_column_is_rejected() {
    let table = sample_table();
    let config = resolve_config(select(&["Z"]), &fields(None, None), false).unwrap();
    assert_eq!(
        compose(&table, &config).unwrap_err(),
        PlotError::UnknownColumn("Z".to_string())
    );
}

#[test]
fn all_nan_columns_plot_as_empty_series() {
    let table = Table {
        timestamps: sample_table().timestamps,
        columns: vec![Column {
            name: "A".into(),
            values: vec![f64::NAN; 4],
        }],
    };
    let config = resolve_config(select(&["A"]), &fields(None, None), false).unwrap();
    let model = compose(&table, &config).unwrap();
    assert!(model.series[0].points.is_empty());
}

// ---------------------------------------------------------------------------
// State-level plot requests
// ---------------------------------------------------------------------------

#[test]
fn request_without_data_warns_and_produces_no_plot() {
    let mut state = AppState::default();
    state.request_plot();
    assert!(state.plot.is_none());
    let notice = state.notice.expect("expected a notice");
    assert_eq!(notice.level, NoticeLevel::Warning);
}

#[test]
fn request_without_selection_warns_and_keeps_previous_plot() {
    let mut state = AppState::default();
    state.set_table(sample_table());
    state.toggle_selected("A");
    state.request_plot();
    assert_eq!(state.plot.as_ref().unwrap().series.len(), 1);

    state.toggle_selected("A"); // deselect
    state.request_plot();
    let notice = state.notice.take().expect("expected a notice");
    assert_eq!(notice.level, NoticeLevel::Warning);
    // The previously composed plot stays displayed.
    assert_eq!(state.plot.as_ref().unwrap().series.len(), 1);
}

#[test]
fn replotting_replaces_the_previous_model() {
    let mut state = AppState::default();
    state.set_table(sample_table());
    state.toggle_selected("A");
    state.request_plot();
    assert!(state.reset_plot_view);
    state.reset_plot_view = false;

    state.toggle_selected("B");
    state.request_plot();
    let model = state.plot.as_ref().unwrap();
    let names: Vec<&str> = model.series.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["A", "B"]);
    assert!(state.reset_plot_view);
}

#[test]
fn selection_resolves_in_table_order() {
    let mut state = AppState::default();
    state.set_table(sample_table());
    state.toggle_selected("C");
    state.toggle_selected("A");
    assert_eq!(state.selection_in_table_order(), ["A", "C"]);
}

// ---------------------------------------------------------------------------
// Tick text
// ---------------------------------------------------------------------------

#[test]
fn epoch_seconds_is_unix_epoch_based() {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    assert_eq!(epoch_seconds(&epoch), 0.0);
}

#[test]
fn time_ticks_scale_granularity_with_step() {
    assert_eq!(format_time_tick(0.0, 172_800.0), "1970-01-01");
    assert_eq!(format_time_tick(3_600.0, 60.0), "01:00");
    assert_eq!(format_time_tick(90.0, 1.0), "00:01:30");
}

#[test]
fn value_ticks_trim_trailing_zeros() {
    assert_eq!(format_value_tick(1500.0), "1500");
    assert_eq!(format_value_tick(0.125), "0.125");
    assert_eq!(format_value_tick(-2.5), "-2.5");
    assert!(format_value_tick(15_000_000.0).contains('e'));
}
