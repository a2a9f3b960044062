use eframe::egui::{RichText, Ui};
use egui_plot::{
    AxisHints, Corner, HLine, Legend, Line, LineStyle, Placement, Plot, PlotPoints,
};

use crate::plot::compose::{format_time_tick, format_value_tick};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Time-series plot (central panel)
// ---------------------------------------------------------------------------

/// Render the composed plot in the central panel.
///
/// `reset_view` is set for the first frame after a new composition so the
/// view transform snaps to the fresh data instead of keeping the previous
/// plot's pan/zoom.
pub fn timeseries_plot(ui: &mut Ui, state: &AppState, reset_view: bool) {
    let Some(model) = &state.plot else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Load a CSV file, select columns, then press \u{201c}Generate plot\u{201d}");
        });
        return;
    };

    let x_axes = vec![AxisHints::new_x()
        .label("Time")
        .formatter(|mark, _range| format_time_tick(mark.value, mark.step_size))];

    // One axis hint per composed axis: base on the left, extras stacked on
    // the right, each labeled in its series color and ticking in true
    // series units via the inverse value map.
    let y_axes: Vec<AxisHints> = model
        .axes
        .iter()
        .enumerate()
        .map(|(i, axis)| {
            let map = axis.map;
            AxisHints::new_y()
                .label(RichText::new(axis.label.clone()).color(axis.color))
                .formatter(move |mark, _range| format_value_tick(map.to_value(mark.value)))
                .placement(if i == 0 {
                    Placement::LeftBottom
                } else {
                    Placement::RightTop
                })
        })
        .collect();

    let mut plot = Plot::new("timeseries_plot")
        .legend(Legend::default().position(Corner::LeftTop))
        .custom_x_axes(x_axes)
        .custom_y_axes(y_axes)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);
    if reset_view {
        plot = plot.reset();
    }

    plot.show(ui, |plot_ui| {
        for series in &model.series {
            let points: PlotPoints = series.points.iter().copied().collect();
            plot_ui.line(
                Line::new(points)
                    .name(&series.name)
                    .color(series.color)
                    .width(1.5),
            );
        }

        for line in &model.ref_lines {
            plot_ui.hline(
                HLine::new(line.value)
                    .name(&line.label)
                    .color(line.color)
                    .style(LineStyle::dashed_loose())
                    .width(1.0),
            );
        }
    });
}
