use chrono::{DateTime, NaiveDateTime};
use eframe::egui::Color32;

use super::config::PlotConfig;
use crate::color::{reference_color, series_color, series_palette};
use crate::data::model::Table;
use crate::error::PlotError;

// ---------------------------------------------------------------------------
// PlotModel – the composed plot as plain data
// ---------------------------------------------------------------------------

/// Everything the renderer needs to draw one plot. Composed once per
/// "Generate plot" click and replaced wholesale by the next one.
#[derive(Debug, Clone)]
pub struct PlotModel {
    pub series: Vec<SeriesModel>,
    /// Vertical axes; index 0 is the base (left) axis the reference lines
    /// live on, any further entries stack on the right.
    pub axes: Vec<AxisModel>,
    pub ref_lines: Vec<RefLineModel>,
}

/// One plotted series. `points` are already in shared plot space
/// (x = epoch seconds, y mapped through the owning axis' [`ValueMap`]).
#[derive(Debug, Clone)]
pub struct SeriesModel {
    pub name: String,
    pub color: Color32,
    /// Index into [`PlotModel::axes`].
    pub axis: usize,
    pub points: Vec<[f64; 2]>,
}

/// A vertical axis: label and color of the series that owns it, plus the
/// map from series values into shared plot space.
#[derive(Debug, Clone)]
pub struct AxisModel {
    pub label: String,
    pub color: Color32,
    pub map: ValueMap,
}

/// A dashed horizontal line on the base axis.
#[derive(Debug, Clone)]
pub struct RefLineModel {
    pub label: String,
    pub value: f64,
    pub color: Color32,
}

// ---------------------------------------------------------------------------
// ValueMap – affine series-space ↔ plot-space mapping
// ---------------------------------------------------------------------------

/// Affine map `plot = value * scale + offset`.
///
/// egui_plot draws every item in one coordinate space; extra Y axes are
/// display hints. Separate scales therefore rescale each additional series
/// into the base axis' value range, and the axis' tick formatter applies
/// the inverse so ticks read in true series units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueMap {
    pub scale: f64,
    pub offset: f64,
}

impl ValueMap {
    pub fn identity() -> Self {
        ValueMap {
            scale: 1.0,
            offset: 0.0,
        }
    }

    /// Map `from = (lo, hi)` onto `to = (lo, hi)`. Ranges must be
    /// non-degenerate (see [`widen_degenerate`]).
    pub fn fit(from: (f64, f64), to: (f64, f64)) -> Self {
        let scale = (to.1 - to.0) / (from.1 - from.0);
        ValueMap {
            scale,
            offset: to.0 - from.0 * scale,
        }
    }

    /// Series value → shared plot space.
    pub fn to_plot(&self, value: f64) -> f64 {
        value * self.scale + self.offset
    }

    /// Shared plot space → series value (for tick labels).
    pub fn to_value(&self, plot: f64) -> f64 {
        (plot - self.offset) / self.scale
    }
}

// ---------------------------------------------------------------------------
// compose
// ---------------------------------------------------------------------------

/// Compose a [`PlotModel`] from a table and a validated request.
///
/// Series are assigned palette colors by selection index (wrapping).
/// Without separate scales every series shares axis 0, whose label follows
/// the most recently plotted series; with separate scales each series past
/// the first gets its own right-hand axis fitted to the base range.
pub fn compose(table: &Table, config: &PlotConfig) -> Result<PlotModel, PlotError> {
    let xs: Vec<f64> = table.timestamps.iter().map(epoch_seconds).collect();
    let palette = series_palette();

    let mut series = Vec::with_capacity(config.columns.len());
    let mut axes: Vec<AxisModel> = Vec::new();
    let mut base_range = (0.0, 1.0);

    for (i, name) in config.columns.iter().enumerate() {
        let column = table
            .column(name)
            .ok_or_else(|| PlotError::UnknownColumn(name.clone()))?;
        let color = series_color(&palette, i);
        let range = finite_range(&column.values).map(widen_degenerate);

        if i == 0 {
            base_range = range.unwrap_or((0.0, 1.0));
            axes.push(AxisModel {
                label: name.clone(),
                color,
                map: ValueMap::identity(),
            });
        }

        let (axis, map) = if config.separate_scales && i > 0 {
            let own = range.unwrap_or((0.0, 1.0));
            let map = ValueMap::fit(own, base_range);
            axes.push(AxisModel {
                label: name.clone(),
                color,
                map,
            });
            (axes.len() - 1, map)
        } else {
            // Shared axis: the label and its color follow the latest series.
            axes[0].label = name.clone();
            axes[0].color = color;
            (0, ValueMap::identity())
        };

        let points: Vec<[f64; 2]> = xs
            .iter()
            .zip(&column.values)
            .filter(|(_, y)| y.is_finite())
            .map(|(&x, &y)| [x, map.to_plot(y)])
            .collect();

        series.push(SeriesModel {
            name: name.clone(),
            color,
            axis,
            points,
        });
    }

    let ref_lines = config
        .ref_lines
        .iter()
        .map(|r| RefLineModel {
            label: format!("Reference line {}: {}", r.index, r.value),
            value: r.value,
            color: reference_color(r.index - 1),
        })
        .collect();

    Ok(PlotModel {
        series,
        axes,
        ref_lines,
    })
}

/// Plot-space x for a timestamp: seconds since the UNIX epoch.
pub fn epoch_seconds(ts: &NaiveDateTime) -> f64 {
    ts.and_utc().timestamp_millis() as f64 / 1000.0
}

/// Min and max over the finite values, if any.
fn finite_range(values: &[f64]) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values {
        if v.is_finite() {
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }
    (lo <= hi).then_some((lo, hi))
}

/// Widen a flat range so [`ValueMap::fit`] never divides by zero.
fn widen_degenerate((lo, hi): (f64, f64)) -> (f64, f64) {
    if hi - lo > f64::EPSILON * lo.abs().max(1.0) {
        (lo, hi)
    } else {
        (lo - 0.5, hi + 0.5)
    }
}

// ---------------------------------------------------------------------------
// Tick label text
// ---------------------------------------------------------------------------

/// Format an X tick (epoch seconds) with granularity picked from the tick
/// step: whole days show dates, finer steps show times.
pub fn format_time_tick(epoch_secs: f64, step: f64) -> String {
    let Some(dt) = DateTime::from_timestamp(epoch_secs.floor() as i64, 0) else {
        return String::new();
    };
    let fmt = if step >= 86_400.0 {
        "%Y-%m-%d"
    } else if step >= 3_600.0 {
        "%m-%d %H:%M"
    } else if step >= 60.0 {
        "%H:%M"
    } else {
        "%H:%M:%S"
    };
    dt.format(fmt).to_string()
}

/// Format a Y tick value, trimming trailing zeros; large and tiny
/// magnitudes fall back to scientific notation.
pub fn format_value_tick(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    if value != 0.0 && (value.abs() >= 1e6 || value.abs() < 1e-3) {
        return format!("{value:.2e}");
    }
    format!("{value:.3}")
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
