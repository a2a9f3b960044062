use std::collections::BTreeSet;
use std::path::Path;

use crate::data::loader::load_table;
use crate::data::model::Table;
use crate::error::{Notice, PlotError};
use crate::plot::compose::{compose, PlotModel};
use crate::plot::config::{resolve_config, RefLineField};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Both user actions (`load_from_path`, `request_plot`) live here rather
/// than in the widget code so they can be driven from tests without a
/// display; `ui` only forwards events.
pub struct AppState {
    /// Loaded table (None until the first successful load).
    pub table: Option<Table>,

    /// Column names the user marked in the selector.
    pub selected: BTreeSet<String>,

    /// The two reference-line checkbox + text field pairs.
    pub ref_lines: [RefLineField; 2],

    /// One shared Y axis (false) or one axis per selected series (true).
    pub separate_scales: bool,

    /// The currently displayed plot, if any.
    pub plot: Option<PlotModel>,

    /// Set when a fresh plot should also reset the view transform.
    pub reset_plot_view: bool,

    /// Pending modal notice from a failed action.
    pub notice: Option<Notice>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            table: None,
            selected: BTreeSet::new(),
            ref_lines: [RefLineField::default(), RefLineField::default()],
            separate_scales: false,
            plot: None,
            reset_plot_view: false,
            notice: None,
        }
    }
}

impl AppState {
    /// Load a CSV file and, on success, replace the table wholesale.
    ///
    /// On failure the previous table (and selection) stay exactly as they
    /// were; the error becomes a modal notice.
    pub fn load_from_path(&mut self, path: &Path) {
        match load_table(path) {
            Ok(table) => {
                log::info!(
                    "loaded {} rows, columns {:?}",
                    table.n_rows(),
                    table.column_names().collect::<Vec<_>>()
                );
                self.set_table(table);
            }
            Err(err) => {
                log::error!("failed to load {}: {err}", path.display());
                self.notice = Some(Notice::load_error(err));
            }
        }
    }

    /// Ingest a newly loaded table; the selector repopulates and the old
    /// selection is dropped. A previously rendered plot stays on screen.
    pub fn set_table(&mut self, table: Table) {
        self.table = Some(table);
        self.selected.clear();
        self.notice = None;
    }

    /// Toggle a column in the selection.
    pub fn toggle_selected(&mut self, name: &str) {
        if !self.selected.remove(name) {
            self.selected.insert(name.to_string());
        }
    }

    /// The current selection ordered by table column order (the order the
    /// selector lists them in).
    pub fn selection_in_table_order(&self) -> Vec<String> {
        match &self.table {
            Some(table) => table
                .column_names()
                .filter(|name| self.selected.contains(*name))
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Validate the current inputs and compose a new plot.
    ///
    /// On success the previous plot is replaced and the view resets; on
    /// failure the previous plot stays and the error becomes a notice.
    pub fn request_plot(&mut self) {
        let result = match &self.table {
            None => Err(PlotError::NoData),
            Some(table) => resolve_config(
                self.selection_in_table_order(),
                &self.ref_lines,
                self.separate_scales,
            )
            .and_then(|config| compose(table, &config)),
        };

        match result {
            Ok(model) => {
                log::info!(
                    "composed plot: {} series on {} axes, {} reference lines",
                    model.series.len(),
                    model.axes.len(),
                    model.ref_lines.len()
                );
                self.plot = Some(model);
                self.reset_plot_view = true;
            }
            Err(err) => {
                log::warn!("plot request rejected: {err}");
                self.notice = Some(Notice::plot_error(&err));
            }
        }
    }
}
