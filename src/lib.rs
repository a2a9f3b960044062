//! csvplot: a small desktop viewer for semicolon-delimited CSV time series.
//!
//! The crate splits into a pure core and a thin egui shell:
//! * [`data`] parses a CSV file into a [`data::model::Table`],
//! * [`plot`] validates a plot request and composes an explicit
//!   [`plot::compose::PlotModel`],
//! * [`ui`] wires both to egui widgets and renders the model with
//!   `egui_plot`.
//!
//! Everything below `ui` works without a display, which is where the
//! integration tests live.

pub mod app;
pub mod color;
pub mod data;
pub mod error;
pub mod plot;
pub mod state;
pub mod ui;
