/// Plot composition: pure functions from user inputs to a drawable model.
///
/// ```text
///   selection + ref-line fields + flags
///        │  resolve_config
///        ▼
///   ┌────────────┐
///   │ PlotConfig  │  validated request
///   └────────────┘
///        │  compose (+ Table)
///        ▼
///   ┌────────────┐
///   │ PlotModel   │  series, axes, reference lines — ready to render
///   └────────────┘
/// ```
///
/// Nothing in here touches egui widgets, so the whole pipeline is
/// exercisable from plain tests.
pub mod compose;
pub mod config;
