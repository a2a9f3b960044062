/// Thin egui adapters: widgets forward events to [`crate::state::AppState`]
/// and render whatever model it holds.
pub mod panels;
pub mod plot;
