use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::error::NoticeLevel;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – plot controls
// ---------------------------------------------------------------------------

/// Render the control panel: column selector, reference lines, scale mode.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Columns");
    ui.separator();

    // Clone the names so the list can mutate the selection while drawing.
    let names: Option<Vec<String>> = state
        .table
        .as_ref()
        .map(|t| t.column_names().map(str::to_string).collect());

    match names {
        None => {
            ui.label("No file loaded.");
        }
        Some(names) => {
            ScrollArea::vertical()
                .max_height(ui.available_height() * 0.5)
                .auto_shrink([false, true])
                .show(ui, |ui: &mut Ui| {
                    for name in &names {
                        let is_selected = state.selected.contains(name);
                        if ui.selectable_label(is_selected, name).clicked() {
                            state.toggle_selected(name);
                        }
                    }
                });
        }
    }

    ui.separator();
    ui.strong("Reference lines");
    for (i, field) in state.ref_lines.iter_mut().enumerate() {
        ui.horizontal(|ui: &mut Ui| {
            ui.checkbox(&mut field.enabled, format!("Line {}", i + 1));
            ui.add(
                egui::TextEdit::singleline(&mut field.text)
                    .desired_width(80.0)
                    .hint_text("value"),
            );
        });
    }

    ui.separator();
    ui.checkbox(&mut state.separate_scales, "Separate scales");

    ui.add_space(8.0);
    if ui.button("Generate plot").clicked() {
        state.request_plot();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = &state.table {
            ui.label(format!(
                "{} rows, {} columns",
                table.n_rows(),
                table.columns.len()
            ));
        }
    });
}

// ---------------------------------------------------------------------------
// Notice modal
// ---------------------------------------------------------------------------

/// Show the pending notice, if any, as a dismissible modal.
pub fn notice_modal(ctx: &egui::Context, state: &mut AppState) {
    let Some(notice) = state.notice.clone() else {
        return;
    };

    let mut dismissed = false;
    let response = egui::Modal::new(egui::Id::new("notice_modal")).show(ctx, |ui| {
        ui.set_max_width(420.0);
        let color = match notice.level {
            NoticeLevel::Warning => Color32::YELLOW,
            NoticeLevel::Error => Color32::RED,
        };
        ui.heading(RichText::new(&notice.title).color(color));
        ui.add_space(4.0);
        ui.label(&notice.message);
        ui.separator();
        if ui.button("OK").clicked() {
            dismissed = true;
        }
    });

    if dismissed || response.should_close() {
        state.notice = None;
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open CSV time series")
        .add_filter("CSV", &["csv"])
        .add_filter("All files", &["*"])
        .pick_file();

    if let Some(path) = file {
        state.load_from_path(&path);
    }
}
