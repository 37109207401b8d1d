use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::{AppState, StatusMessage};
use crate::ui::cards;

// ---------------------------------------------------------------------------
// Left side panel – statistics
// ---------------------------------------------------------------------------

/// Render the left statistics panel.
pub fn side_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Statistics");
    ui.separator();

    if let Some(path) = &state.source_path {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        ui.label(RichText::new(name).italics());
        ui.add_space(4.0);
    }

    let report = match &state.report {
        Some(report) => report,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            cards::stats_grid(ui, &report.statistics);
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.report.is_some(), egui::Button::new("Export results…"))
                .clicked()
            {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        match &state.status_message {
            Some(StatusMessage::Success(msg)) => {
                ui.label(RichText::new(msg).color(Color32::DARK_GREEN));
            }
            Some(StatusMessage::Error(msg)) => {
                ui.label(RichText::new(msg).color(Color32::RED));
            }
            None => {}
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open marks data")
        .add_filter("Supported files", &["csv", "tsv", "txt"])
        .add_filter("CSV", &["csv", "txt"])
        .add_filter("TSV", &["tsv"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}

pub fn export_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export results")
        .add_filter("JSON", &["json"])
        .set_file_name("marks_report.json")
        .save_file();

    if let Some(path) = file {
        if let Err(e) = state.export_report(&path) {
            log::error!("Failed to export results: {e:#}");
            state.status_message = Some(StatusMessage::Error(format!("Error: {e:#}")));
        }
    }
}
