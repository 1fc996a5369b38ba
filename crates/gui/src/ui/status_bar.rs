use egui::Ui;

use crate::state::grid::{cell_label, cell_summary};
use crate::state::{AppState, ClipboardStatus};

const HINT: &str = "F raise  D lower  C colour  Ctrl+V paste  Ctrl+O open";

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui| {
        match state.selected_cell() {
            Some((index, cell)) => {
                ui.label(format!(
                    "{}: {}",
                    cell_label(&state.grid.layout(), index),
                    cell_summary(&cell)
                ));
            }
            None => {
                ui.weak("No block under pointer");
            }
        }

        ui.separator();
        ui.weak(format!("Extruded: {}", state.grid.extruded_count()));

        if let Some(notice) = &state.notice {
            ui.separator();
            if notice.is_error {
                ui.colored_label(egui::Color32::from_rgb(190, 40, 40), notice.text.as_str());
            } else {
                ui.label(notice.text.as_str());
            }
        }

        // Right-aligned clipboard state and hints
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if let Some(label) = state.clipboard_status.label() {
                if matches!(state.clipboard_status, ClipboardStatus::Failed(_)) {
                    ui.colored_label(egui::Color32::from_rgb(190, 120, 20), label);
                } else {
                    ui.weak(label);
                }
            }
            ui.separator();
            ui.weak(HINT);
        });
    });
}
