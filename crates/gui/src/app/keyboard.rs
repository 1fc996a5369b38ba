//! Keyboard shortcut handling

use eframe::egui;

use crate::input::{command_for_key, edit_keys_blocked};
use crate::state::AppState;

/// Handle keyboard shortcuts for the application
pub fn handle_keyboard(ctx: &egui::Context, state: &mut AppState) {
    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| edit_keys_blocked(m.focused())) {
        return;
    }

    let mut commands = Vec::new();
    let mut pasted = None;
    let mut copy_requested = false;
    let mut open_requested = false;

    ctx.input(|i| {
        for event in &i.events {
            match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } if !modifiers.command => {
                    if let Some(cmd) = command_for_key(*key) {
                        commands.push(cmd);
                    }
                }
                // Ctrl+V: restore from a copied save blob
                egui::Event::Paste(text) => pasted = Some(text.clone()),
                // Ctrl+C arrives as a Copy event on most backends
                egui::Event::Copy => copy_requested = true,
                _ => {}
            }
        }
        // Ctrl+O: load from file
        if i.modifiers.command && i.key_pressed(egui::Key::O) {
            open_requested = true;
        }
    });

    for cmd in commands {
        state.execute(cmd);
    }

    if let Some(text) = pasted {
        let _ = state.load_blob(&text);
    }

    if copy_requested {
        state.save();
    }

    if open_requested {
        open_save_file(state);
    }
}

fn open_save_file(state: &mut AppState) {
    let Some(path) = rfd::FileDialog::new()
        .add_filter("Grid save", &["json", "txt"])
        .pick_file()
    else {
        return;
    };

    match std::fs::read_to_string(&path) {
        Ok(blob) => {
            tracing::info!("Loading grid from {}", path.display());
            let _ = state.load_blob(&blob);
        }
        Err(e) => {
            tracing::error!("Failed to read {}: {e}", path.display());
            state.notice = Some(crate::state::Notice {
                text: format!("Could not read {}", path.display()),
                is_error: true,
            });
        }
    }
}
