//! Main application module

mod keyboard;
mod styles;

use eframe::egui;

use crate::clipboard::{ClipboardSink, DisabledClipboard, EguiClipboard};
use crate::state::{AppSettings, AppState};
use crate::ui::status_bar;
use crate::viewport::ViewportPanel;

/// Main application
pub struct GridApp {
    state: AppState,
    viewport: ViewportPanel,
}

impl GridApp {
    pub fn new(cc: &eframe::CreationContext<'_>, initial_blob: Option<String>) -> Self {
        let settings = AppSettings::load();

        let clipboard: Box<dyn ClipboardSink> = if settings.clipboard.enabled {
            Box::new(EguiClipboard::new(cc.egui_ctx.clone()))
        } else {
            tracing::info!("Clipboard output disabled in settings");
            Box::new(DisabledClipboard)
        };

        styles::configure_styles(&cc.egui_ctx, settings.ui.font_size);

        let mut viewport = ViewportPanel::new(&settings.camera);

        // Initialize GL renderer if glow context is available
        if let Some(gl) = cc.gl.as_ref() {
            viewport.init_gl(gl);
        }

        let mut state = AppState::new(shared::GridLayout::default(), settings, clipboard);

        // A bad file is reported in the status bar; the grid starts flat
        if let Some(blob) = initial_blob {
            let _ = state.load_blob(&blob);
        }

        Self { state, viewport }
    }
}

impl eframe::App for GridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_clipboard();

        keyboard::handle_keyboard(ctx, &mut self.state);

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(20.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style())
                    .inner_margin(egui::Margin::symmetric(8, 1)),
            )
            .show(ctx, |ui| {
                status_bar::show(ui, &self.state);
            });

        // ── Central panel: 3D viewport ───────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.viewport.show(ui, &mut self.state);
            });
    }

    fn on_exit(&mut self, gl: Option<&glow::Context>) {
        if let Some(gl) = gl {
            self.viewport.destroy_gl(gl);
        }
    }
}
