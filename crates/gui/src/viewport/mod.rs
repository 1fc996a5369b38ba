//! 3D viewport panel with OpenGL rendering

mod gl_renderer;
mod renderer;
pub use extrude_grid_lib::viewport::{camera, mesh, proxies};

use std::sync::{Arc, Mutex};

use egui::Ui;

use crate::input::viewport_id;
use crate::state::settings::CameraSettings;
use crate::state::AppState;
use camera::ArcBallCamera;
use gl_renderer::GlRenderer;
use mesh::MeshData;
use proxies::BlockProxies;

/// 3D viewport panel with OpenGL rendering
pub struct ViewportPanel {
    camera: ArcBallCamera,
    gl_renderer: Option<Arc<Mutex<GlRenderer>>>,
    /// Combined block mesh and the proxies version it was built from
    mesh_cache: Option<(u64, Arc<MeshData>)>,
}

impl ViewportPanel {
    pub fn new(settings: &CameraSettings) -> Self {
        Self {
            camera: ArcBallCamera::new(settings),
            gl_renderer: None,
            mesh_cache: None,
        }
    }

    /// Initialize GL renderer (must be called with a GL context)
    pub fn init_gl(&mut self, gl: &glow::Context) {
        match GlRenderer::new(gl) {
            Ok(renderer) => self.gl_renderer = Some(Arc::new(Mutex::new(renderer))),
            Err(e) => tracing::error!("GL renderer unavailable, using software fallback: {e}"),
        }
    }

    /// Release GPU resources
    pub fn destroy_gl(&mut self, gl: &glow::Context) {
        if let Some(renderer) = self.gl_renderer.take() {
            if let Ok(r) = renderer.lock() {
                r.destroy(gl);
            }
        }
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut AppState) {
        let (rect, _) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
        let response = ui.interact(rect, viewport_id(), egui::Sense::click_and_drag());

        // ── Camera controls ─────────────────────────────
        self.handle_camera(&response, ui);

        // ── Pointer → NDC, tracked over the whole surface ──────────
        if let Some(pos) = ui.input(|i| i.pointer.latest_pos()) {
            if rect.contains(pos) {
                state.pointer.set_screen(pos, rect);
            }
        }

        // ── Animation frame: sync visuals, then pick ────────────────
        state.sync_visuals();
        state.update_selection(&self.camera, rect.width() / rect.height().max(1.0));

        if !ui.is_rect_visible(rect) {
            return;
        }

        self.render_gl(ui, rect, state);

        if state.settings.viewport.show_camera_info {
            self.draw_camera_info(&ui.painter_at(rect), rect);
        }
    }

    fn handle_camera(&mut self, response: &egui::Response, ui: &Ui) {
        if response.dragged_by(egui::PointerButton::Primary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            let delta = response.drag_delta();
            self.camera.rotate(delta.x * 0.5, delta.y * 0.5);
        }

        if response.dragged_by(egui::PointerButton::Secondary) {
            let delta = response.drag_delta();
            let scale = self.camera.distance * 0.002;
            self.camera.pan(-delta.x * scale, delta.y * scale);
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll.abs() > 0.1 {
                self.camera.zoom(scroll * 0.01);
            }
        }

        if self.camera.update() {
            ui.ctx().request_repaint();
        }
    }

    fn blocks_mesh(&mut self, proxies: &BlockProxies) -> (u64, Arc<MeshData>) {
        let version = proxies.version();
        match &self.mesh_cache {
            Some((cached, mesh)) if *cached == version => (version, mesh.clone()),
            _ => {
                let mesh = Arc::new(mesh::blocks_mesh(proxies));
                tracing::trace!(version, triangles = mesh.triangle_count(), "Rebuilt block mesh");
                self.mesh_cache = Some((version, mesh.clone()));
                (version, mesh)
            }
        }
    }

    fn render_gl(&mut self, ui: &mut Ui, rect: egui::Rect, state: &AppState) {
        let Some(gl_renderer) = self.gl_renderer.clone() else {
            // Fallback: software rendering
            renderer::paint_viewport(ui, rect, &self.camera, state);
            return;
        };

        let camera = self.camera;
        let (version, meshes) = self.blocks_mesh(&state.proxies);
        let bg_color = state.settings.viewport.background_color;
        let light_height = state.grid.layout().yn as f32 / 2.0;

        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(eframe::egui_glow::CallbackFn::new(move |info, painter| {
                let gl = painter.gl();

                let clip = info.clip_rect_in_pixels();
                let viewport = [
                    clip.left_px as f32,
                    clip.from_bottom_px as f32,
                    clip.width_px as f32,
                    clip.height_px as f32,
                ];

                if let Ok(mut r) = gl_renderer.lock() {
                    r.sync_blocks(gl, &meshes, version);

                    let render_params = gl_renderer::RenderParams {
                        viewport,
                        bg_color,
                        lights: gl_renderer::spot_positions(light_height),
                    };
                    r.paint(gl, &camera, &render_params);
                }
            })),
        };

        ui.painter().add(callback);
    }

    fn draw_camera_info(&self, painter: &egui::Painter, rect: egui::Rect) {
        let overlay_rect = egui::Rect::from_min_size(
            egui::pos2(rect.right() - 140.0, rect.top() + 4.0),
            egui::vec2(136.0, 44.0),
        );
        painter.rect_filled(
            overlay_rect,
            4.0,
            egui::Color32::from_rgba_premultiplied(0, 0, 0, 140),
        );
        painter.text(
            overlay_rect.min + egui::vec2(6.0, 4.0),
            egui::Align2::LEFT_TOP,
            format!(
                "Dist: {:.1}\nYaw: {:.0}  Pitch: {:.0}",
                self.camera.distance,
                self.camera.yaw.to_degrees(),
                self.camera.pitch.to_degrees(),
            ),
            egui::FontId::monospace(10.0),
            egui::Color32::from_rgb(220, 220, 225),
        );
    }
}
