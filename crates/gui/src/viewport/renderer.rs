//! Software rendering for the viewport when no GL context is available.
//!
//! Draws the front face of every block, far to near.

use egui::{Color32, Rect, Stroke, Ui};
use glam::Vec3;

use super::camera::ArcBallCamera;
use crate::state::AppState;

/// Paint the block grid using egui's painter
pub fn paint_viewport(ui: &Ui, rect: Rect, camera: &ArcBallCamera, state: &AppState) {
    let painter = ui.painter_at(rect);

    // Background
    let bg = &state.settings.viewport.background_color;
    painter.rect_filled(rect, 0.0, Color32::from_rgb(bg[0], bg[1], bg[2]));

    let half = state.proxies.block_size() * 0.5;
    let eye = camera.eye_position();
    let facing_front = eye.z > 0.0;
    let face_z = if facing_front { half.z } else { -half.z };

    let mut faces: Vec<(f32, [Vec3; 4], [u8; 3])> = state
        .proxies
        .iter()
        .map(|proxy| {
            let c = proxy.center() + Vec3::Z * face_z;
            (c.distance_squared(eye), face_corners(c, half), proxy.color)
        })
        .collect();

    faces.sort_by(|a, b| b.0.total_cmp(&a.0));

    let selected = state.selection.selected();
    let outline = Stroke::new(0.5, Color32::from_rgba_premultiplied(0, 0, 0, 60));

    for (_, corners, rgb) in &faces {
        let points: Option<Vec<egui::Pos2>> =
            corners.iter().map(|p| camera.project(*p, rect)).collect();
        let Some(points) = points else {
            continue;
        };
        painter.add(egui::Shape::convex_polygon(
            points,
            Color32::from_rgb(rgb[0], rgb[1], rgb[2]),
            outline,
        ));
    }

    // Hovered block outline
    if let Some(proxy) = selected.and_then(|i| state.proxies.get(i)) {
        let corners = face_corners(proxy.center() + Vec3::Z * face_z, half);
        let points: Option<Vec<egui::Pos2>> =
            corners.iter().map(|p| camera.project(*p, rect)).collect();
        if let Some(points) = points {
            painter.add(egui::Shape::closed_line(
                points,
                Stroke::new(1.5, Color32::from_rgb(255, 255, 255)),
            ));
        }
    }
}

fn face_corners(center: Vec3, half: Vec3) -> [Vec3; 4] {
    [
        center + Vec3::new(-half.x, -half.y, 0.0),
        center + Vec3::new(half.x, -half.y, 0.0),
        center + Vec3::new(half.x, half.y, 0.0),
        center + Vec3::new(-half.x, half.y, 0.0),
    ]
}
