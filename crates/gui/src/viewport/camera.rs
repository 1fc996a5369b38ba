use glam::{Mat4, Vec2, Vec3, Vec4};

use super::picking::Ray;
use crate::state::settings::CameraSettings;

/// Angular speed below which damped motion stops
const REST_VELOCITY: f32 = 1e-4;

/// Orbit camera for the block viewport
#[derive(Clone, Copy, Debug)]
pub struct ArcBallCamera {
    /// Horizontal rotation angle (radians)
    pub yaw: f32,
    /// Vertical rotation angle (radians)
    pub pitch: f32,
    /// Distance from target
    pub distance: f32,
    /// Camera target point
    pub target: Vec3,
    /// Vertical field of view (radians)
    pub fov: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Fraction of the remaining rotation applied per frame; 0 disables damping
    pub damping: f32,
    yaw_velocity: f32,
    pitch_velocity: f32,
}

impl Default for ArcBallCamera {
    fn default() -> Self {
        Self::new(&CameraSettings::default())
    }
}

impl ArcBallCamera {
    pub fn new(settings: &CameraSettings) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: settings.distance,
            target: Vec3::ZERO,
            fov: settings.fov_degrees.to_radians(),
            min_distance: settings.min_distance,
            max_distance: settings.max_distance,
            damping: settings.damping.clamp(0.0, 1.0),
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
        }
    }

    pub fn rotate(&mut self, dx: f32, dy: f32) {
        if self.damping > 0.0 {
            self.yaw_velocity += dx.to_radians();
            self.pitch_velocity += dy.to_radians();
        } else {
            self.yaw += dx.to_radians();
            self.pitch = (self.pitch + dy.to_radians()).clamp(-1.5, 1.5);
        }
    }

    /// Advance damped rotation by one frame. Returns true while still moving.
    pub fn update(&mut self) -> bool {
        if self.damping <= 0.0 {
            return false;
        }

        self.yaw += self.yaw_velocity * self.damping;
        self.pitch = (self.pitch + self.pitch_velocity * self.damping).clamp(-1.5, 1.5);
        self.yaw_velocity *= 1.0 - self.damping;
        self.pitch_velocity *= 1.0 - self.damping;

        if self.yaw_velocity.abs() < REST_VELOCITY && self.pitch_velocity.abs() < REST_VELOCITY {
            self.yaw_velocity = 0.0;
            self.pitch_velocity = 0.0;
            return false;
        }
        true
    }

    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 - delta)).clamp(self.min_distance, self.max_distance);
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        let right = self.right_vector();
        let up = self.up_vector();
        let offset = right * dx + up * dy;
        self.target += offset;
    }

    /// Camera position in world space
    pub fn eye_position(&self) -> Vec3 {
        let cy = self.yaw.cos();
        let sy = self.yaw.sin();
        let cp = self.pitch.cos();
        let sp = self.pitch.sin();

        self.target
            + Vec3::new(
                self.distance * cp * sy,
                self.distance * sp,
                self.distance * cp * cy,
            )
    }

    /// View matrix (world -> camera)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye_position(), self.target, Vec3::Y)
    }

    /// Projection matrix (camera -> clip)
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov, aspect, 0.1, 1000.0)
    }

    /// Combined view-projection matrix
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    fn right_vector(&self) -> Vec3 {
        let fwd = (self.target - self.eye_position()).normalize_or_zero();
        fwd.cross(Vec3::Y).normalize_or_zero()
    }

    fn up_vector(&self) -> Vec3 {
        let fwd = (self.target - self.eye_position()).normalize_or_zero();
        let right = self.right_vector();
        right.cross(fwd).normalize_or_zero()
    }

    /// Project a world point to normalized device coordinates
    pub fn project_ndc(&self, point: Vec3, aspect: f32) -> Option<Vec2> {
        let p = self.view_projection(aspect) * point.extend(1.0);
        if p.w <= 0.0 {
            return None;
        }
        Some(p.truncate().truncate() / p.w)
    }

    /// Project a 3D point to 2D screen coords (for overlays and the software fallback)
    pub fn project(&self, point: Vec3, rect: egui::Rect) -> Option<egui::Pos2> {
        let ndc = self.project_ndc(point, rect.width() / rect.height())?;
        let screen_x = rect.center().x + ndc.x * rect.width() * 0.5;
        let screen_y = rect.center().y - ndc.y * rect.height() * 0.5;
        Some(egui::pos2(screen_x, screen_y))
    }

    /// Cast a ray through a point given in normalized device coordinates
    pub fn ray_from_ndc(&self, ndc: Vec2, aspect: f32) -> Ray {
        // Inverse view-projection
        let vp_inv = self.view_projection(aspect).inverse();

        // Unproject near and far points
        let near_world = vp_inv * Vec4::new(ndc.x, ndc.y, -1.0, 1.0);
        let far_world = vp_inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);

        let near = near_world.truncate() / near_world.w;
        let far = far_world.truncate() / far_world.w;

        Ray {
            origin: self.eye_position(),
            direction: (far - near).normalize_or_zero(),
        }
    }
}
