//! Pointer and keyboard input mapping

use glam::Vec2;

/// Edit applied to the cell under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCommand {
    /// Raise (positive) or lower (negative) the selected cell
    ChangeDepthBy(i32),
    /// Cycle the colour of the selected extruded cell
    ToggleColor,
}

pub const KEY_CODE_F: u32 = 70;
pub const KEY_CODE_D: u32 = 68;
pub const KEY_CODE_C: u32 = 67;

/// Map a DOM-style key code to a command. Unbound keys return `None`.
pub fn command_for_key_code(code: u32) -> Option<GridCommand> {
    match code {
        KEY_CODE_F => Some(GridCommand::ChangeDepthBy(1)),
        KEY_CODE_D => Some(GridCommand::ChangeDepthBy(-1)),
        KEY_CODE_C => Some(GridCommand::ToggleColor),
        _ => None,
    }
}

/// Map an egui key to a command. Unbound keys return `None`.
pub fn command_for_key(key: egui::Key) -> Option<GridCommand> {
    match key {
        egui::Key::F => command_for_key_code(KEY_CODE_F),
        egui::Key::D => command_for_key_code(KEY_CODE_D),
        egui::Key::C => command_for_key_code(KEY_CODE_C),
        _ => None,
    }
}

/// Id of the viewport's interaction response
pub fn viewport_id() -> egui::Id {
    egui::Id::new("grid_viewport")
}

/// Edit keys are ignored while a widget other than the viewport holds focus
pub fn edit_keys_blocked(focused: Option<egui::Id>) -> bool {
    focused.is_some_and(|id| id != viewport_id())
}

/// Convert surface pixel coordinates to normalized device coordinates.
///
/// `x' = (x / w) * 2 - 1`, `y' = -(y / h) * 2 + 1`
pub fn pointer_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new((x / width) * 2.0 - 1.0, -(y / height) * 2.0 + 1.0)
}

/// Last known pointer position in NDC
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    ndc: Vec2,
}

impl PointerState {
    pub fn ndc(&self) -> Vec2 {
        self.ndc
    }

    pub fn set_ndc(&mut self, ndc: Vec2) {
        self.ndc = ndc;
    }

    /// Update from a screen position inside the drawing surface
    pub fn set_screen(&mut self, pos: egui::Pos2, rect: egui::Rect) {
        self.ndc = pointer_to_ndc(
            pos.x - rect.left(),
            pos.y - rect.top(),
            rect.width(),
            rect.height(),
        );
    }
}
