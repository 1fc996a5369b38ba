//! Headless test harness for programmatic grid manipulation.
//!
//! Drives the same `AppState` the window uses, with an in-memory clipboard
//! and a fixed camera in place of the viewport.

use shared::{Cell, CellColor, CellIndex, GridLayout, InvalidSaveData};

use crate::clipboard::MemoryClipboard;
use crate::input::GridCommand;
use crate::state::{AppSettings, AppState, CommandOutcome};
use crate::viewport::camera::ArcBallCamera;

/// Aspect ratio used for headless picking
pub const HARNESS_ASPECT: f32 = 1.0;

/// Headless test harness: grid state, memory clipboard, and a camera
pub struct TestHarness {
    pub state: AppState,
    pub camera: ArcBallCamera,
    clipboard: MemoryClipboard,
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHarness {
    /// Create a harness over the full-size grid.
    pub fn new() -> Self {
        Self::with_layout(GridLayout::default())
    }

    /// Create a harness over an `xn` by `yn` grid.
    pub fn with_size(xn: usize, yn: usize) -> Self {
        Self::with_layout(GridLayout::new(xn, yn))
    }

    pub fn with_layout(layout: GridLayout) -> Self {
        let settings = AppSettings::default();
        let clipboard = MemoryClipboard::new();
        let camera = ArcBallCamera::new(&settings.camera);
        let state = AppState::new(layout, settings, Box::new(clipboard.clone()));
        Self {
            state,
            camera,
            clipboard,
        }
    }

    pub fn size(&self) -> usize {
        self.state.grid.size()
    }

    // ── Selection ─────────────────────────────────────────────

    /// Select a cell directly. Returns false for an unknown index.
    pub fn select(&mut self, index: CellIndex) -> bool {
        if !self.state.grid.is_valid_index(index) {
            return false;
        }
        self.state.selection.select(index);
        true
    }

    pub fn clear_selection(&mut self) {
        self.state.selection.clear();
    }

    pub fn selected(&self) -> Option<CellIndex> {
        self.state.selection.selected()
    }

    /// Move the pointer to an NDC position and run one frame of picking.
    pub fn pick(&mut self, x: f32, y: f32) -> Option<CellIndex> {
        self.state.pointer.set_ndc(glam::Vec2::new(x, y));
        self.frame()
    }

    /// NDC position of the front face centre of a cell, as seen by the harness camera
    pub fn ndc_of(&self, index: CellIndex) -> Option<glam::Vec2> {
        let aabb = self.state.proxies.aabb(index)?;
        let front = glam::Vec3::new(aabb.center().x, aabb.center().y, aabb.max.z);
        self.camera.project_ndc(front, HARNESS_ASPECT)
    }

    /// One animation frame: resync visuals and recompute the selection.
    pub fn frame(&mut self) -> Option<CellIndex> {
        self.state.sync_visuals();
        self.state.poll_clipboard();
        self.state.update_selection(&self.camera, HARNESS_ASPECT)
    }

    // ── Commands ──────────────────────────────────────────────

    pub fn execute(&mut self, command: GridCommand) -> CommandOutcome {
        self.state.execute(command)
    }

    pub fn change_depth_by(&mut self, amount: i32) -> CommandOutcome {
        self.execute(GridCommand::ChangeDepthBy(amount))
    }

    pub fn toggle_color(&mut self) -> CommandOutcome {
        self.execute(GridCommand::ToggleColor)
    }

    /// Feed a DOM-style key code through the key mapping
    pub fn press_key_code(&mut self, code: u32) -> Option<CommandOutcome> {
        crate::input::command_for_key_code(code).map(|cmd| self.execute(cmd))
    }

    // ── Persistence ───────────────────────────────────────────

    pub fn load_blob(&mut self, blob: &str) -> Result<(), InvalidSaveData> {
        self.state.load_blob(blob)
    }

    pub fn save_blob(&self) -> Result<String, serde_json::Error> {
        self.state.grid.save_blob()
    }

    /// Last text the editor copied to the clipboard
    pub fn clipboard_text(&self) -> Option<String> {
        self.clipboard.contents()
    }

    pub fn clipboard_writes(&self) -> usize {
        self.clipboard.write_count()
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn cell(&self, index: CellIndex) -> Option<Cell> {
        self.state.grid.get(index)
    }

    pub fn depths(&self) -> Vec<u8> {
        self.state.grid.depths().to_vec()
    }

    pub fn colors(&self) -> Vec<CellColor> {
        self.state.grid.colors().to_vec()
    }

    /// True if every cell satisfies `depth == 0 <=> color == None`
    pub fn invariant_holds(&self) -> bool {
        (0..self.size()).all(|i| self.cell(i).is_some_and(|c| c.is_consistent()))
    }
}
