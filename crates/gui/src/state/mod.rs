pub mod grid;
pub mod selection;
pub mod settings;

use shared::{Cell, CellIndex, GridLayout, InvalidSaveData, SaveData};

use crate::clipboard::{ClipboardSink, ClipboardWrite};
use crate::input::{GridCommand, PointerState};
use crate::viewport::camera::ArcBallCamera;
use crate::viewport::picking::pick_cell;
use crate::viewport::proxies::BlockProxies;
pub use grid::GridState;
use selection::SelectionState;
pub use settings::AppSettings;

/// Result of applying a [`GridCommand`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The selected cell was edited and the grid saved
    Applied { index: CellIndex, cell: Cell },
    /// Nothing under the pointer; the grid is unchanged
    NoSelection,
    /// The command does not apply to the selected cell (colour on a flat cell)
    Unchanged { index: CellIndex },
}

/// Last known outcome of clipboard output
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClipboardStatus {
    #[default]
    Idle,
    Pending,
    /// Accepted by the sink. The egui sink only queues the text; a failed
    /// platform copy is logged by the windowing backend and never reported here.
    Sent,
    Failed(String),
}

impl ClipboardStatus {
    /// Status bar text, `None` when idle
    pub fn label(&self) -> Option<String> {
        match self {
            Self::Idle => None,
            Self::Pending => Some("Copying...".to_owned()),
            Self::Sent => Some("Queued for clipboard".to_owned()),
            Self::Failed(e) => Some(format!("Clipboard: {e}")),
        }
    }
}

/// A one-line message for the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

/// Combined application state
pub struct AppState {
    pub grid: GridState,
    pub proxies: BlockProxies,
    pub selection: SelectionState,
    pub pointer: PointerState,
    pub settings: AppSettings,
    pub clipboard_status: ClipboardStatus,
    pub notice: Option<Notice>,
    clipboard: Box<dyn ClipboardSink>,
    pending_writes: Vec<ClipboardWrite>,
}

impl AppState {
    pub fn new(
        layout: GridLayout,
        settings: AppSettings,
        clipboard: Box<dyn ClipboardSink>,
    ) -> Self {
        let grid = GridState::new(layout);
        let proxies = BlockProxies::new(&layout, &settings.palette);
        Self {
            grid,
            proxies,
            selection: SelectionState::default(),
            pointer: PointerState::default(),
            settings,
            clipboard_status: ClipboardStatus::Idle,
            notice: None,
            clipboard,
            pending_writes: Vec::new(),
        }
    }

    /// Selected index together with its cell
    pub fn selected_cell(&self) -> Option<(CellIndex, Cell)> {
        let index = self.selection.selected()?;
        Some((index, self.grid.get(index)?))
    }

    /// Apply a command to the selected cell, then resync visuals and save.
    pub fn execute(&mut self, command: GridCommand) -> CommandOutcome {
        let Some(index) = self.selection.selected() else {
            tracing::trace!(?command, "Ignoring command with no selection");
            return CommandOutcome::NoSelection;
        };

        let result = match command {
            GridCommand::ChangeDepthBy(amount) => self.grid.change_depth_by(index, amount),
            GridCommand::ToggleColor => self.grid.toggle_color(index),
        };

        match result {
            Some(cell) => {
                self.sync_visuals();
                self.save();
                CommandOutcome::Applied { index, cell }
            }
            None => CommandOutcome::Unchanged { index },
        }
    }

    /// Recompute the selection from the pointer. Runs once per frame.
    pub fn update_selection(&mut self, camera: &ArcBallCamera, aspect: f32) -> Option<CellIndex> {
        let picked = pick_cell(camera, self.pointer.ndc(), aspect, &self.proxies);
        if self.selection.set(picked) {
            tracing::trace!(?picked, "Selection changed");
        }
        picked
    }

    /// Push changed cells into their proxies. Returns how many were pushed.
    pub fn sync_visuals(&mut self) -> usize {
        self.proxies.sync_dirty(&mut self.grid, &self.settings.palette)
    }

    /// Serialize the grid and hand it to the clipboard. Never fails the caller.
    pub fn save(&mut self) {
        match self.grid.save_blob() {
            Ok(blob) => {
                tracing::debug!(bytes = blob.len(), "Copying grid state to clipboard");
                self.pending_writes.push(self.clipboard.write_text(blob));
                self.clipboard_status = ClipboardStatus::Pending;
            }
            Err(e) => {
                tracing::error!("Failed to serialize grid state: {e}");
                self.clipboard_status = ClipboardStatus::Failed(e.to_string());
            }
        }
    }

    /// Overwrite the grid from decoded save data and resync every proxy
    pub fn load(&mut self, data: &SaveData) -> Result<(), InvalidSaveData> {
        self.grid.load(data)?;
        self.sync_visuals();
        Ok(())
    }

    /// Decode clipboard text and load it. The outcome is reported as a notice.
    pub fn load_blob(&mut self, blob: &str) -> Result<(), InvalidSaveData> {
        let result = SaveData::from_json(blob).and_then(|data| self.load(&data));
        self.notice = Some(match &result {
            Ok(()) => Notice {
                text: format!("Loaded {} cells", self.grid.size()),
                is_error: false,
            },
            Err(e) => {
                tracing::warn!("Rejected save data: {e}");
                Notice {
                    text: e.to_string(),
                    is_error: true,
                }
            }
        });
        result
    }

    /// Collect finished clipboard writes. Failures are logged, not retried.
    /// Returns the number of failed writes seen.
    pub fn poll_clipboard(&mut self) -> usize {
        let mut failures = 0;
        let mut still_pending = Vec::new();

        for mut write in self.pending_writes.drain(..) {
            match write.try_result() {
                None => still_pending.push(write),
                Some(Ok(())) => self.clipboard_status = ClipboardStatus::Sent,
                Some(Err(e)) => {
                    tracing::warn!("Clipboard write failed: {e}");
                    self.clipboard_status = ClipboardStatus::Failed(e.to_string());
                    failures += 1;
                }
            }
        }

        self.pending_writes = still_pending;
        failures
    }

    pub fn pending_clipboard_writes(&self) -> usize {
        self.pending_writes.len()
    }
}
