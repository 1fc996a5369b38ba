use shared::CellIndex;

/// The cell currently under the pointer.
///
/// Recomputed every frame by the picker. `None` and `Some(0)` are distinct:
/// index 0 is the top-left block.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<CellIndex>,
}

impl SelectionState {
    pub fn selected(&self) -> Option<CellIndex> {
        self.selected
    }

    /// Replace the selection. Returns true if it changed.
    pub fn set(&mut self, selected: Option<CellIndex>) -> bool {
        let changed = self.selected != selected;
        self.selected = selected;
        changed
    }

    pub fn select(&mut self, index: CellIndex) {
        self.selected = Some(index);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn is_selected(&self, index: CellIndex) -> bool {
        self.selected == Some(index)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }
}
