//! Grid state management
//!
//! Parallel depth/colour arrays addressed by linear index, with dirty tracking
//! so visuals only resync the cells that changed.

mod display;
mod edit_ops;
mod persistence;

pub use display::{cell_label, cell_summary};

use std::collections::BTreeSet;

use shared::{Cell, CellColor, CellIndex, GridLayout};

/// Block grid model
#[derive(Debug, Clone)]
pub struct GridState {
    layout: GridLayout,
    depths: Vec<u8>,
    colors: Vec<CellColor>,
    /// Indices changed since the last `take_dirty`
    dirty: BTreeSet<CellIndex>,
    /// Monotonically increasing version counter, bumped on every mutation
    version: u64,
}

impl Default for GridState {
    fn default() -> Self {
        Self::new(GridLayout::default())
    }
}

impl GridState {
    /// Create a flat grid: every cell at depth 0 with no colour
    pub fn new(layout: GridLayout) -> Self {
        let size = layout.size();
        Self {
            layout,
            depths: vec![0; size],
            colors: vec![CellColor::None; size],
            dirty: BTreeSet::new(),
            version: 0,
        }
    }

    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    pub fn size(&self) -> usize {
        self.depths.len()
    }

    pub fn is_valid_index(&self, index: CellIndex) -> bool {
        index < self.size()
    }

    pub fn get(&self, index: CellIndex) -> Option<Cell> {
        Some(Cell {
            depth: *self.depths.get(index)?,
            color: *self.colors.get(index)?,
        })
    }

    /// Set the depth of a cell. Callers keep the colour invariant.
    pub fn set_depth(&mut self, index: CellIndex, depth: u8) {
        if let Some(slot) = self.depths.get_mut(index) {
            *slot = depth;
            self.mark_dirty(index);
        }
    }

    /// Set the colour of a cell. Callers keep the colour invariant.
    pub fn set_color(&mut self, index: CellIndex, color: CellColor) {
        if let Some(slot) = self.colors.get_mut(index) {
            *slot = color;
            self.mark_dirty(index);
        }
    }

    pub fn depths(&self) -> &[u8] {
        &self.depths
    }

    pub fn colors(&self) -> &[CellColor] {
        &self.colors
    }

    /// Current version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Drain the indices changed since the previous call, in index order
    pub fn take_dirty(&mut self) -> Vec<CellIndex> {
        std::mem::take(&mut self.dirty).into_iter().collect()
    }

    pub fn has_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Number of cells raised above the base plane
    pub fn extruded_count(&self) -> usize {
        self.depths.iter().filter(|d| **d > 0).count()
    }

    fn mark_dirty(&mut self, index: CellIndex) {
        self.dirty.insert(index);
        self.version += 1;
    }
}
