//! Visual proxies: one positioned, coloured block per grid cell.
//!
//! Proxies mirror the grid model. They are updated from dirty indices so a
//! frame with no edits does no work.

use glam::Vec3;
use shared::{depth_offset, CellIndex, GridLayout, BLOCK_SIZE};

use super::picking::Aabb;
use crate::state::grid::GridState;
use crate::state::settings::PaletteSettings;

/// On-screen representation of one cell
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockProxy {
    /// Lattice position of the flat block centre
    pub base: Vec3,
    /// Offset along the depth (Z) axis
    pub z_offset: f32,
    /// Material colour
    pub color: [u8; 3],
}

impl BlockProxy {
    pub fn center(&self) -> Vec3 {
        self.base + Vec3::Z * self.z_offset
    }
}

/// All block proxies, indexed by linear cell index
pub struct BlockProxies {
    proxies: Vec<BlockProxy>,
    size: Vec3,
    /// Bumped whenever any proxy changes (for GPU re-upload)
    version: u64,
}

impl BlockProxies {
    /// Place one flat, uncoloured block per cell of the layout
    pub fn new(layout: &GridLayout, palette: &PaletteSettings) -> Self {
        let color = palette.rgb(shared::CellColor::None);
        let proxies = (0..layout.size())
            .filter_map(|i| layout.base_position(i))
            .map(|base| BlockProxy {
                base: Vec3::from(base),
                z_offset: 0.0,
                color,
            })
            .collect();

        Self {
            proxies,
            size: Vec3::from(BLOCK_SIZE),
            version: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.proxies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proxies.is_empty()
    }

    pub fn get(&self, index: CellIndex) -> Option<&BlockProxy> {
        self.proxies.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BlockProxy> {
        self.proxies.iter()
    }

    /// Block extents (x, y, z)
    pub fn block_size(&self) -> Vec3 {
        self.size
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn set_color(&mut self, index: CellIndex, color: [u8; 3]) {
        if let Some(proxy) = self.proxies.get_mut(index) {
            if proxy.color != color {
                proxy.color = color;
                self.version += 1;
            }
        }
    }

    pub fn set_depth_offset(&mut self, index: CellIndex, z_offset: f32) {
        if let Some(proxy) = self.proxies.get_mut(index) {
            if proxy.z_offset != z_offset {
                proxy.z_offset = z_offset;
                self.version += 1;
            }
        }
    }

    /// World-space bounds of one block
    pub fn aabb(&self, index: CellIndex) -> Option<Aabb> {
        self.proxies
            .get(index)
            .map(|p| Aabb::from_center_size(p.center(), self.size))
    }

    /// Bounds of every block, in index order
    pub fn aabbs(&self) -> impl Iterator<Item = (CellIndex, Aabb)> + '_ {
        self.proxies
            .iter()
            .enumerate()
            .map(|(i, p)| (i, Aabb::from_center_size(p.center(), self.size)))
    }

    /// Push one cell's depth and colour into its proxy
    pub fn sync_cell(&mut self, index: CellIndex, grid: &GridState, palette: &PaletteSettings) {
        if let Some(cell) = grid.get(index) {
            self.set_color(index, palette.rgb(cell.color));
            self.set_depth_offset(index, depth_offset(cell.depth));
        }
    }

    /// Push every cell
    pub fn sync_all(&mut self, grid: &GridState, palette: &PaletteSettings) {
        for index in 0..grid.size() {
            self.sync_cell(index, grid, palette);
        }
    }

    /// Push only the cells changed since the last sync. Returns how many were pushed.
    pub fn sync_dirty(&mut self, grid: &mut GridState, palette: &PaletteSettings) -> usize {
        let dirty = grid.take_dirty();
        for &index in &dirty {
            self.sync_cell(index, grid, palette);
        }
        dirty.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{CellColor, Z_DEPTH_STEP};

    fn setup() -> (GridState, BlockProxies, PaletteSettings) {
        let layout = GridLayout::new(2, 2);
        let palette = PaletteSettings::default();
        let proxies = BlockProxies::new(&layout, &palette);
        (GridState::new(layout), proxies, palette)
    }

    #[test]
    fn test_one_proxy_per_cell_on_lattice() {
        let (_, proxies, palette) = setup();
        assert_eq!(proxies.len(), 4);
        let p0 = proxies.get(0).unwrap();
        let p1 = proxies.get(1).unwrap();
        assert!((p1.base.x - p0.base.x - 1.2).abs() < 1e-5);
        assert_eq!(p0.z_offset, 0.0);
        assert_eq!(p0.color, palette.rgb(CellColor::None));
    }

    #[test]
    fn test_sync_dirty_pushes_changed_cells_only() {
        let (mut grid, mut proxies, palette) = setup();
        grid.change_depth_by(2, 2);
        let pushed = proxies.sync_dirty(&mut grid, &palette);
        assert_eq!(pushed, 1);

        let p2 = proxies.get(2).unwrap();
        assert!((p2.z_offset - 2.0 * Z_DEPTH_STEP).abs() < 1e-6);
        assert_eq!(p2.color, palette.rgb(CellColor::Silver));
        assert_eq!(proxies.get(0).unwrap().z_offset, 0.0);

        assert_eq!(proxies.sync_dirty(&mut grid, &palette), 0);
    }

    #[test]
    fn test_version_only_changes_on_visible_difference() {
        let (grid, mut proxies, palette) = setup();
        proxies.sync_all(&grid, &palette);
        assert_eq!(proxies.version(), 0);

        proxies.set_depth_offset(1, 0.4);
        assert_eq!(proxies.version(), 1);
        proxies.set_depth_offset(1, 0.4);
        assert_eq!(proxies.version(), 1);
    }

    #[test]
    fn test_aabb_follows_depth() {
        let (mut grid, mut proxies, palette) = setup();
        let flat = proxies.aabb(3).unwrap();
        grid.change_depth_by(3, 3);
        proxies.sync_dirty(&mut grid, &palette);
        let raised = proxies.aabb(3).unwrap();
        assert!((raised.max.z - flat.max.z - 3.0 * Z_DEPTH_STEP).abs() < 1e-5);
        assert_eq!(proxies.aabbs().count(), 4);
    }
}
