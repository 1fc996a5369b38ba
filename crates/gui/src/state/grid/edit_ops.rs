//! Depth and colour edits on a single cell

use shared::{Cell, CellColor, CellIndex, MAX_DEPTH};

use super::GridState;

impl GridState {
    /// Raise or lower a cell, clamped to `[0, MAX_DEPTH]`.
    ///
    /// A cell raised off the flat turns silver; a cell lowered to 0 loses its colour.
    /// Returns the resulting cell, or `None` for an unknown index.
    pub fn change_depth_by(&mut self, index: CellIndex, amount: i32) -> Option<Cell> {
        let cell = self.get(index)?;
        let depth = (cell.depth as i32).saturating_add(amount).clamp(0, MAX_DEPTH as i32) as u8;

        let mut color = cell.color;
        if cell.depth == 0 && depth > 0 {
            color = CellColor::Silver;
        }
        if depth == 0 {
            color = CellColor::None;
        }

        self.set_depth(index, depth);
        self.set_color(index, color);

        tracing::debug!(index, from = cell.depth, to = depth, ?color, "Changed cell depth");
        self.get(index)
    }

    /// Cycle the colour of an extruded cell (Silver -> Black -> Silver).
    ///
    /// Returns `None` when the cell is flat or unknown; nothing changes then.
    pub fn toggle_color(&mut self, index: CellIndex) -> Option<Cell> {
        let cell = self.get(index)?;
        if cell.depth == 0 {
            return None;
        }

        let color = cell.color.next_extruded();
        self.set_color(index, color);

        tracing::debug!(index, ?color, "Toggled cell colour");
        self.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::GridLayout;

    fn small_grid() -> GridState {
        GridState::new(GridLayout::new(2, 2))
    }

    #[test]
    fn test_raise_from_flat_turns_silver() {
        let mut grid = small_grid();
        let cell = grid.change_depth_by(1, 1).unwrap();
        assert_eq!(cell, Cell { depth: 1, color: CellColor::Silver });
    }

    #[test]
    fn test_depth_clamps_both_ways() {
        let mut grid = small_grid();
        for _ in 0..10 {
            let cell = grid.change_depth_by(0, 1).unwrap();
            assert!(cell.depth <= MAX_DEPTH);
        }
        assert_eq!(grid.get(0).unwrap().depth, MAX_DEPTH);

        for _ in 0..10 {
            let cell = grid.change_depth_by(0, -1).unwrap();
            assert!(cell.is_consistent());
        }
        assert_eq!(grid.get(0).unwrap(), Cell::default());
    }

    #[test]
    fn test_large_steps_clamp() {
        let mut grid = small_grid();
        assert_eq!(
            grid.change_depth_by(2, 7).unwrap(),
            Cell { depth: MAX_DEPTH, color: CellColor::Silver }
        );
        assert_eq!(grid.change_depth_by(2, -9).unwrap(), Cell::default());
    }

    #[test]
    fn test_extreme_amounts_saturate() {
        let mut grid = small_grid();
        grid.change_depth_by(0, 1);
        assert_eq!(
            grid.change_depth_by(0, i32::MAX).unwrap(),
            Cell { depth: MAX_DEPTH, color: CellColor::Silver }
        );
        assert_eq!(grid.change_depth_by(0, i32::MIN).unwrap(), Cell::default());

        // From flat as well
        assert_eq!(grid.change_depth_by(1, i32::MIN).unwrap(), Cell::default());
        assert_eq!(
            grid.change_depth_by(1, i32::MAX).unwrap(),
            Cell { depth: MAX_DEPTH, color: CellColor::Silver }
        );
    }

    #[test]
    fn test_lowering_keeps_colour_until_flat() {
        let mut grid = small_grid();
        grid.change_depth_by(0, 1);
        grid.change_depth_by(0, 1);
        grid.toggle_color(0);
        assert_eq!(grid.get(0).unwrap(), Cell { depth: 2, color: CellColor::Black });

        let cell = grid.change_depth_by(0, -1).unwrap();
        assert_eq!(cell, Cell { depth: 1, color: CellColor::Black });

        let cell = grid.change_depth_by(0, -1).unwrap();
        assert_eq!(cell, Cell::default());
    }

    #[test]
    fn test_raise_to_two_keeps_black() {
        let mut grid = small_grid();
        grid.change_depth_by(3, 1);
        grid.toggle_color(3);
        let cell = grid.change_depth_by(3, 1).unwrap();
        assert_eq!(cell, Cell { depth: 2, color: CellColor::Black });
    }

    #[test]
    fn test_lowering_flat_cell_stays_flat() {
        let mut grid = small_grid();
        let cell = grid.change_depth_by(0, -1).unwrap();
        assert_eq!(cell, Cell::default());
    }

    #[test]
    fn test_toggle_on_flat_cell_is_noop() {
        let mut grid = small_grid();
        assert!(grid.toggle_color(0).is_none());
        assert_eq!(grid.get(0).unwrap(), Cell::default());
        assert_eq!(grid.version(), 0);
    }

    #[test]
    fn test_toggle_cycles_without_none() {
        let mut grid = small_grid();
        grid.change_depth_by(0, 1);
        let mut seen = Vec::new();
        for _ in 0..6 {
            seen.push(grid.toggle_color(0).unwrap().color);
        }
        assert_eq!(
            seen,
            vec![
                CellColor::Black,
                CellColor::Silver,
                CellColor::Black,
                CellColor::Silver,
                CellColor::Black,
                CellColor::Silver,
            ]
        );
    }

    #[test]
    fn test_unknown_index() {
        let mut grid = small_grid();
        assert!(grid.change_depth_by(4, 1).is_none());
        assert!(grid.toggle_color(4).is_none());
    }
}
