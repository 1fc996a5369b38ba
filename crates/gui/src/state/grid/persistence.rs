//! Save/load of the grid through the clipboard blob format

use shared::{InvalidSaveData, SaveData};

use super::GridState;

impl GridState {
    /// Snapshot the parallel colour and depth arrays
    pub fn to_save_data(&self) -> SaveData {
        SaveData {
            colors: self.colors.clone(),
            depths: self.depths.clone(),
        }
    }

    /// Serialize the grid into clipboard text
    pub fn save_blob(&self) -> Result<String, serde_json::Error> {
        self.to_save_data().to_json()
    }

    /// Overwrite every cell from a saved blob.
    ///
    /// The data is validated first; on error the grid is left untouched.
    pub fn load(&mut self, data: &SaveData) -> Result<(), InvalidSaveData> {
        data.validate(self.size())?;

        for (index, (&depth, &color)) in data.depths.iter().zip(&data.colors).enumerate() {
            self.set_depth(index, depth);
            self.set_color(index, color);
        }

        tracing::info!(
            cells = self.size(),
            extruded = self.extruded_count(),
            "Loaded grid state"
        );
        Ok(())
    }

    /// Decode clipboard text and load it
    pub fn load_blob(&mut self, blob: &str) -> Result<(), InvalidSaveData> {
        let data = SaveData::from_json(blob)?;
        self.load(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{CellColor, GridLayout};

    #[test]
    fn test_save_load_restores_state() {
        let mut grid = GridState::new(GridLayout::new(3, 2));
        grid.change_depth_by(0, 1);
        grid.change_depth_by(4, 3);
        grid.toggle_color(4);
        let blob = grid.save_blob().unwrap();

        let mut restored = GridState::new(GridLayout::new(3, 2));
        restored.load_blob(&blob).unwrap();

        assert_eq!(restored.depths(), grid.depths());
        assert_eq!(restored.colors(), grid.colors());
    }

    #[test]
    fn test_load_marks_every_cell_dirty() {
        let mut grid = GridState::new(GridLayout::new(2, 2));
        let data = SaveData {
            colors: vec![CellColor::Black, CellColor::None, CellColor::None, CellColor::Silver],
            depths: vec![2, 0, 0, 1],
        };
        grid.load(&data).unwrap();
        assert_eq!(grid.take_dirty(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_invalid_load_leaves_grid_untouched() {
        let mut grid = GridState::new(GridLayout::new(2, 2));
        grid.change_depth_by(1, 2);
        let before = grid.to_save_data();
        let version = grid.version();

        let err = grid
            .load_blob(r#"{"colors":[0,0],"depths":[0,0]}"#)
            .unwrap_err();
        assert!(matches!(err, InvalidSaveData::Length { .. }));
        assert_eq!(grid.to_save_data(), before);
        assert_eq!(grid.version(), version);
    }

    #[test]
    fn test_save_blob_is_json_object() {
        let grid = GridState::new(GridLayout::new(2, 1));
        assert_eq!(grid.save_blob().unwrap(), r#"{"colors":[0,0],"depths":[0,0]}"#);
    }
}
