//! Human-readable descriptions of cells

use shared::{Cell, CellIndex, GridLayout};

/// Short label like `#61 (1, 1)`
pub fn cell_label(layout: &GridLayout, index: CellIndex) -> String {
    match layout.coords(index) {
        Some((x, y)) => format!("#{index} ({x}, {y})"),
        None => format!("#{index}"),
    }
}

/// Depth and colour summary, e.g. `depth 2, Black`
pub fn cell_summary(cell: &Cell) -> String {
    if cell.depth == 0 {
        "flat".to_string()
    } else {
        format!("depth {}, {}", cell.depth, cell.color.display_name())
    }
}
