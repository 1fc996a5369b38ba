use serde::{Deserialize, Serialize};
use thiserror::Error;

mod save_data;

pub use save_data::{InvalidSaveData, SaveData};

/// Number of cells along X
pub const XN: usize = 60;
/// Number of cells along Y
pub const YN: usize = 30;
/// Gap between neighbouring blocks (world units)
pub const SPACING: f32 = 0.2;
/// Highest extrusion level a cell can reach
pub const MAX_DEPTH: u8 = 3;
/// World-space Z offset per extrusion level
pub const Z_DEPTH_STEP: f32 = 0.4;
/// Block extents (width, height, length along the view axis)
pub const BLOCK_SIZE: [f32; 3] = [1.0, 1.0, 5.0];

/// Row-major cell index `y * xn + x`
pub type CellIndex = usize;

/// Block colour. Only meaningful while the cell is extruded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CellColor {
    #[default]
    None = 0,
    Silver = 1,
    Black = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown cell colour {0}, expected 0, 1 or 2")]
pub struct UnknownColor(pub u8);

impl TryFrom<u8> for CellColor {
    type Error = UnknownColor;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CellColor::None),
            1 => Ok(CellColor::Silver),
            2 => Ok(CellColor::Black),
            other => Err(UnknownColor(other)),
        }
    }
}

impl From<CellColor> for u8 {
    fn from(color: CellColor) -> Self {
        color as u8
    }
}

impl CellColor {
    /// Next colour in the extruded cycle: Silver -> Black -> Silver.
    /// `None` enters the cycle at Silver.
    pub fn next_extruded(self) -> Self {
        match self {
            CellColor::Silver => CellColor::Black,
            CellColor::None | CellColor::Black => CellColor::Silver,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CellColor::None => "None",
            CellColor::Silver => "Silver",
            CellColor::Black => "Black",
        }
    }
}

/// State of a single grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    pub depth: u8,
    pub color: CellColor,
}

impl Cell {
    /// `depth == 0` implies no colour, and a colour implies `depth > 0`.
    pub fn is_consistent(&self) -> bool {
        (self.depth == 0) == (self.color == CellColor::None)
    }
}

/// Lattice dimensions and world placement of the block grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    pub xn: usize,
    pub yn: usize,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self { xn: XN, yn: YN }
    }
}

impl GridLayout {
    pub fn new(xn: usize, yn: usize) -> Self {
        Self { xn, yn }
    }

    /// Total number of cells
    pub fn size(&self) -> usize {
        self.xn * self.yn
    }

    /// Linear index of lattice coordinate `(x, y)`
    pub fn index(&self, x: usize, y: usize) -> Option<CellIndex> {
        (x < self.xn && y < self.yn).then_some(y * self.xn + x)
    }

    /// Lattice coordinate `(x, y)` of a linear index
    pub fn coords(&self, index: CellIndex) -> Option<(usize, usize)> {
        (index < self.size()).then(|| (index % self.xn, index / self.xn))
    }

    /// World position of a flat (depth 0) block centre
    pub fn base_position(&self, index: CellIndex) -> Option<[f32; 3]> {
        let (x, y) = self.coords(index)?;
        let xn = self.xn as f32;
        let yn = self.yn as f32;
        let start_x = xn / 2.0 - xn - 1.0;
        let start_y = yn / 2.0;

        let px = start_x + (1.0 + SPACING) * x as f32 - (SPACING * xn) / 2.0 + 1.5;
        let py = start_y - (1.0 + SPACING) * y as f32 + (SPACING * yn) / 2.0;
        Some([px, py, 0.0])
    }
}

/// World Z offset for an extrusion level
pub fn depth_offset(depth: u8) -> f32 {
    depth as f32 * Z_DEPTH_STEP
}
