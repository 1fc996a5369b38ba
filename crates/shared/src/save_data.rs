//! Clipboard blob format: `{"colors": [..], "depths": [..]}` ordered by linear index.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{CellColor, MAX_DEPTH};

#[derive(Error, Debug)]
pub enum InvalidSaveData {
    #[error("Failed to parse save data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Save data has {actual} {field}, expected {expected}")]
    Length {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("Depth {depth} at cell {index} is out of range")]
    DepthOutOfRange { index: usize, depth: u8 },
}

/// Serialized grid state, the only durable artifact of the editor
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SaveData {
    pub colors: Vec<CellColor>,
    pub depths: Vec<u8>,
}

impl SaveData {
    /// Decode a blob previously produced by [`SaveData::to_json`]
    pub fn from_json(json: &str) -> Result<Self, InvalidSaveData> {
        Ok(serde_json::from_str(json.trim())?)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Check that the blob describes exactly `size` cells with in-range depths
    pub fn validate(&self, size: usize) -> Result<(), InvalidSaveData> {
        if self.colors.len() != size {
            return Err(InvalidSaveData::Length {
                field: "colors",
                expected: size,
                actual: self.colors.len(),
            });
        }
        if self.depths.len() != size {
            return Err(InvalidSaveData::Length {
                field: "depths",
                expected: size,
                actual: self.depths.len(),
            });
        }
        if let Some((index, &depth)) = self
            .depths
            .iter()
            .enumerate()
            .find(|(_, d)| **d > MAX_DEPTH)
        {
            return Err(InvalidSaveData::DepthOutOfRange { index, depth });
        }
        Ok(())
    }
}
