//! Application settings

use serde::{Deserialize, Serialize};
use shared::CellColor;

/// Block colours per cell colour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteSettings {
    /// Flat, uncoloured cells
    pub empty: [u8; 3],
    pub silver: [u8; 3],
    pub black: [u8; 3],
}

impl Default for PaletteSettings {
    fn default() -> Self {
        Self {
            empty: [0x00, 0xcc, 0xff],
            silver: [0xaa, 0xaa, 0xaa],
            black: [0x33, 0x33, 0x33],
        }
    }
}

impl PaletteSettings {
    /// Material colour for a cell colour
    pub fn rgb(&self, color: CellColor) -> [u8; 3] {
        match color {
            CellColor::None => self.empty,
            CellColor::Silver => self.silver,
            CellColor::Black => self.black,
        }
    }
}

/// Camera settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Initial distance from the grid centre
    pub distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Orbit damping factor (0 disables)
    pub damping: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            distance: 45.0,
            min_distance: 1.0,
            max_distance: 500.0,
            damping: 0.25,
        }
    }
}

/// Viewport settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    /// Background color RGB
    pub background_color: [u8; 3],
    /// Show the camera info overlay
    pub show_camera_info: bool,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            background_color: [0xcc, 0xcc, 0xcc],
            show_camera_info: false,
        }
    }
}

/// Clipboard settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardSettings {
    /// Copy the grid state to the clipboard after every edit
    pub enabled: bool,
}

impl Default for ClipboardSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Font size in points
    pub font_size: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { font_size: 13.0 }
    }
}

/// All application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub palette: PaletteSettings,
    pub camera: CameraSettings,
    pub viewport: ViewportSettings,
    pub clipboard: ClipboardSettings,
    pub ui: UiSettings,
}

impl AppSettings {
    /// Load settings from the config dir, or return defaults if missing or unreadable
    pub fn load() -> Self {
        let Some(dirs) = directories::ProjectDirs::from("com", "extrude-grid", "extrude-grid")
        else {
            return Self::default();
        };

        let config_path = dirs.config_dir().join("settings.json");
        match std::fs::read_to_string(&config_path) {
            Ok(json) => Self::from_json(&json).unwrap_or_else(|e| {
                tracing::warn!("Ignoring invalid settings at {}: {e}", config_path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Parse settings; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
