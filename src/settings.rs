//! Host settings and preferences
//!
//! Presentation only: nothing here changes how the ball or paddles move.
//! Stored as JSON next to the binary or wherever the host points.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::Rect;

/// Settings file problems
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "settings file: {e}"),
            SettingsError::Json(e) => write!(f, "settings json: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Json(e)
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    /// Initial play field width in pixels
    pub window_width: u32,
    /// Initial play field height in pixels
    pub window_height: u32,
    /// Base font size for menu captions
    pub font_pixel_size: u32,
    /// Hide the pointer over the play field
    pub hide_cursor: bool,

    // === Run ===
    /// Seed for paddle bounce directions; derived from the clock when unset
    pub seed: Option<u64>,
    /// Simulated seconds the headless host plays before closing
    pub demo_seconds: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            font_pixel_size: 18,
            hide_cursor: true,
            seed: None,
            demo_seconds: 10.0,
        }
    }
}

impl Settings {
    /// Play field bounds for the configured window size
    pub fn field(&self) -> Rect {
        Rect::from_size(self.window_width as f32, self.window_height as f32)
    }

    /// Read settings, reporting any problem
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Read settings, falling back to defaults when the file is missing or bad
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({e})");
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
