//! World settings
//!
//! Loaded from an optional JSON file; any field left out keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::platform::input::KeyBindings;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// World bounds used for toroidal wrap
    pub width: f32,
    pub height: f32,

    /// RNG seed (random when absent)
    pub seed: Option<u64>,

    // === Ship ===
    /// Impulse added per thrust press
    pub thrust_speed: f32,
    /// Degrees per rotate press
    pub rotate_step: f32,

    // === Loop ===
    /// Sleep between frames in milliseconds
    pub frame_sleep_ms: u64,

    /// Key code to action lookup
    pub bindings: KeyBindings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            seed: None,
            thrust_speed: SHIP_THRUST_SPEED,
            rotate_step: SHIP_ROTATE_STEP,
            frame_sleep_ms: FRAME_SLEEP_MS,
            bindings: KeyBindings::default(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, or defaults when no path is given.
    ///
    /// A file that cannot be read or parsed is logged and replaced by defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("Ignoring settings file {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Load and validate settings from a JSON file
    pub fn load_from(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the world cannot be built from
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(Error::InvalidArgument(format!("width must be positive, got {}", self.width)));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "height must be positive, got {}",
                self.height
            )));
        }
        if !(self.thrust_speed.is_finite() && self.thrust_speed >= 0.0) {
            return Err(Error::InvalidArgument(format!(
                "thrust_speed must be non-negative, got {}",
                self.thrust_speed
            )));
        }
        if !self.rotate_step.is_finite() {
            return Err(Error::InvalidArgument("rotate_step must be finite".to_string()));
        }
        Ok(())
    }
}
