//! Simulation settings
//!
//! Loaded from JSON (all fields optional) and validated before a
//! simulation is constructed.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Smallest playfield that still fits the fixed spawn points and leaves a
/// non-empty portal placement range on every boundary wall.
pub const MIN_SCREEN_WIDTH: f32 = RANGED_SPAWN.0 + ENEMY_SIZE + WALL_THICKNESS * 2.0;
pub const MIN_SCREEN_HEIGHT: f32 = RANGED_SPAWN.1 + ENEMY_SIZE + WALL_THICKNESS * 2.0;

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("playfield {width}x{height} is smaller than the minimum {min_width}x{min_height}")]
    PlayfieldTooSmall {
        width: f32,
        height: f32,
        min_width: f32,
        min_height: f32,
    },
    #[error("playfield dimensions must be finite")]
    NonFinite,
}

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Playfield width (bullet culling and room sizing)
    pub screen_width: f32,
    /// Playfield height
    pub screen_height: f32,
    /// Room generation seed; a random seed is drawn when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            seed: None,
        }
    }
}

impl Settings {
    /// Default settings with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Parse and validate settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Check the playfield can hold a generated room
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.screen_width.is_finite() || !self.screen_height.is_finite() {
            return Err(SettingsError::NonFinite);
        }
        if self.screen_width < MIN_SCREEN_WIDTH || self.screen_height < MIN_SCREEN_HEIGHT {
            return Err(SettingsError::PlayfieldTooSmall {
                width: self.screen_width,
                height: self.screen_height,
                min_width: MIN_SCREEN_WIDTH,
                min_height: MIN_SCREEN_HEIGHT,
            });
        }
        Ok(())
    }
}
