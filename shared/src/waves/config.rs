//! Ocean configuration and wave presets.
//!
//! A config lists the waves to allocate at startup plus the ship and smoothing
//! settings. It can be built from a preset or read from a RON file.

use std::fs;
use std::path::Path;

use bevy::math::{Vec2, Vec3, Vec4};
use bevy_ecs::resource::Resource;
use bevy_log::info;
use ron::de::from_str;
use serde::{Deserialize, Serialize};

use super::WaveParams;
use crate::buoyancy::{ShipConfig, Smoothing};
use crate::constants::{DEFAULT_AMBIENT, DEFAULT_VIEW_POSITION};

/// Built-in wave sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum WavePreset {
    /// Flat water, no waves
    Still,
    /// Two long, low swells
    Calm,
    /// Six mixed waves, the standard scene
    #[default]
    Harbor,
    /// Six steep, fast waves
    Storm,
}

impl WavePreset {
    pub fn waves(self) -> Vec<WaveParams> {
        let wave = |amplitude, speed, frequency, x, y| {
            WaveParams::new(Vec2::ZERO, amplitude, speed, frequency, Vec2::new(x, y))
        };

        match self {
            WavePreset::Still => Vec::new(),
            WavePreset::Calm => vec![
                wave(0.2, 0.6, 0.3, 1.0, 0.2),
                wave(0.4, 0.2, 0.1, 0.7, 0.1),
            ],
            WavePreset::Harbor => vec![
                wave(0.4, 1.9, 0.4, 1.0, 0.0),
                wave(0.2, 1.2, 0.8, 1.0, 0.3),
                wave(0.3, 1.23, 1.2, 1.0, -0.5),
                wave(0.5, 0.8, 0.2, 0.2, 0.8),
                wave(0.08, 3.2, 1.7, 0.1, 0.9),
                wave(1.0, 0.2, 0.1, 0.7, 0.1),
            ],
            WavePreset::Storm => vec![
                wave(0.9, 2.4, 0.5, 1.0, 0.1),
                wave(0.6, 1.8, 0.9, 1.0, 0.5),
                wave(0.7, 1.5, 1.1, 1.0, -0.6),
                wave(1.1, 1.0, 0.3, 0.3, 0.9),
                wave(0.2, 4.0, 2.0, 0.1, 1.0),
                wave(1.8, 0.4, 0.1, 0.8, 0.2),
            ],
        }
    }
}

impl std::str::FromStr for WavePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "still" => Ok(WavePreset::Still),
            "calm" => Ok(WavePreset::Calm),
            "harbor" => Ok(WavePreset::Harbor),
            "storm" => Ok(WavePreset::Storm),
            other => Err(format!("unknown wave preset '{other}'")),
        }
    }
}

/// Everything the ocean plugin needs at startup.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OceanConfig {
    /// Waves allocated in order. Entries past the pool capacity come back inert.
    pub waves: Vec<WaveParams>,
    pub ship: ShipConfig,
    pub smoothing: Smoothing,
    /// Camera position mirrored to the `viewPos` uniform
    pub view_position: Vec3,
    /// Ambient light colour, written once
    pub ambient: Vec4,
}

impl Default for OceanConfig {
    fn default() -> Self {
        Self::from_preset(WavePreset::default())
    }
}

impl OceanConfig {
    pub fn from_preset(preset: WavePreset) -> Self {
        Self {
            waves: preset.waves(),
            ship: ShipConfig::default(),
            smoothing: Smoothing::default(),
            view_position: DEFAULT_VIEW_POSITION,
            ambient: DEFAULT_AMBIENT,
        }
    }

    /// Reads a RON config file. Missing fields fall back to the harbor defaults.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: OceanConfig = from_str(&contents)?;
        config.smoothing.validate()?;

        info!(
            "Loaded ocean config from {} ({} waves)",
            path.display(),
            config.waves.len()
        );

        Ok(config)
    }
}
