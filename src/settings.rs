//! Site settings
//!
//! Read once at startup from the host page (web) or a JSON file (native).
//! A quality preset named in the page URL (`?quality=low`) or on the native
//! command line overrides the stored one. Nothing is written back.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    /// Multiplier applied to the configured ray step (coarser = fewer rays)
    pub fn ray_step_factor(&self) -> f32 {
        match self {
            QualityPreset::Low => 4.0,
            QualityPreset::Medium => 1.0,
            QualityPreset::High => 1.0,
        }
    }

    /// Multiplier applied to background grid spacing
    pub fn grid_factor(&self) -> f32 {
        match self {
            QualityPreset::Low => 2.0,
            QualityPreset::Medium => 1.0,
            QualityPreset::High => 1.0,
        }
    }

    /// Octaves used by the background noise
    pub fn noise_octaves(&self) -> u32 {
        match self {
            QualityPreset::Low => 1,
            QualityPreset::Medium => 3,
            QualityPreset::High => 4,
        }
    }
}

impl FromStr for QualityPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(QualityPreset::Low),
            "medium" | "med" => Ok(QualityPreset::Medium),
            "high" => Ok(QualityPreset::High),
            other => Err(format!("unknown quality preset '{}'", other)),
        }
    }
}

/// Site tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Rendering quality preset
    pub quality: QualityPreset,
    /// Angular step between rays of an emitter (degrees)
    pub ray_step_degrees: f32,
    /// Number of rotating walls created on reset
    pub wall_count: usize,
    /// Angular velocity shared by rotating walls (radians/frame)
    pub wall_rotation_speed: f32,
    /// Particles in the social overview swarm
    pub swarm_size: usize,
    /// Fixed RNG seed (random per page load when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            ray_step_degrees: RAY_STEP_DEGREES,
            wall_count: WALL_COUNT,
            wall_rotation_speed: WALL_ROTATION_SPEED,
            swarm_size: 10,
            seed: None,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset (applies preset defaults)
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Effective ray step after the quality preset, clamped to a sane range
    pub fn effective_ray_step(&self) -> f32 {
        (self.ray_step_degrees * self.quality.ray_step_factor()).clamp(0.25, 90.0)
    }

    /// Parse settings from JSON, filling absent fields with defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse settings, falling back to defaults on malformed input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings ({} quality)", settings.quality.as_str());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings JSON ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Element id of the inline settings block in the host page
    #[allow(dead_code)]
    const ELEMENT_ID: &'static str = "folio-settings";

    /// Replace the quality preset when `name` is a known preset
    pub fn with_quality_override(mut self, name: Option<&str>) -> Self {
        let Some(name) = name else {
            return self;
        };
        match name.parse::<QualityPreset>() {
            Ok(preset) => {
                log::info!("Quality overridden to {}", preset.as_str());
                self.quality = preset;
            }
            Err(e) => log::warn!("Ignoring quality override: {}", e),
        }
        self
    }

    /// Load settings from the inline JSON block in the host page, then apply
    /// a `quality` query parameter (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let window = web_sys::window();
        let text = window
            .as_ref()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        let settings = match text {
            Some(json) if !json.trim().is_empty() => Self::from_json_or_default(&json),
            _ => {
                log::info!("Using default settings");
                Self::default()
            }
        };

        let quality = window
            .and_then(|w| w.location().search().ok())
            .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok())
            .and_then(|params| params.get("quality"));
        settings.with_quality_override(quality.as_deref())
    }

    /// Load settings from a command-line argument (native)
    ///
    /// The argument is either a preset name or a path to a JSON file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(arg: Option<&str>) -> Self {
        let Some(path) = arg else {
            log::info!("Using default settings");
            return Self::default();
        };
        if let Ok(preset) = path.parse::<QualityPreset>() {
            log::info!("Using {} preset", preset.as_str());
            return Self::from_preset(preset);
        }
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json_or_default(&json),
            Err(e) => {
                log::warn!("Cannot read settings file {} ({}), using defaults", path, e);
                Self::default()
            }
        }
    }
}
