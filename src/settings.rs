//! Animation settings and preferences
//!
//! Read-only on the web: loaded once from LocalStorage at start-up.

use serde::{Deserialize, Serialize};

use crate::error::SkyError;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
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

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Particles per firework burst on a wide viewport
    pub fn particles_per_burst(&self) -> usize {
        match self {
            QualityPreset::Low => 30,
            QualityPreset::Medium => 60,
            QualityPreset::High => 100,
        }
    }

    /// Shadow blur radius used for the particle glow (0 disables it)
    pub fn glow_blur(&self) -> f32 {
        match self {
            QualityPreset::Low => 0.0,
            QualityPreset::Medium => 8.0,
            QualityPreset::High => 15.0,
        }
    }
}

/// How new entities are created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SpawnMode {
    /// Rate-limited inside the frame loop, one throttle per entity type
    #[default]
    Throttled,
    /// Fixed-period host timers running beside the frame loop
    Timers,
}

/// Animation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,
    /// Spawn policy
    pub spawn_mode: SpawnMode,

    // === Entity types ===
    pub fireworks: bool,
    pub balloons: bool,
    pub roses: bool,

    // === Spawn intervals (ms) ===
    pub firework_interval_ms: f64,
    pub balloon_interval_ms: f64,
    pub rose_interval_ms: f64,

    // === Live caps (None = unbounded) ===
    pub max_fireworks: Option<usize>,
    pub max_balloons: Option<usize>,
    pub max_roses: Option<usize>,

    /// Viewports narrower than this (px) get smaller floaters and sparser bursts
    pub narrow_breakpoint: f32,
    /// Rose image path, relative to the page
    pub rose_sprite: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            spawn_mode: SpawnMode::Throttled,

            fireworks: true,
            balloons: true,
            roses: true,

            firework_interval_ms: 800.0,
            balloon_interval_ms: 500.0,
            rose_interval_ms: 1200.0,

            max_fireworks: Some(10),
            max_balloons: Some(15),
            max_roses: Some(15),

            narrow_breakpoint: 1024.0,
            rose_sprite: "rose.png".to_string(),
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Parse and validate settings JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SkyError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the animation cannot work with
    pub fn validate(&self) -> Result<(), SkyError> {
        let intervals = [
            ("firework_interval_ms", self.firework_interval_ms),
            ("balloon_interval_ms", self.balloon_interval_ms),
            ("rose_interval_ms", self.rose_interval_ms),
        ];
        for (field, value) in intervals {
            if !value.is_finite() || value < 0.0 {
                return Err(SkyError::invalid(
                    field,
                    format!("must be a finite, non-negative number of ms (got {value})"),
                ));
            }
        }
        // A zero-period host timer would spin
        if self.spawn_mode == SpawnMode::Timers {
            for (field, value) in intervals {
                if value < 1.0 {
                    return Err(SkyError::invalid(field, "timers need an interval of at least 1 ms"));
                }
            }
        }
        if !(self.narrow_breakpoint.is_finite() && self.narrow_breakpoint > 0.0) {
            return Err(SkyError::invalid("narrow_breakpoint", "must be positive"));
        }
        if self.rose_sprite.trim().is_empty() {
            return Err(SkyError::invalid("rose_sprite", "path is empty"));
        }
        Ok(())
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "skyburst_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from a JSON file, or defaults when no path is given
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: Option<&std::path::Path>) -> Result<Self, SkyError> {
        match path {
            Some(path) => {
                let json = std::fs::read_to_string(path)?;
                let settings = Self::from_json(&json)?;
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            None => Ok(Self::default()),
        }
    }
}
