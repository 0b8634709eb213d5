//! Configuration for the sketch window and the interactive session.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::canvas::{CanvasSize, Rgba};
use crate::data::epicycles::ChainColors;
use crate::data::gibbs::GibbsSettings;

/// Environment variable holding an optional config file path.
pub const CONFIG_ENV_VAR: &str = "FOURIER_SKETCH_CONFIG";

// ─────────────────────────────────────────────────────────────────────────────
// Palette
// ─────────────────────────────────────────────────────────────────────────────

/// Colors for everything the window draws.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchPalette {
    /// Canvas fill.
    pub background: Rgba,
    /// The curve while it is being drawn.
    pub stroke: Rgba,
    /// The original curve shown behind the animation.
    pub faded_curve: Rgba,
    /// Curve traced by the tip of the chain.
    pub trace: Rgba,
    /// Rotating vectors and their orbits.
    pub chain: ChainColors,
}

impl Default for SketchPalette {
    fn default() -> Self {
        Self {
            background: Rgba::BLACK,
            stroke: Rgba::ORANGE,
            faded_curve: Rgba::rgb(75, 75, 75),
            trace: Rgba::WHITE,
            chain: ChainColors::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Session tuning
// ─────────────────────────────────────────────────────────────────────────────

/// Interaction limits for [`SketchSession`](crate::session::SketchSession).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Maximum number of points a single stroke may record.
    pub stroke_limit: usize,
    /// Ticks to ignore term-count keys after a change. Default: `8`.
    pub drop_cooldown_ticks: u32,
    /// The cooldown only applies when at most this many terms remain.
    pub cooldown_term_threshold: usize,
    /// Gibbs compensation applied before each transform.
    pub gibbs: GibbsSettings,
    /// Whether to close the gap before transforming at all.
    pub compensate_closure: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            stroke_limit: 1000,
            drop_cooldown_ticks: 8,
            cooldown_term_threshold: 20,
            gibbs: GibbsSettings::default(),
            compensate_closure: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SketchConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration.
///
/// | Field               | Purpose |
/// |---------------------|---------|
/// | `canvas`            | Initial window size, also the Gibbs threshold reference |
/// | `frame_interval_ms` | Delay between animation frames |
/// | `session`           | Stroke limits, cooldowns, Gibbs tuning |
/// | `palette`           | Colors |
/// | `show_spectrum`     | Open the spectrum panel on start |
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Native window title.
    pub title: String,
    pub canvas: CanvasSize,
    pub frame_interval_ms: u64,
    pub session: SessionSettings,
    pub palette: SketchPalette,
    pub show_spectrum: bool,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            title: "Fourier Drawing".to_string(),
            canvas: CanvasSize::default(),
            frame_interval_ms: 15,
            session: SessionSettings::default(),
            palette: SketchPalette::default(),
            show_spectrum: false,
        }
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

impl SketchConfig {
    /// Parse a config from text. YAML is used when `yaml` is set, JSON otherwise.
    pub fn from_str_as(s: &str, yaml: bool) -> Result<Self, String> {
        if yaml {
            serde_yaml::from_str(s).map_err(|e| format!("Deserialization error: {}", e))
        } else {
            serde_json::from_str(s).map_err(|e| format!("Deserialization error: {}", e))
        }
    }

    /// Load a config file; `.yaml`/`.yml` are read as YAML, anything else as JSON.
    pub fn load(path: &Path) -> Result<Self, String> {
        let s = fs::read_to_string(path).map_err(|e| format!("Failed to read {:?}: {}", path, e))?;
        Self::from_str_as(&s, is_yaml(path))
    }

    pub fn save(&self, path: &Path) -> Result<(), String> {
        let s = if is_yaml(path) {
            serde_yaml::to_string(self).map_err(|e| format!("Serialization error: {}", e))?
        } else {
            serde_json::to_string_pretty(self).map_err(|e| format!("Serialization error: {}", e))?
        };
        fs::write(path, s).map_err(|e| format!("Failed to write file {:?}: {}", path, e))
    }

    /// Config from the file named by [`CONFIG_ENV_VAR`], or defaults when the
    /// variable is unset or the file cannot be used.
    pub fn from_env() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::load(Path::new(&path)) {
            Ok(cfg) => {
                log::info!("loaded config from {}", path);
                cfg
            }
            Err(e) => {
                log::warn!("ignoring config {}: {}", path, e);
                Self::default()
            }
        }
    }
}
