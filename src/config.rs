//! Board settings, read from a JSON file when one is present.
//!
//! The file is looked up at `$SKETCHBOARD_CONFIG`, then `./sketchboard.json`.
//! Every field is optional; missing fields take their defaults.
//!
//! ```json
//! {
//!   "stroke_color": [1.0, 1.0, 1.0, 1.0],
//!   "stroke_width": 2.0,
//!   "roughness": 2.0,
//!   "seed": 42
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::rough::HandDrawnOptions;

pub const CONFIG_ENV: &str = "SKETCHBOARD_CONFIG";
pub const CONFIG_FILE: &str = "sketchboard.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub title: String,
    pub stroke_color: [f32; 4],
    pub stroke_width: f32,
    pub roughness: f32,
    pub segment_count: u32,
    /// Linear RGBA, like `stroke_color`.
    pub background: [f32; 4],
    /// Fixed seed for the jitter generator. Unset means a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            title: "sketchboard".to_string(),
            stroke_color: [1.0, 1.0, 1.0, 1.0],
            stroke_width: 2.0,
            roughness: 2.0,
            segment_count: 2,
            background: [0.01, 0.01, 0.012, 1.0],
            seed: None,
        }
    }
}

impl BoardConfig {
    /// Reads the config file if there is one. Falls back to defaults when
    /// no file exists; a file that exists but does not parse is an error.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self> {
        let path = match std::env::var_os(CONFIG_ENV) {
            Some(path) => std::path::PathBuf::from(path),
            None => {
                let path = std::path::PathBuf::from(CONFIG_FILE);
                if !path.exists() {
                    log::debug!("No {} found, using default config", CONFIG_FILE);
                    return Ok(Self::default());
                }
                path
            }
        };

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self> {
        Ok(Self::default())
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let mut config: Self = serde_json::from_str(text).context("Invalid config JSON")?;
        config.validate();
        Ok(config)
    }

    /// Clamps values that would make strokes invisible or degenerate.
    pub fn validate(&mut self) {
        if !(0.5..=50.0).contains(&self.stroke_width) {
            log::warn!(
                "stroke_width {} out of range 0.5-50.0, clamping",
                self.stroke_width
            );
            self.stroke_width = self.stroke_width.clamp(0.5, 50.0);
        }

        if !(0.0..=20.0).contains(&self.roughness) {
            log::warn!("roughness {} out of range 0-20, clamping", self.roughness);
            self.roughness = self.roughness.clamp(0.0, 20.0);
        }

        if !(1..=16).contains(&self.segment_count) {
            log::warn!(
                "segment_count {} out of range 1-16, clamping",
                self.segment_count
            );
            self.segment_count = self.segment_count.clamp(1, 16);
        }

        for channel in self.stroke_color.iter_mut().chain(self.background.iter_mut()) {
            *channel = channel.clamp(0.0, 1.0);
        }
    }

    pub fn stroke_style(&self) -> HandDrawnOptions {
        HandDrawnOptions {
            stroke: self.stroke_color,
            stroke_width: self.stroke_width,
            roughness: self.roughness,
            segment_count: self.segment_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_board_style() {
        let style = BoardConfig::default().stroke_style();
        assert_eq!(style.stroke, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(style.stroke_width, 2.0);
        assert_eq!(style.roughness, 2.0);
        assert_eq!(style.segment_count, 2);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = BoardConfig::from_json(r#"{ "roughness": 4.5, "seed": 9 }"#).unwrap();
        assert_eq!(config.roughness, 4.5);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.stroke_width, 2.0);
        assert_eq!(config.title, "sketchboard");
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = BoardConfig::from_json(
            r#"{ "stroke_width": 0.0, "roughness": 100.0, "segment_count": 0,
                 "stroke_color": [2.0, -1.0, 0.5, 1.0] }"#,
        )
        .unwrap();
        assert_eq!(config.stroke_width, 0.5);
        assert_eq!(config.roughness, 20.0);
        assert_eq!(config.segment_count, 1);
        assert_eq!(config.stroke_color, [1.0, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(BoardConfig::from_json("{ roughness: }").is_err());
    }
}
