//! Demo configuration: block count, cell size, palette, zoom factor,
//! animation length and camera mode.
//!
//! The configuration is stored as JSON in the browser's `localStorage`.
//! Missing keys take their defaults, so an older saved blob keeps working.
//!
//! ```
//! use block_view_demo::config::DemoConfig;
//!
//! let cfg = DemoConfig::from_json(r#"{ "block_count": 40, "mode": "press_to_zoom" }"#).unwrap();
//! assert_eq!(cfg.block_count, 40);
//! assert_eq!(cfg.zoom_factor, 0.25);
//! ```

pub mod defaults;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::model::{Palette, Size};
use crate::state::{CameraSettings, ZoomMode};
use defaults::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub block_count: usize,
    pub cell_size: Size,
    pub palette: Palette,
    pub zoom_factor: f64,
    pub animation_duration_ms: u32,
    pub mode: ZoomMode,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            block_count: DEFAULT_BLOCK_COUNT,
            cell_size: Size::new(DEFAULT_CELL_WIDTH, DEFAULT_CELL_HEIGHT),
            palette: Palette::default(),
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            mode: ZoomMode::default(),
        }
    }
}

impl DemoConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let cfg: DemoConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        let Size { width, height } = self.cell_size;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidCellSize { width, height });
        }
        if !(self.zoom_factor.is_finite() && self.zoom_factor > 0.0) {
            return Err(ConfigError::InvalidZoomFactor(self.zoom_factor));
        }
        Ok(())
    }

    pub fn animation_duration_secs(&self) -> f64 {
        f64::from(self.animation_duration_ms) / 1000.0
    }

    /// True when `other` is this configuration with only a different zoom
    /// mode, which the running scene can absorb without a rebuild.
    pub fn only_mode_differs(&self, other: &DemoConfig) -> bool {
        self.mode != other.mode
            && *self
                == DemoConfig {
                    mode: self.mode,
                    ..other.clone()
                }
    }

    pub fn camera_settings(&self, viewport: Size) -> CameraSettings {
        CameraSettings {
            mode: self.mode,
            zoom_factor: self.zoom_factor,
            animation_duration: self.animation_duration_secs(),
            viewport,
        }
    }
}

/// Loads the saved configuration, falling back to defaults when nothing is
/// stored or the stored blob is invalid.
pub fn load() -> DemoConfig {
    let Some(store) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return DemoConfig::default();
    };
    match store.get_item(STORAGE_KEY) {
        Ok(Some(raw)) => DemoConfig::from_json(&raw).unwrap_or_else(|e| {
            warn!("discarding saved config: {e}");
            DemoConfig::default()
        }),
        _ => DemoConfig::default(),
    }
}

pub fn save(cfg: &DemoConfig) {
    let Some(store) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return;
    };
    match cfg.to_json() {
        Ok(s) => {
            if store.set_item(STORAGE_KEY, &s).is_err() {
                warn!("could not persist config");
            }
        }
        Err(e) => warn!("could not serialize config: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Color;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(DemoConfig::from_json("{}").unwrap(), DemoConfig::default());
    }

    #[test]
    fn json_round_trip() {
        let cfg = DemoConfig {
            block_count: 12,
            palette: Palette::new(vec![Color::CYAN, Color::ORANGE]).unwrap(),
            mode: ZoomMode::PressToZoom,
            ..DemoConfig::default()
        };
        let back = DemoConfig::from_json(&cfg.to_json().unwrap()).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn mode_only_change_is_detected() {
        let base = DemoConfig::default();
        let press = DemoConfig {
            mode: ZoomMode::PressToZoom,
            ..base.clone()
        };
        assert!(base.only_mode_differs(&press));
        assert!(!base.only_mode_differs(&base));

        let bigger = DemoConfig {
            block_count: 10,
            ..press.clone()
        };
        assert!(!base.only_mode_differs(&bigger));
    }

    #[test]
    fn rejects_negative_count() {
        assert!(matches!(
            DemoConfig::from_json(r#"{ "block_count": -1 }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn rejects_empty_palette() {
        assert!(DemoConfig::from_json(r#"{ "palette": [] }"#).is_err());
    }

    #[test]
    fn rejects_bad_zoom_and_cell_size() {
        assert!(matches!(
            DemoConfig::from_json(r#"{ "zoom_factor": 0.0 }"#),
            Err(ConfigError::InvalidZoomFactor(_))
        ));
        assert!(matches!(
            DemoConfig::from_json(r#"{ "cell_size": { "width": 10.0, "height": -1.0 } }"#),
            Err(ConfigError::InvalidCellSize { .. })
        ));
    }

    #[test]
    fn duration_in_seconds() {
        assert_eq!(DemoConfig::default().animation_duration_secs(), 0.25);
    }
}
