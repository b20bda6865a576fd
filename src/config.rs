//! Tray tunables: defaults, environment overrides, JSON loading and validation.
//!
//! Every knob has a default in [`crate::consts`]. Hosts can override them from
//! the environment (`TRAY_*` keys) or embed a `TrayConfig` in their own JSON
//! settings. Either way the result goes through [`TrayConfig::validate`] before
//! a [`crate::tray::Tray`] accepts it.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts;

/// Error returned when a configuration cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A size or distance that must be strictly positive was not.
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f64 },
    /// A value that may be zero was negative.
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
    /// A value was NaN or infinite.
    #[error("{field} must be finite")]
    NotFinite { field: &'static str },
    /// The magnified size cap is smaller than the resting size.
    #[error("max {axis} {max} is smaller than base {axis} {base}")]
    MaxBelowBase { axis: &'static str, base: f64, max: f64 },
    /// The JSON document could not be parsed.
    #[error("failed to parse tray config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunables for a [`crate::tray::Tray`]. Semantics are fixed; values are not.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrayConfig {
    /// Resting item width.
    pub item_width: f64,
    /// Resting item height.
    pub item_height: f64,
    /// Cap on a magnified item's width.
    pub max_item_width: f64,
    /// Cap on a magnified item's height.
    pub max_item_height: f64,
    /// Gap between neighbouring items.
    pub spacing: f64,
    /// Extra scale at the magnification peak.
    pub max_scale_increase: f64,
    /// Pointer distance beyond which items stay at rest.
    pub max_distance: f64,
    /// Reorder animation length handed to the renderer.
    pub reorder_animation_ms: u64,
    /// Swap visual length; also how long the swap lock is held.
    pub swap_visual_ms: u64,
    /// Minimum gap between accepted hover swaps.
    pub swap_debounce_ms: u64,
    /// Pointer moves shorter than this are ignored.
    pub jitter_threshold: f64,
}

impl Default for TrayConfig {
    fn default() -> Self {
        Self {
            item_width: consts::ITEM_WIDTH,
            item_height: consts::ITEM_HEIGHT,
            max_item_width: consts::MAX_ITEM_WIDTH,
            max_item_height: consts::MAX_ITEM_HEIGHT,
            spacing: consts::ITEM_SPACING,
            max_scale_increase: consts::MAX_SCALE_INCREASE,
            max_distance: consts::MAX_INFLUENCE_DISTANCE,
            reorder_animation_ms: consts::REORDER_ANIMATION_MS,
            swap_visual_ms: consts::SWAP_VISUAL_MS,
            swap_debounce_ms: consts::SWAP_DEBOUNCE_MS,
            jitter_threshold: consts::POINTER_JITTER_THRESHOLD,
        }
    }
}

impl TrayConfig {
    /// Build a config from process environment variables.
    ///
    /// Recognised keys (all optional, defaults from [`crate::consts`]):
    /// - `TRAY_ITEM_WIDTH`, `TRAY_ITEM_HEIGHT`
    /// - `TRAY_MAX_ITEM_WIDTH`, `TRAY_MAX_ITEM_HEIGHT`
    /// - `TRAY_SPACING`
    /// - `TRAY_MAX_SCALE_INCREASE`, `TRAY_MAX_DISTANCE`
    /// - `TRAY_REORDER_ANIMATION_MS`, `TRAY_SWAP_VISUAL_MS`, `TRAY_SWAP_DEBOUNCE_MS`
    /// - `TRAY_JITTER_THRESHOLD`
    ///
    /// Unparsable values fall back to the default and are logged.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(value) => Some(value),
            Err(_) => None,
        })
    }

    /// Same as [`Self::from_env`] but reads keys through `lookup`.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let d = Self::default();
        Self {
            item_width: env_parse(&lookup, "TRAY_ITEM_WIDTH", d.item_width),
            item_height: env_parse(&lookup, "TRAY_ITEM_HEIGHT", d.item_height),
            max_item_width: env_parse(&lookup, "TRAY_MAX_ITEM_WIDTH", d.max_item_width),
            max_item_height: env_parse(&lookup, "TRAY_MAX_ITEM_HEIGHT", d.max_item_height),
            spacing: env_parse(&lookup, "TRAY_SPACING", d.spacing),
            max_scale_increase: env_parse(&lookup, "TRAY_MAX_SCALE_INCREASE", d.max_scale_increase),
            max_distance: env_parse(&lookup, "TRAY_MAX_DISTANCE", d.max_distance),
            reorder_animation_ms: env_parse(&lookup, "TRAY_REORDER_ANIMATION_MS", d.reorder_animation_ms),
            swap_visual_ms: env_parse(&lookup, "TRAY_SWAP_VISUAL_MS", d.swap_visual_ms),
            swap_debounce_ms: env_parse(&lookup, "TRAY_SWAP_DEBOUNCE_MS", d.swap_debounce_ms),
            jitter_threshold: env_parse(&lookup, "TRAY_JITTER_THRESHOLD", d.jitter_threshold),
        }
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject configurations the geometry and scale models cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("item_width", self.item_width),
            ("item_height", self.item_height),
            ("max_item_width", self.max_item_width),
            ("max_item_height", self.max_item_height),
            ("max_distance", self.max_distance),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field });
            }
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        for (field, value) in [
            ("spacing", self.spacing),
            ("max_scale_increase", self.max_scale_increase),
            ("jitter_threshold", self.jitter_threshold),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        if self.max_item_width < self.item_width {
            return Err(ConfigError::MaxBelowBase { axis: "width", base: self.item_width, max: self.max_item_width });
        }
        if self.max_item_height < self.item_height {
            return Err(ConfigError::MaxBelowBase {
                axis: "height",
                base: self.item_height,
                max: self.max_item_height,
            });
        }
        Ok(())
    }

    /// Distance between neighbouring slot origins.
    #[must_use]
    pub fn stride(&self) -> f64 {
        self.item_width + self.spacing
    }

    #[must_use]
    pub fn reorder_animation(&self) -> Duration {
        Duration::from_millis(self.reorder_animation_ms)
    }

    #[must_use]
    pub fn swap_visual(&self) -> Duration {
        Duration::from_millis(self.swap_visual_ms)
    }

    #[must_use]
    pub fn swap_debounce(&self) -> Duration {
        Duration::from_millis(self.swap_debounce_ms)
    }
}

fn env_parse<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(%key, value = %raw, "ignoring unparsable tray override");
            default
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
