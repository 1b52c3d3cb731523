// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Fixed-margin configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{StretchError, StretchResult};
use crate::geometry::Axis;
use crate::stretch::{AxisConfig, DEFAULT_MAX_SCALE};

/// File picked up from the working directory by [`StretchConfig::load`]
pub const CONFIG_FILE: &str = "stretch.toml";

/// Margin layout for all three axes, plus the upper target bound multiplier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StretchConfig {
    pub x: AxisConfig,
    pub y: AxisConfig,
    pub z: AxisConfig,
    /// Targets may grow an axis up to this many times its detected size
    #[serde(default = "default_max_scale")]
    pub max_scale: f64,
}

fn default_max_scale() -> f64 {
    DEFAULT_MAX_SCALE
}

impl Default for StretchConfig {
    /// Rail profile: one mounting end on X, end caps on Y and Z
    fn default() -> Self {
        Self {
            x: AxisConfig::single_sided(3.75),
            y: AxisConfig::symmetric(2.01),
            z: AxisConfig::symmetric(4.02),
            max_scale: DEFAULT_MAX_SCALE,
        }
    }
}

impl StretchConfig {
    pub fn new(x: AxisConfig, y: AxisConfig, z: AxisConfig) -> Self {
        Self {
            x,
            y,
            z,
            max_scale: DEFAULT_MAX_SCALE,
        }
    }

    pub fn axis(&self, axis: Axis) -> AxisConfig {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Replace one axis' margin, keeping its layout
    pub fn set_margin(&mut self, axis: Axis, margin: f64) {
        let slot = match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        };
        *slot = slot.with_margin(margin);
    }

    pub fn validate(&self) -> StretchResult<()> {
        for axis in Axis::ALL {
            self.axis(axis).validate(axis)?;
        }
        if !self.max_scale.is_finite() || self.max_scale < 1.0 {
            return Err(StretchError::InvalidScale(self.max_scale));
        }
        Ok(())
    }

    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: StretchConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load `stretch.toml` from the working directory if present, then apply
    /// environment overrides
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("."))
    }

    /// Same as [`StretchConfig::load`], looking for `stretch.toml` in `dir`
    pub fn load_from(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `STRETCH_MARGIN_X`/`_Y`/`_Z` from `lookup`
    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        for axis in Axis::ALL {
            let key = format!("STRETCH_MARGIN_{}", axis);
            if let Some(value) = lookup(&key) {
                let margin: f64 = value
                    .trim()
                    .parse()
                    .with_context(|| format!("{} is not a number: {:?}", key, value))?;
                self.set_margin(axis, margin);
            }
        }
        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = self.to_toml()?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
