// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Per-axis piecewise-linear coordinate remaps

use crate::error::{StretchError, StretchResult};
use crate::geometry::Axis;
use serde::{Deserialize, Serialize};

/// How the fixed margins of one axis are laid out
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AxisConfig {
    /// One fixed margin measured inward from the minimum boundary.
    /// Everything beyond it scales.
    SingleSided { margin: f64 },
    /// The same fixed margin at both boundaries. The interior scales and the
    /// far margin is carried along rigidly.
    Symmetric { margin: f64 },
}

impl AxisConfig {
    pub fn single_sided(margin: f64) -> Self {
        Self::SingleSided { margin }
    }

    pub fn symmetric(margin: f64) -> Self {
        Self::Symmetric { margin }
    }

    pub fn margin(&self) -> f64 {
        match *self {
            Self::SingleSided { margin } | Self::Symmetric { margin } => margin,
        }
    }

    /// Same layout with a different margin length
    pub fn with_margin(self, margin: f64) -> Self {
        match self {
            Self::SingleSided { .. } => Self::SingleSided { margin },
            Self::Symmetric { .. } => Self::Symmetric { margin },
        }
    }

    pub fn validate(&self, axis: Axis) -> StretchResult<()> {
        let margin = self.margin();
        if !margin.is_finite() || margin < 0.0 {
            return Err(StretchError::InvalidMargin { axis, margin });
        }
        Ok(())
    }
}

/// Precomputed remap for one axis.
///
/// Built once per request from the axis bounds, its [`AxisConfig`] and the
/// target size; `apply` is then a branch and a multiply-add per coordinate.
/// The remap is continuous at every region boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisRemap {
    SingleSided {
        fixed_left: f64,
        factor: f64,
    },
    Symmetric {
        start: f64,
        end: f64,
        factor: f64,
        shift: f64,
    },
}

impl AxisRemap {
    /// `min`/`max` are the detected bounds of the axis, `target` the requested
    /// total size. A margin that swallows the whole stretchable span yields a
    /// factor of 1.0 instead of dividing by zero.
    pub fn new(config: AxisConfig, min: f64, max: f64, target: f64) -> Self {
        match config {
            AxisConfig::SingleSided { margin } => {
                let fixed_left = min + margin;
                let span = max - fixed_left;
                let factor = if span > 0.0 {
                    (target - margin) / span
                } else {
                    1.0
                };
                Self::SingleSided { fixed_left, factor }
            }
            AxisConfig::Symmetric { margin } => {
                let start = min + margin;
                let end = max - margin;
                let middle = end - start;
                let factor = if middle > 0.0 {
                    (target - 2.0 * margin) / middle
                } else {
                    1.0
                };
                Self::Symmetric {
                    start,
                    end,
                    factor,
                    shift: target - (max - min),
                }
            }
        }
    }

    pub fn factor(&self) -> f64 {
        match *self {
            Self::SingleSided { factor, .. } | Self::Symmetric { factor, .. } => factor,
        }
    }

    pub fn apply(&self, v: f64) -> f64 {
        match *self {
            Self::SingleSided { fixed_left, factor } => {
                if v <= fixed_left {
                    v
                } else {
                    fixed_left + (v - fixed_left) * factor
                }
            }
            Self::Symmetric {
                start,
                end,
                factor,
                shift,
            } => {
                if v < start {
                    v
                } else if v > end {
                    // far margin follows the moved boundary without scaling
                    v + shift
                } else {
                    start + (v - start) * factor
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_sided_keeps_margin() {
        let remap = AxisRemap::new(AxisConfig::single_sided(3.75), 0.0, 12.0, 20.0);
        assert_eq!(remap.apply(0.0), 0.0);
        assert_eq!(remap.apply(3.75), 3.75);
        assert_relative_eq!(remap.factor(), (20.0 - 3.75) / (12.0 - 3.75));
        assert_relative_eq!(remap.apply(12.0), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_single_sided_with_offset_origin() {
        let remap = AxisRemap::new(AxisConfig::single_sided(1.0), -5.0, 5.0, 19.0);
        assert_eq!(remap.apply(-4.5), -4.5);
        assert_relative_eq!(remap.factor(), 2.0);
        assert_relative_eq!(remap.apply(5.0), 14.0, epsilon = 1e-12);
    }

    #[test]
    fn test_symmetric_regions() {
        let remap = AxisRemap::new(AxisConfig::symmetric(2.0), 0.0, 10.0, 16.0);
        assert_relative_eq!(remap.factor(), 2.0);

        // lower margin untouched
        assert_eq!(remap.apply(1.0), 1.0);
        // interior scaled about start
        assert_relative_eq!(remap.apply(5.0), 8.0);
        // upper margin shifted by the size delta
        assert_relative_eq!(remap.apply(9.0), 15.0);
        assert_relative_eq!(remap.apply(10.0), 16.0);
    }

    #[test]
    fn test_symmetric_is_continuous_at_boundaries() {
        let remap = AxisRemap::new(AxisConfig::symmetric(2.01), 0.0, 209.45, 250.0);
        let eps = 1e-9;
        for boundary in [2.01, 209.45 - 2.01] {
            let below = remap.apply(boundary - eps);
            let above = remap.apply(boundary + eps);
            assert!((above - below).abs() < 1e-6, "jump at {}", boundary);
        }
    }

    #[test]
    fn test_degenerate_margins_fall_back_to_identity_factor() {
        let single = AxisRemap::new(AxisConfig::single_sided(12.0), 0.0, 10.0, 50.0);
        assert_eq!(single.factor(), 1.0);
        assert_eq!(single.apply(7.0), 7.0);

        let symmetric = AxisRemap::new(AxisConfig::symmetric(5.0), 0.0, 10.0, 50.0);
        assert_eq!(symmetric.factor(), 1.0);
        assert!(symmetric.apply(3.0).is_finite());
    }

    #[test]
    fn test_margin_validation() {
        assert!(AxisConfig::symmetric(0.0).validate(Axis::Y).is_ok());
        assert!(matches!(
            AxisConfig::symmetric(-1.0).validate(Axis::Z),
            Err(StretchError::InvalidMargin { axis: Axis::Z, .. })
        ));
        assert!(AxisConfig::single_sided(f64::NAN).validate(Axis::X).is_err());
    }

    #[test]
    fn test_with_margin_keeps_mode() {
        let config = AxisConfig::symmetric(2.0).with_margin(3.0);
        assert_eq!(config, AxisConfig::Symmetric { margin: 3.0 });
    }
}
