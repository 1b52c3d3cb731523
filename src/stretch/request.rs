// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Target sizes and the ranges they are checked against

use crate::error::{StretchError, StretchResult};
use crate::geometry::{Axis, BoundingBox};
use serde::{Deserialize, Serialize};

/// Allowed target sizes are `[detected, detected * DEFAULT_MAX_SCALE]`
pub const DEFAULT_MAX_SCALE: f64 = 10.0;

/// Inclusive range of accepted target sizes for one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetRange {
    pub min: f64,
    pub max: f64,
}

impl TargetRange {
    /// A mesh can only grow: the lower bound is the detected size, the upper
    /// bound `max_scale` times it
    pub fn for_axis(bbox: &BoundingBox, axis: Axis, max_scale: f64) -> Self {
        let detected = bbox.axis_size(axis);
        Self {
            min: detected,
            max: detected * max_scale,
        }
    }

    /// Compared at `f32` precision, the precision STL stores coordinates
    /// in: a file-loaded 9.6 is detected as 9.600000381..., and a typed 9.6
    /// must still match it. NaN never passes.
    pub fn contains(&self, value: f64) -> bool {
        let value = value as f32;
        self.min as f32 <= value && value <= self.max as f32
    }
}

/// Requested total size along each axis, in mesh units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StretchRequest {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl StretchRequest {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Request that keeps every axis at its detected size
    pub fn identity(bbox: &BoundingBox) -> Self {
        let size = bbox.size();
        Self::new(size.x, size.y, size.z)
    }

    pub fn target(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Check every axis, X first. The first violation is returned.
    pub fn validate(&self, bbox: &BoundingBox, max_scale: f64) -> StretchResult<()> {
        for axis in Axis::ALL {
            let range = TargetRange::for_axis(bbox, axis, max_scale);
            let value = self.target(axis);
            if !range.contains(value) {
                return Err(StretchError::Validation {
                    axis,
                    value,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        Ok(())
    }
}
