// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for loading, validating and stretching meshes

use crate::geometry::Axis;
use std::path::PathBuf;
use thiserror::Error;

/// Result type used throughout the library
pub type StretchResult<T> = Result<T, StretchError>;

/// Errors raised before or while stretching a mesh.
///
/// Every variant is detected before any coordinate is rewritten, so a caller
/// never observes a partially transformed mesh.
#[derive(Debug, Error)]
pub enum StretchError {
    /// Requested target size lies outside the allowed range for its axis
    #[error("{axis} target {value:.4} mm is outside the allowed range [{min:.4}, {max:.4}] mm")]
    Validation {
        axis: Axis,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Input is not a readable STL file
    #[error("failed to parse STL {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// Mesh has no vertices, so its bounds are undefined
    #[error("mesh has no vertices; bounding box is undefined")]
    EmptyMesh,

    /// Margin in a configuration is negative or not a number
    #[error("{axis} margin {margin} must be a finite, non-negative length")]
    InvalidMargin { axis: Axis, margin: f64 },

    /// Upper target bound multiplier is below 1 or not a number
    #[error("max scale {0} must be a finite value of at least 1.0")]
    InvalidScale(f64),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StretchError {
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}
