// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Bounding box utilities

use super::{Axis, Mesh};
use crate::error::{StretchError, StretchResult};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl BoundingBox {
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { min, max }
    }

    /// Scan every vertex of every triangle.
    ///
    /// Fails with [`StretchError::EmptyMesh`] when there is nothing to scan.
    pub fn from_mesh(mesh: &Mesh) -> StretchResult<Self> {
        Self::from_points(mesh.vertices())
    }

    pub fn from_points<'a, I>(points: I) -> StretchResult<Self>
    where
        I: IntoIterator<Item = &'a Point3<f64>>,
    {
        let mut points = points.into_iter();
        let first = points.next().ok_or(StretchError::EmptyMesh)?;

        let mut bbox = Self::new(*first, *first);
        for point in points {
            bbox.expand_to_include(point);
        }
        Ok(bbox)
    }

    pub fn expand_to_include(&mut self, point: &Point3<f64>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);

        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Lower and upper bound along one axis
    pub fn extent(&self, axis: Axis) -> (f64, f64) {
        (self.min[axis.index()], self.max[axis.index()])
    }

    /// Detected size along one axis
    pub fn axis_size(&self, axis: Axis) -> f64 {
        let (min, max) = self.extent(axis);
        max - min
    }

    /// Check if two bounding boxes are approximately equal within tolerance
    pub fn approx_eq(&self, other: &BoundingBox, tolerance: f64) -> bool {
        (self.min - other.min).abs().max() < tolerance
            && (self.max - other.max).abs().max() < tolerance
    }
}
