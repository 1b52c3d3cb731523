// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Triangle-soup mesh representation

use super::BoundingBox;
use crate::error::StretchResult;
use nalgebra::{Point3, Vector3};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Triangle with its own three corner positions and the facet normal read
/// from the source file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub normal: Vector3<f64>,
    pub vertices: [Point3<f64>; 3],
}

impl Triangle {
    pub fn new(normal: Vector3<f64>, vertices: [Point3<f64>; 3]) -> Self {
        Self { normal, vertices }
    }

    /// Build a triangle and derive its normal from the winding
    pub fn from_points(a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) -> Self {
        let normal = (b - a)
            .cross(&(c - a))
            .try_normalize(1e-12)
            .unwrap_or_else(Vector3::zeros);
        Self::new(normal, [a, b, c])
    }
}

/// Ordered list of triangles, as stored in an STL file.
///
/// Vertices are not shared between triangles, so replacing coordinates can
/// never change connectivity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    pub fn empty() -> Self {
        Self::new()
    }

    pub fn with_capacity(triangle_count: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    pub fn from_triangles(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Iterate over every triangle corner in file order
    pub fn vertices(&self) -> impl Iterator<Item = &Point3<f64>> + '_ {
        self.triangles.iter().flat_map(|t| t.vertices.iter())
    }

    /// Get vertex count (three per triangle)
    pub fn vertex_count(&self) -> usize {
        self.triangles.len() * 3
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Compute bounding box
    pub fn bounding_box(&self) -> StretchResult<BoundingBox> {
        BoundingBox::from_mesh(self)
    }

    /// Produce a new mesh with every vertex replaced by `f(vertex)`.
    ///
    /// Triangle order, corner order and facet normals are carried over as-is.
    pub fn map_vertices<F>(&self, f: F) -> Mesh
    where
        F: Fn(&Point3<f64>) -> Point3<f64> + Sync,
    {
        let triangles = self
            .triangles
            .par_iter()
            .map(|tri| Triangle {
                normal: tri.normal,
                vertices: [f(&tri.vertices[0]), f(&tri.vertices[1]), f(&tri.vertices[2])],
            })
            .collect();
        Mesh { triangles }
    }
}
