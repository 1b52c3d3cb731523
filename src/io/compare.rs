// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Mesh comparison utilities for round-trip checks

use crate::geometry::Mesh;
use serde::{Deserialize, Serialize};

/// Result of mesh comparison
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeshComparison {
    pub triangle_count_match: bool,
    pub triangle_count_diff: i64,
    /// Largest distance between corresponding vertices, if counts match
    pub max_vertex_delta: f64,
    pub bbox_match: bool,
    pub tolerance: f64,
    pub passed: bool,
}

/// Compare two meshes triangle by triangle.
///
/// Vertices are paired by position in the triangle list, so this only makes
/// sense for meshes that share topology (e.g. a mesh and its stretched copy
/// or a file and its re-export).
pub fn compare_meshes(mesh_a: &Mesh, mesh_b: &Mesh, tolerance: f64) -> MeshComparison {
    let mut comparison = MeshComparison {
        tolerance,
        ..MeshComparison::default()
    };

    comparison.triangle_count_diff = mesh_a.triangle_count() as i64 - mesh_b.triangle_count() as i64;
    comparison.triangle_count_match = comparison.triangle_count_diff == 0;

    if comparison.triangle_count_match {
        comparison.max_vertex_delta = mesh_a
            .vertices()
            .zip(mesh_b.vertices())
            .map(|(a, b)| (a - b).norm())
            .fold(0.0, f64::max);
    } else {
        comparison.max_vertex_delta = f64::INFINITY;
    }

    comparison.bbox_match = match (mesh_a.bounding_box(), mesh_b.bounding_box()) {
        (Ok(a), Ok(b)) => a.approx_eq(&b, tolerance),
        (Err(_), Err(_)) => true,
        _ => false,
    };

    comparison.passed = comparison.triangle_count_match
        && comparison.bbox_match
        && comparison.max_vertex_delta <= tolerance;

    comparison
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Primitive;
    use nalgebra::{Point3, Vector3};

    #[test]
    fn test_compare_identical_meshes() {
        let mesh_a = Primitive::cube(Vector3::new(10.0, 10.0, 10.0), true).to_mesh();
        let mesh_b = mesh_a.clone();

        let comparison = compare_meshes(&mesh_a, &mesh_b, 1e-9);
        assert!(comparison.passed);
        assert_eq!(comparison.max_vertex_delta, 0.0);
    }

    #[test]
    fn test_compare_moved_vertex() {
        let mesh_a = Primitive::cube(Vector3::new(10.0, 10.0, 10.0), false).to_mesh();
        let mesh_b = mesh_a.map_vertices(|p| Point3::new(p.x, p.y, p.z * 2.0));

        let comparison = compare_meshes(&mesh_a, &mesh_b, 1e-6);
        assert!(comparison.triangle_count_match);
        assert!(!comparison.bbox_match);
        assert_eq!(comparison.max_vertex_delta, 10.0);
        assert!(!comparison.passed);
    }

    #[test]
    fn test_compare_different_topology() {
        let mesh_a = Primitive::cube(Vector3::new(1.0, 1.0, 1.0), false).to_mesh();
        let mesh_b = Primitive::slab(Vector3::new(1.0, 1.0, 1.0), [2, 2, 2]).to_mesh();

        let comparison = compare_meshes(&mesh_a, &mesh_b, 1e-6);
        assert!(!comparison.triangle_count_match);
        assert!(comparison.bbox_match);
        assert!(!comparison.passed);
    }
}
