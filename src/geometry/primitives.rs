// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Box-shaped mesh generators used for fixtures and benchmarks

use super::{Mesh, Triangle};
use nalgebra::{Point3, Vector3};

/// Geometric primitives
pub enum Primitive {
    Cube { size: Vector3<f64>, center: bool },
    /// Box anchored at the origin whose faces are split into a grid, so
    /// vertices land inside every margin and interior region
    Slab { size: Vector3<f64>, divisions: [usize; 3] },
}

impl Primitive {
    pub fn cube(size: Vector3<f64>, center: bool) -> Self {
        Self::Cube { size, center }
    }

    pub fn slab(size: Vector3<f64>, divisions: [usize; 3]) -> Self {
        Self::Slab {
            size,
            divisions: divisions.map(|d| d.max(1)),
        }
    }

    pub fn to_mesh(&self) -> Mesh {
        match self {
            Self::Cube { size, center } => {
                let origin = if *center {
                    Point3::from(-size / 2.0)
                } else {
                    Point3::origin()
                };
                generate_box_mesh(origin, *size, [1, 1, 1])
            }
            Self::Slab { size, divisions } => {
                generate_box_mesh(Point3::origin(), *size, *divisions)
            }
        }
    }
}

fn generate_box_mesh(origin: Point3<f64>, size: Vector3<f64>, divisions: [usize; 3]) -> Mesh {
    let mut mesh = Mesh::new();

    for axis in 0..3 {
        let u = (axis + 1) % 3;
        let v = (axis + 2) % 3;
        let (nu, nv) = (divisions[u], divisions[v]);

        for outward in [false, true] {
            let corner = |i: usize, j: usize| {
                let mut p = origin;
                p[axis] += if outward { size[axis] } else { 0.0 };
                // fraction first, so the far edge lands exactly on `size`
                p[u] += size[u] * (i as f64 / nu as f64);
                p[v] += size[v] * (j as f64 / nv as f64);
                p
            };

            for i in 0..nu {
                for j in 0..nv {
                    let (p00, p10) = (corner(i, j), corner(i + 1, j));
                    let (p11, p01) = (corner(i + 1, j + 1), corner(i, j + 1));

                    // u x v points along +axis, so the min face is wound backwards
                    if outward {
                        mesh.add_triangle(Triangle::from_points(p00, p10, p11));
                        mesh.add_triangle(Triangle::from_points(p00, p11, p01));
                    } else {
                        mesh.add_triangle(Triangle::from_points(p00, p11, p10));
                        mesh.add_triangle(Triangle::from_points(p00, p01, p11));
                    }
                }
            }
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_has_twelve_triangles() {
        let mesh = Primitive::cube(Vector3::new(10.0, 10.0, 10.0), true).to_mesh();
        assert_eq!(mesh.triangle_count(), 12);

        let bbox = mesh.bounding_box().unwrap();
        assert_eq!(bbox.min, Point3::new(-5.0, -5.0, -5.0));
        assert_eq!(bbox.max, Point3::new(5.0, 5.0, 5.0));
    }

    #[test]
    fn test_slab_triangle_count() {
        let mesh = Primitive::slab(Vector3::new(4.0, 6.0, 2.0), [4, 6, 2]).to_mesh();
        // 2 * (6*2 + 2*4 + 4*6) quads, 2 triangles each
        assert_eq!(mesh.triangle_count(), 4 * (12 + 8 + 24));
    }

    #[test]
    fn test_normals_point_outward() {
        let mesh = Primitive::slab(Vector3::new(2.0, 2.0, 2.0), [2, 2, 2]).to_mesh();
        let center = Point3::new(1.0, 1.0, 1.0);
        for tri in &mesh.triangles {
            let centroid = Point3::from(
                (tri.vertices[0].coords + tri.vertices[1].coords + tri.vertices[2].coords) / 3.0,
            );
            assert!(tri.normal.dot(&(centroid - center)) > 0.0);
        }
    }
}
