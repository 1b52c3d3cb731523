// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Stretch behaviour on a rail-shaped part

use approx::assert_relative_eq;
use nalgebra::Vector3;
use selective_stretch::geometry::{Axis, Mesh, Primitive};
use selective_stretch::stretch::{AxisConfig, AxisStretcher, StretchRequest};
use selective_stretch::{StretchConfig, StretchError, StretchResult};

const TOLERANCE: f64 = 1e-6;

/// x:[0,12], y:[0,209.45], z:[0,9.6], with vertices in every margin
fn rail() -> Mesh {
    Primitive::slab(Vector3::new(12.0, 209.45, 9.6), [12, 100, 8]).to_mesh()
}

fn rail_config() -> StretchConfig {
    StretchConfig::new(
        AxisConfig::single_sided(3.75),
        AxisConfig::symmetric(2.01),
        AxisConfig::symmetric(4.02),
    )
}

fn stretch(mesh: &Mesh, request: StretchRequest) -> StretchResult<(AxisStretcher, Mesh)> {
    let bbox = mesh.bounding_box()?;
    let stretcher = AxisStretcher::new(&rail_config(), &bbox, &request)?;
    let out = stretcher.apply(mesh);
    Ok((stretcher, out))
}

#[test]
fn test_identity_request_reproduces_input() -> StretchResult<()> {
    let mesh = rail();
    let (_, out) = stretch(&mesh, StretchRequest::new(12.0, 209.45, 9.6))?;

    for (a, b) in mesh.vertices().zip(out.vertices()) {
        assert_relative_eq!(a.x, b.x, epsilon = TOLERANCE);
        assert_relative_eq!(a.y, b.y, epsilon = TOLERANCE);
        assert_relative_eq!(a.z, b.z, epsilon = TOLERANCE);
    }
    Ok(())
}

#[test]
fn test_topology_is_preserved() -> StretchResult<()> {
    let mesh = rail();
    let (_, out) = stretch(&mesh, StretchRequest::new(40.0, 600.0, 30.0))?;

    assert_eq!(out.triangle_count(), mesh.triangle_count());
    assert_eq!(out.vertex_count(), mesh.vertex_count());
    for (before, after) in mesh.triangles.iter().zip(&out.triangles) {
        assert_eq!(before.normal, after.normal);
    }
    Ok(())
}

#[test]
fn test_lengthening_y_only() -> StretchResult<()> {
    let mesh = rail();
    let (stretcher, out) = stretch(&mesh, StretchRequest::new(12.0, 250.0, 9.6))?;

    let factor = (250.0 - 4.02) / 205.43;
    assert_relative_eq!(stretcher.factor(Axis::Y), factor, epsilon = 1e-9);
    assert_relative_eq!(stretcher.factor(Axis::Y), 1.1975, epsilon = 1e-4);

    let (start, end) = (2.01, 209.45 - 2.01);
    for (a, b) in mesh.vertices().zip(out.vertices()) {
        if a.y < start {
            assert_eq!(b.y, a.y);
        } else if a.y > end {
            assert_relative_eq!(b.y - a.y, 40.55, epsilon = TOLERANCE);
        } else {
            assert_relative_eq!(b.y, start + (a.y - start) * factor, epsilon = TOLERANCE);
        }
    }

    let size = out.bounding_box()?.size();
    assert_relative_eq!(size.y, 250.0, epsilon = TOLERANCE);
    assert_relative_eq!(size.x, 12.0, epsilon = TOLERANCE);
    assert_relative_eq!(size.z, 9.6, epsilon = TOLERANCE);
    Ok(())
}

#[test]
fn test_fixed_margins_are_not_deformed() -> StretchResult<()> {
    let mesh = rail();
    let (_, out) = stretch(&mesh, StretchRequest::new(36.0, 1000.0, 50.0))?;
    let z_upper = 9.6 - 4.02;

    let mut upper = Vec::new();
    for (a, b) in mesh.vertices().zip(out.vertices()) {
        if a.x <= 3.75 {
            assert_eq!(b.x, a.x);
        }
        if a.y < 2.01 {
            assert_eq!(b.y, a.y);
        }
        if a.z < 4.02 {
            assert_eq!(b.z, a.z);
        }
        if a.z > z_upper {
            upper.push((a.z, b.z));
        }
    }

    // the upper Z cap is only translated
    assert!(upper.len() > 1);
    let (first_before, first_after) = upper[0];
    for &(before, after) in &upper[1..] {
        assert_relative_eq!(after - first_after, before - first_before, epsilon = TOLERANCE);
    }
    Ok(())
}

#[test]
fn test_targets_are_reached() -> StretchResult<()> {
    let mesh = rail();
    let (_, out) = stretch(&mesh, StretchRequest::new(20.5, 333.3, 17.25))?;
    let bbox = out.bounding_box()?;

    let fixed_left = 3.75;
    assert_relative_eq!(bbox.max.x - fixed_left, 20.5 - 3.75, epsilon = TOLERANCE);
    assert_relative_eq!(bbox.axis_size(Axis::Y), 333.3, epsilon = TOLERANCE);
    assert_relative_eq!(bbox.axis_size(Axis::Z), 17.25, epsilon = TOLERANCE);
    Ok(())
}

#[test]
fn test_range_bounds() -> StretchResult<()> {
    let mesh = rail();
    let bbox = mesh.bounding_box()?;
    let size = bbox.size();
    let config = rail_config();
    // targets are compared at f32 precision, so step past it
    let eps = 1e-3;

    let lowest = StretchRequest::new(size.x, size.y, size.z);
    let highest = StretchRequest::new(size.x * 10.0, size.y * 10.0, size.z * 10.0);
    assert!(AxisStretcher::new(&config, &bbox, &lowest).is_ok());
    assert!(AxisStretcher::new(&config, &bbox, &highest).is_ok());

    let too_small = StretchRequest::new(size.x - eps, size.y, size.z);
    let too_large = StretchRequest::new(size.x, size.y, size.z * 10.0 + eps);

    assert!(matches!(
        AxisStretcher::new(&config, &bbox, &too_small),
        Err(StretchError::Validation { axis: Axis::X, .. })
    ));
    assert!(matches!(
        AxisStretcher::new(&config, &bbox, &too_large),
        Err(StretchError::Validation { axis: Axis::Z, .. })
    ));
    Ok(())
}

#[test]
fn test_degenerate_margins_do_not_scale() -> StretchResult<()> {
    let mesh = rail();
    let bbox = mesh.bounding_box()?;
    let config = StretchConfig::new(
        AxisConfig::single_sided(12.0),
        AxisConfig::symmetric(150.0),
        AxisConfig::symmetric(4.8),
    );

    let stretcher = AxisStretcher::new(&config, &bbox, &StretchRequest::new(60.0, 500.0, 20.0))?;
    for axis in Axis::ALL {
        assert_eq!(stretcher.factor(axis), 1.0);
    }

    let out = stretcher.apply(&mesh);
    assert!(out
        .vertices()
        .all(|p| p.x.is_finite() && p.y.is_finite() && p.z.is_finite()));
    Ok(())
}
