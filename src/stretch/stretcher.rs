// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Three-axis selective stretch

use super::{AxisConfig, AxisRemap, StretchRequest, TargetRange};
use crate::config::StretchConfig;
use crate::error::StretchResult;
use crate::geometry::{Axis, BoundingBox, Mesh};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Validated stretch for one mesh: one remap per axis
#[derive(Debug, Clone)]
pub struct AxisStretcher {
    config: StretchConfig,
    bbox: BoundingBox,
    request: StretchRequest,
    remaps: [AxisRemap; 3],
}

impl AxisStretcher {
    /// Validate the configuration and the request against `bbox`, then
    /// precompute the per-axis remaps. Nothing is built if any check fails.
    pub fn new(
        config: &StretchConfig,
        bbox: &BoundingBox,
        request: &StretchRequest,
    ) -> StretchResult<Self> {
        config.validate()?;
        request.validate(bbox, config.max_scale)?;

        let remaps = Axis::ALL.map(|axis| {
            let (min, max) = bbox.extent(axis);
            let remap = AxisRemap::new(config.axis(axis), min, max, request.target(axis));
            debug!(
                %axis,
                min,
                max,
                target = request.target(axis),
                factor = remap.factor(),
                "prepared axis remap"
            );
            remap
        });

        Ok(Self {
            config: *config,
            bbox: *bbox,
            request: *request,
            remaps,
        })
    }

    pub fn factor(&self, axis: Axis) -> f64 {
        self.remaps[axis.index()].factor()
    }

    pub fn remap_point(&self, point: &Point3<f64>) -> Point3<f64> {
        Point3::new(
            self.remaps[0].apply(point.x),
            self.remaps[1].apply(point.y),
            self.remaps[2].apply(point.z),
        )
    }

    /// Remap every vertex into a new mesh with the same triangles in the
    /// same order
    pub fn apply(&self, mesh: &Mesh) -> Mesh {
        let stretched = mesh.map_vertices(|p| self.remap_point(p));
        info!(
            triangles = stretched.triangle_count(),
            "stretched mesh"
        );
        stretched
    }

    pub fn report(&self, triangle_count: usize) -> StretchReport {
        let axes = Axis::ALL
            .iter()
            .map(|&axis| AxisReport {
                axis,
                config: self.config.axis(axis),
                detected: self.bbox.axis_size(axis),
                target: self.request.target(axis),
                range: TargetRange::for_axis(&self.bbox, axis, self.config.max_scale),
                factor: self.factor(axis),
            })
            .collect();

        StretchReport {
            triangle_count,
            axes,
        }
    }
}

/// Summary of one axis of a stretch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxisReport {
    pub axis: Axis,
    pub config: AxisConfig,
    pub detected: f64,
    pub target: f64,
    pub range: TargetRange,
    pub factor: f64,
}

/// What was done to a mesh, for display or `--json` output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StretchReport {
    pub triangle_count: usize,
    pub axes: Vec<AxisReport>,
}

/// Extract bounds, validate and stretch in one call
pub fn stretch_mesh(
    mesh: &Mesh,
    config: &StretchConfig,
    request: &StretchRequest,
) -> StretchResult<(Mesh, StretchReport)> {
    let bbox = mesh.bounding_box()?;
    let stretcher = AxisStretcher::new(config, &bbox, request)?;
    let stretched = stretcher.apply(mesh);
    let report = stretcher.report(stretched.triangle_count());
    Ok((stretched, report))
}
