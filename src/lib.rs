// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Selective Stretch
//!
//! Resize STL parts along X, Y and Z while keeping fixed margins near the
//! boundaries undeformed. Only the interior between the margins scales, so
//! end features such as screw holes or mounting tabs survive unchanged.

pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod stretch;

pub use config::StretchConfig;
pub use error::{StretchError, StretchResult};
pub use geometry::{Axis, BoundingBox, Mesh, Triangle};
pub use io::{export_stl, import_stl_file, StlEncoding};
pub use stretch::{stretch_mesh, AxisConfig, AxisStretcher, StretchReport, StretchRequest};

use std::path::Path;

/// Stretch an STL file on disk and write the result in `encoding`, or in the
/// input's own encoding when `None`
pub fn stretch_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &StretchConfig,
    request: &StretchRequest,
    encoding: Option<StlEncoding>,
) -> StretchResult<StretchReport> {
    let loaded = import_stl_file(input)?;
    let (stretched, report) = stretch_mesh(&loaded.mesh, config, request)?;
    export_stl(&stretched, output, encoding.unwrap_or(loaded.encoding))?;
    Ok(report)
}
