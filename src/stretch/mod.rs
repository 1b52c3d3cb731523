// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Selective stretch - margins stay rigid, the interior scales

mod remap;
mod request;
mod stretcher;

pub use remap::{AxisConfig, AxisRemap};
pub use request::{StretchRequest, TargetRange, DEFAULT_MAX_SCALE};
pub use stretcher::{stretch_mesh, AxisReport, AxisStretcher, StretchReport};
