// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - mesh representation, bounds and fixtures

mod axis;
mod bbox;
mod mesh;
mod primitives;

pub use axis::Axis;
pub use bbox::BoundingBox;
pub use mesh::{Mesh, Triangle};
pub use primitives::Primitive;
