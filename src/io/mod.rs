// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - STL import, export and comparison

mod compare;
mod exporter;
mod importer;

pub use compare::{compare_meshes, MeshComparison};
pub use exporter::{export_stl, write_stl_ascii, write_stl_binary};
pub use importer::{detect_encoding, import_stl_file, parse_stl, LoadedMesh, StlEncoding};
