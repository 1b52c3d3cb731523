// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! STL importer

use crate::error::{StretchError, StretchResult};
use crate::geometry::{Mesh, Triangle};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

/// Binary STL header size in bytes
const HEADER_SIZE: usize = 80;

/// Normal, three vertices and the attribute count
const TRIANGLE_SIZE: usize = 50;

/// How much of the file is looked at for the `solid` / `facet` lines
const ASCII_SNIFF_SIZE: usize = 1024;

/// On-disk STL flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StlEncoding {
    Ascii,
    Binary,
}

/// Mesh together with the encoding it was read from, so it can be written
/// back the same way
#[derive(Debug, Clone)]
pub struct LoadedMesh {
    pub mesh: Mesh,
    pub encoding: StlEncoding,
}

/// Guess the encoding of raw STL bytes.
///
/// Binary files may also start with `solid`, so a file whose length matches
/// the triangle count in its header is treated as binary first. Otherwise
/// ASCII needs a `solid` line followed by a `facet` or `endsolid` line.
pub fn detect_encoding(bytes: &[u8]) -> StlEncoding {
    if binary_length_matches(bytes) {
        return StlEncoding::Binary;
    }

    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(ASCII_SNIFF_SIZE)]);
    let mut lines = head.lines().map(str::trim).filter(|line| !line.is_empty());
    let solid = lines.next().is_some_and(|line| line.starts_with("solid"));
    let body = lines
        .next()
        .is_some_and(|line| line.starts_with("facet") || line.starts_with("endsolid"));

    if solid && body {
        StlEncoding::Ascii
    } else {
        StlEncoding::Binary
    }
}

fn binary_length_matches(bytes: &[u8]) -> bool {
    if bytes.len() < HEADER_SIZE + 4 {
        return false;
    }
    let mut count = [0u8; 4];
    count.copy_from_slice(&bytes[HEADER_SIZE..HEADER_SIZE + 4]);
    let expected = HEADER_SIZE + 4 + u32::from_le_bytes(count) as usize * TRIANGLE_SIZE;
    expected == bytes.len()
}

/// Parse STL bytes. `path` is only used in error messages.
///
/// The reader is picked from [`detect_encoding`], so the returned encoding
/// is always the one the bytes were actually decoded as.
pub fn parse_stl(bytes: &[u8], path: &Path) -> StretchResult<LoadedMesh> {
    if bytes.len() < 15 {
        return Err(StretchError::parse(path, "file too small to be valid STL"));
    }

    let encoding = detect_encoding(bytes);
    let mut cursor = Cursor::new(bytes);
    let reader = match encoding {
        StlEncoding::Ascii => stl_io::AsciiStlReader::create_triangle_iterator(&mut cursor),
        StlEncoding::Binary => stl_io::BinaryStlReader::create_triangle_iterator(&mut cursor),
    }
    .map_err(|e| StretchError::parse(path, e.to_string()))?;

    let mut mesh = Mesh::with_capacity(reader.size_hint().0);
    for (index, triangle) in reader.enumerate() {
        let triangle = triangle
            .map_err(|e| StretchError::parse(path, format!("facet {}: {}", index, e)))?;
        mesh.add_triangle(convert_triangle(&triangle));
    }

    debug!(
        path = %path.display(),
        ?encoding,
        triangles = mesh.triangle_count(),
        "parsed STL"
    );

    Ok(LoadedMesh { mesh, encoding })
}

/// Read and parse an STL file from disk
pub fn import_stl_file(path: impl AsRef<Path>) -> StretchResult<LoadedMesh> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    parse_stl(&bytes, path)
}

fn convert_triangle(triangle: &stl_io::Triangle) -> Triangle {
    let point = |v: &stl_io::Vertex| Point3::new(v[0] as f64, v[1] as f64, v[2] as f64);
    let n = &triangle.normal;

    Triangle::new(
        Vector3::new(n[0] as f64, n[1] as f64, n[2] as f64),
        [
            point(&triangle.vertices[0]),
            point(&triangle.vertices[1]),
            point(&triangle.vertices[2]),
        ],
    )
}
