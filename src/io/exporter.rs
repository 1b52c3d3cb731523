// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! STL exporter

use super::StlEncoding;
use crate::error::StretchResult;
use crate::geometry::{Mesh, Triangle};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Export mesh to STL in the given encoding.
///
/// Facet normals are written exactly as stored on each triangle.
pub fn export_stl(mesh: &Mesh, path: impl AsRef<Path>, encoding: StlEncoding) -> StretchResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);

    match encoding {
        StlEncoding::Binary => write_stl_binary(mesh, &mut writer)?,
        StlEncoding::Ascii => write_stl_ascii(mesh, &mut writer)?,
    }
    writer.flush()?;

    debug!(
        path = %path.display(),
        ?encoding,
        triangles = mesh.triangle_count(),
        "wrote STL"
    );
    Ok(())
}

pub fn write_stl_binary<W: Write>(mesh: &Mesh, writer: &mut W) -> StretchResult<()> {
    let triangles: Vec<stl_io::Triangle> = mesh.triangles.iter().map(to_stl_triangle).collect();
    stl_io::write_stl(writer, triangles.iter())?;
    Ok(())
}

pub fn write_stl_ascii<W: Write>(mesh: &Mesh, writer: &mut W) -> StretchResult<()> {
    writeln!(writer, "solid mesh")?;

    for tri in &mesh.triangles {
        let n = tri.normal;
        writeln!(
            writer,
            "  facet normal {} {} {}",
            n.x as f32, n.y as f32, n.z as f32
        )?;
        writeln!(writer, "    outer loop")?;
        for v in &tri.vertices {
            writeln!(
                writer,
                "      vertex {} {} {}",
                v.x as f32, v.y as f32, v.z as f32
            )?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }

    writeln!(writer, "endsolid mesh")?;
    Ok(())
}

fn to_stl_triangle(tri: &Triangle) -> stl_io::Triangle {
    let vertex = |i: usize| {
        let p = tri.vertices[i];
        stl_io::Vertex::new([p.x as f32, p.y as f32, p.z as f32])
    };

    stl_io::Triangle {
        normal: stl_io::Normal::new([
            tri.normal.x as f32,
            tri.normal.y as f32,
            tri.normal.z as f32,
        ]),
        vertices: [vertex(0), vertex(1), vertex(2)],
    }
}
