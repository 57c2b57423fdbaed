//! Tessellation of truck solids into RenderMesh.

use truck_meshalgo::prelude::*;
use truck_meshalgo::tessellation::{MeshableShape, MeshedShape};

use crate::types::{BackendError, RenderMesh};

type TruckSolid = truck_modeling::Solid;

/// Tessellate a truck Solid into a single merged triangle mesh.
pub fn tessellate_solid(solid: &TruckSolid, tolerance: f64) -> Result<RenderMesh, BackendError> {
    if tolerance.is_nan() || tolerance <= 0.0 {
        return Err(BackendError::TessellationFailed {
            reason: format!("tolerance must be positive, got {}", tolerance),
        });
    }

    let meshed = solid.triangulation(tolerance);
    let mesh = meshed.to_polygon();

    let positions = mesh.positions();
    let normals = mesh.normals();
    let tri_faces = mesh.tri_faces();

    let mut vertices = Vec::with_capacity(positions.len() * 3);
    let mut norms = vec![0.0f32; positions.len() * 3];
    let mut indices = Vec::with_capacity(tri_faces.len() * 3);

    for pos in positions {
        vertices.push(pos[0] as f32);
        vertices.push(pos[1] as f32);
        vertices.push(pos[2] as f32);
    }

    for tri in tri_faces {
        for v in tri.iter() {
            indices.push(v.pos as u32);
            if let Some(n) = v.nor.and_then(|i| normals.get(i)) {
                norms[v.pos * 3] = n[0] as f32;
                norms[v.pos * 3 + 1] = n[1] as f32;
                norms[v.pos * 3 + 2] = n[2] as f32;
            }
        }
    }

    if indices.is_empty() {
        return Err(BackendError::TessellationFailed {
            reason: "solid produced no triangles".to_string(),
        });
    }

    Ok(RenderMesh {
        vertices,
        normals: norms,
        indices,
    })
}
