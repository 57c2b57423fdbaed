//! Binary STL export from RenderMesh.

use shelf_kernel::RenderMesh;

#[derive(Debug, Clone, thiserror::Error)]
pub enum StlError {
    #[error("mesh has no triangles")]
    Empty,

    #[error("index {index} out of range (vertex count = {vertex_count})")]
    IndexOutOfRange { index: u32, vertex_count: usize },
}

/// Export a RenderMesh as a binary STL file.
///
/// Binary STL format:
/// - 80-byte header (arbitrary text)
/// - u32 triangle count (little-endian)
/// - For each triangle: 3×f32 normal + 3×(3×f32 vertex) + u16 attribute = 50 bytes
pub fn export_binary_stl(mesh: &RenderMesh, name: &str) -> Result<Vec<u8>, StlError> {
    let tri_count = mesh.triangle_count();
    if tri_count == 0 {
        return Err(StlError::Empty);
    }

    let vertex_count = mesh.vertices.len() / 3;
    if let Some(&index) = mesh.indices.iter().find(|&&i| i as usize >= vertex_count) {
        return Err(StlError::IndexOutOfRange {
            index,
            vertex_count,
        });
    }

    let mut buf = Vec::with_capacity(84 + tri_count * 50);

    let header = format!("shelf-build: {}", name);
    let header_bytes = header.as_bytes();
    buf.extend_from_slice(&header_bytes[..header_bytes.len().min(80)]);
    buf.resize(80, 0u8);

    buf.extend_from_slice(&(tri_count as u32).to_le_bytes());

    for tri in mesh.indices.chunks_exact(3) {
        let corner = |k: usize| {
            let i = tri[k] as usize * 3;
            [mesh.vertices[i], mesh.vertices[i + 1], mesh.vertices[i + 2]]
        };
        let (p0, p1, p2) = (corner(0), corner(1), corner(2));

        for c in facet_normal(p0, p1, p2) {
            buf.extend_from_slice(&c.to_le_bytes());
        }
        for p in [p0, p1, p2] {
            for c in p {
                buf.extend_from_slice(&c.to_le_bytes());
            }
        }
        // Attribute byte count (unused)
        buf.extend_from_slice(&0u16.to_le_bytes());
    }

    Ok(buf)
}

/// Unit normal of a counter-clockwise triangle; +Z when degenerate.
fn facet_normal(p0: [f32; 3], p1: [f32; 3], p2: [f32; 3]) -> [f32; 3] {
    let a = [p1[0] - p0[0], p1[1] - p0[1], p1[2] - p0[2]];
    let b = [p2[0] - p0[0], p2[1] - p0[1], p2[2] - p0[2]];
    let n = [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ];
    let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
    if len > 1e-12 {
        [n[0] / len, n[1] / len, n[2] / len]
    } else {
        [0.0, 0.0, 1.0]
    }
}
