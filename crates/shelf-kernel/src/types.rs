use serde::{Deserialize, Serialize};
use shelf_types::Rect;

/// Opaque handle to a 2D canvas in the backend.
/// Valid only for the current backend session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanvasHandle(pub(crate) u64);

/// Handle to one closed outline on a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OutlineHandle(pub(crate) u64);

/// Handle to a planar region of a canvas.
///
/// A region is identified by the outline bounding it from outside; its holes
/// are whatever outlines that outline directly encloses when the region is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionHandle {
    pub(crate) canvas: CanvasHandle,
    pub(crate) outer: OutlineHandle,
}

/// Opaque handle to a solid in the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SolidHandle(pub(crate) u64);

/// Stable identifier of a face of a solid. Lower ids were created earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceHandle(pub(crate) u64);

impl SolidHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl FaceHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl OutlineHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// What an extrusion does with the swept region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolidMode {
    /// Make a new body.
    Create,
    /// Subtract the swept region from an existing body.
    CutFrom(SolidHandle),
}

/// A face of a solid with its outward normal.
/// `normal` is `None` for non-planar faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceInfo {
    pub handle: FaceHandle,
    pub normal: Option<[f64; 3]>,
    /// A point on the face. Orders parallel faces along a direction.
    pub point: [f64; 3],
}

/// A region of a canvas as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionInfo {
    pub handle: RegionHandle,
    /// Area of the outer outline minus its holes.
    pub area: f64,
    /// Bounding rectangle of the outer outline, in the canvas frame.
    pub bounds: Rect,
    pub hole_count: usize,
}

/// Axis-aligned box in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl Aabb {
    pub fn from_points(points: &[[f64; 3]]) -> Self {
        let mut min = [f64::MAX; 3];
        let mut max = [f64::MIN; 3];
        for p in points {
            for i in 0..3 {
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        }
        Self { min, max }
    }

    /// Volume shared with `other`; zero when they only touch.
    pub fn overlap_volume(&self, other: &Aabb) -> f64 {
        (0..3)
            .map(|i| (self.max[i].min(other.max[i]) - self.min[i].max(other.min[i])).max(0.0))
            .product()
    }

    /// Point lies strictly inside on every axis, by more than `eps`.
    pub fn strictly_contains(&self, p: [f64; 3], eps: f64) -> bool {
        (0..3).all(|i| p[i] > self.min[i] + eps && p[i] < self.max[i] - eps)
    }

    pub fn approx_eq(&self, other: &Aabb, tol: f64) -> bool {
        (0..3).all(|i| {
            (self.min[i] - other.min[i]).abs() <= tol && (self.max[i] - other.max[i]).abs() <= tol
        })
    }
}

/// Triangle mesh of one solid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderMesh {
    /// Flat array of vertex positions [x0, y0, z0, x1, y1, z1, ...].
    pub vertices: Vec<f32>,
    /// Flat array of vertex normals, same layout as `vertices`.
    pub normals: Vec<f32>,
    /// Triangle indices into the vertex array.
    pub indices: Vec<u32>,
}

impl RenderMesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Errors from backend operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BackendError {
    #[error("{kind} {id} not found")]
    EntityNotFound { kind: &'static str, id: u64 },

    #[error("boolean operation failed: {reason}")]
    BooleanFailed { reason: String },

    #[error("invalid profile: {reason}")]
    InvalidProfile { reason: String },

    #[error("outlines {a} and {b} intersect")]
    IntersectingOutlines { a: u64, b: u64 },

    #[error("region index {index} out of range ({count} regions)")]
    RegionOutOfRange { index: usize, count: usize },

    #[error("tessellation failed: {reason}")]
    TessellationFailed { reason: String },

    #[error("operation not supported: {operation}")]
    NotSupported { operation: String },
}

impl BackendError {
    pub(crate) fn canvas(handle: CanvasHandle) -> Self {
        BackendError::EntityNotFound {
            kind: "canvas",
            id: handle.0,
        }
    }

    pub(crate) fn solid(handle: SolidHandle) -> Self {
        BackendError::EntityNotFound {
            kind: "solid",
            id: handle.0,
        }
    }

    pub(crate) fn face(handle: FaceHandle) -> Self {
        BackendError::EntityNotFound {
            kind: "face",
            id: handle.0,
        }
    }

    pub(crate) fn outline(handle: OutlineHandle) -> Self {
        BackendError::EntityNotFound {
            kind: "outline",
            id: handle.0,
        }
    }
}
