use shelf_kernel::{
    BackendIntrospect, CanvasHandle, FaceHandle, GeometryBackend, RegionHandle, SolidHandle,
};
use shelf_layout::{select_oriented_face, select_region, RegionQuery};
use shelf_types::{NodePath, RegionSelection};

use crate::error::{AtPath, BuildError};

/// Combined trait for code that needs both mutable GeometryBackend access
/// and read-only BackendIntrospect access on the same object.
pub trait BackendBundle: GeometryBackend + BackendIntrospect {}

impl<T: GeometryBackend + BackendIntrospect> BackendBundle for T {}

/// Resolve a region on `canvas` under the configured selection mode.
pub(crate) fn find_region(
    kb: &dyn BackendBundle,
    canvas: CanvasHandle,
    query: &RegionQuery,
    selection: RegionSelection,
    path: &NodePath,
) -> Result<RegionHandle, BuildError> {
    let regions = kb.regions(canvas).at(path)?;
    select_region(&regions, query, selection).at(path)
}

/// Resolve the face of `solid` most aligned with `target`.
pub(crate) fn find_face(
    kb: &dyn BackendBundle,
    solid: SolidHandle,
    target: [f64; 3],
    path: &NodePath,
) -> Result<FaceHandle, BuildError> {
    let faces = kb.faces(solid).at(path)?;
    select_oriented_face(&faces, target).at(path)
}
