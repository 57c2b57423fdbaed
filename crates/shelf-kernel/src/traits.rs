use crate::types::*;
use shelf_types::{Outline, Plane, Point2, Rect};

/// Geometry modeling backend. Provides canvas, extrusion and boolean operations.
/// Implemented by TruckBackend (real B-rep) and MockBackend (deterministic test double).
///
/// Every call completes before the next is issued; nothing is retried.
pub trait GeometryBackend {
    /// Create an empty canvas on a plane.
    fn create_canvas(&mut self, plane: Plane) -> Result<CanvasHandle, BackendError>;

    /// Create a canvas on a planar face. The face boundary is projected into
    /// the canvas as an outline.
    fn create_canvas_on_face(&mut self, face: FaceHandle) -> Result<CanvasHandle, BackendError>;

    /// Add a closed outline to a canvas.
    fn add_outline(
        &mut self,
        canvas: CanvasHandle,
        outline: Outline,
    ) -> Result<OutlineHandle, BackendError>;

    fn add_rect_outline(
        &mut self,
        canvas: CanvasHandle,
        rect: Rect,
    ) -> Result<OutlineHandle, BackendError> {
        self.add_outline(canvas, Outline::rect(rect))
    }

    fn add_circle_outline(
        &mut self,
        canvas: CanvasHandle,
        center: Point2,
        radius: f64,
    ) -> Result<OutlineHandle, BackendError> {
        self.add_outline(canvas, Outline::circle(center, radius))
    }

    /// Discard an outline, e.g. a projected construction boundary.
    fn remove_outline(
        &mut self,
        canvas: CanvasHandle,
        outline: OutlineHandle,
    ) -> Result<(), BackendError>;

    /// Extrude a region along its canvas normal by a signed `depth`.
    ///
    /// With `SolidMode::Create` a new body is returned. With
    /// `SolidMode::CutFrom` the swept volume is subtracted from the target
    /// and the target's handle is returned.
    fn synthesize_solid(
        &mut self,
        region: RegionHandle,
        depth: f64,
        mode: SolidMode,
    ) -> Result<SolidHandle, BackendError>;

    /// Delete a body from the session.
    fn remove_solid(&mut self, solid: SolidHandle) -> Result<(), BackendError>;

    /// Tessellate a solid to a triangle mesh.
    fn tessellate(&mut self, solid: SolidHandle, tolerance: f64)
        -> Result<RenderMesh, BackendError>;
}

/// Read-only queries on backend state.
pub trait BackendIntrospect {
    /// The canvas's plane and local frame.
    fn canvas_plane(&self, canvas: CanvasHandle) -> Result<Plane, BackendError>;

    /// Outlines currently on a canvas, in insertion order.
    fn outlines(&self, canvas: CanvasHandle) -> Result<Vec<OutlineHandle>, BackendError>;

    /// Regions of a canvas, in the backend's own ordinal order.
    /// The order may change whenever outlines are added or removed.
    fn regions(&self, canvas: CanvasHandle) -> Result<Vec<RegionInfo>, BackendError>;

    /// Region at a raw ordinal. The caller must know what the ordinal denotes.
    fn region_at(&self, canvas: CanvasHandle, index: usize) -> Result<RegionHandle, BackendError> {
        let regions = self.regions(canvas)?;
        regions
            .get(index)
            .map(|r| r.handle)
            .ok_or(BackendError::RegionOutOfRange {
                index,
                count: regions.len(),
            })
    }

    /// Faces of a solid with their normals, in ascending face id order.
    fn faces(&self, solid: SolidHandle) -> Result<Vec<FaceInfo>, BackendError>;

    /// Live solids, in creation order.
    fn solids(&self) -> Vec<SolidHandle>;
}
